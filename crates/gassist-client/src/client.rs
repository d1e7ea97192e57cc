// AssistantClient - facade for all game assistant API operations

use serde::Serialize;
use tracing::warn;

use crate::{
    config::AssistantClientConfig,
    endpoint::Endpoint,
    error::Result,
    http::AssistantHttpClient,
    model::{
        ActionStatusData, ApiOutcome, ApiResponse, AppActionData, AppActionRequest,
        AppConfigRequest, AppCreateData, AppDestroyData, AppDestroyRequest, AppListData,
        AppMsgData, AppMsgRequest, ConfigListData, HealthData,
    },
};

/// Typed client for the game assistant service.
///
/// Every method sends one request and returns either the payload or the
/// application failure the service reported. Transport and decode problems
/// are `Err`. Safe to share across tasks; clones are cheap.
#[derive(Clone, Debug)]
pub struct AssistantClient {
    http_client: AssistantHttpClient,
}

impl AssistantClient {
    /// Create a new AssistantClient with the given configuration
    pub fn new(config: AssistantClientConfig) -> Result<Self> {
        let http_client = AssistantHttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Create a new AssistantClient from a single base URL
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(AssistantClientConfig::new(base_url))
    }

    /// Create a new AssistantClient configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(AssistantClientConfig::from_env()?)
    }

    /// Transport access for callers that want the raw envelope
    pub fn http(&self) -> &AssistantHttpClient {
        &self.http_client
    }

    fn outcome<T>(&self, endpoint: Endpoint, response: ApiResponse<T>) -> Result<ApiOutcome<T>> {
        let outcome = response.into_result(&self.http_client.config().success_codes)?;
        if let Some(failure) = outcome.failure() {
            warn!(
                endpoint = endpoint.name(),
                code = failure.code,
                "Service reported failure: {}",
                failure.message
            );
        }
        Ok(outcome)
    }

    // ============================================================================
    // Health
    // ============================================================================

    pub async fn health_check(&self) -> Result<ApiOutcome<HealthData>> {
        let endpoint = Endpoint::HealthCheck;
        let response: ApiResponse<HealthData> = self.http_client.get(endpoint).await?;
        self.outcome(endpoint, response)
    }

    // ============================================================================
    // App control
    // ============================================================================

    pub async fn get_app_list(&self) -> Result<ApiOutcome<AppListData>> {
        let endpoint = Endpoint::GetAppList;
        let response: ApiResponse<AppListData> = self.http_client.get(endpoint).await?;
        self.outcome(endpoint, response)
    }

    pub async fn create_app(&self, config: &AppConfigRequest) -> Result<ApiOutcome<AppCreateData>> {
        let endpoint = Endpoint::CreateApp;
        let response: ApiResponse<AppCreateData> =
            self.http_client.post_json(endpoint, config).await?;
        self.outcome(endpoint, response)
    }

    pub async fn destroy_app(
        &self,
        request: &AppDestroyRequest,
    ) -> Result<ApiOutcome<AppDestroyData>> {
        let endpoint = Endpoint::DestroyApp;
        let response: ApiResponse<AppDestroyData> =
            self.http_client.post_json(endpoint, request).await?;
        self.outcome(endpoint, response)
    }

    pub async fn send_message(&self, request: &AppMsgRequest) -> Result<ApiOutcome<AppMsgData>> {
        let endpoint = Endpoint::SendMessage;
        let response: ApiResponse<AppMsgData> =
            self.http_client.post_json(endpoint, request).await?;
        self.outcome(endpoint, response)
    }

    pub async fn execute_action(
        &self,
        request: &AppActionRequest,
    ) -> Result<ApiOutcome<AppActionData>> {
        let endpoint = Endpoint::ExecuteAction;
        let response: ApiResponse<AppActionData> =
            self.http_client.post_json(endpoint, request).await?;
        self.outcome(endpoint, response)
    }

    pub async fn get_action_status(
        &self,
        virtual_name: &str,
    ) -> Result<ApiOutcome<ActionStatusData>> {
        #[derive(Serialize)]
        struct Query<'a> {
            virtual_name: &'a str,
        }

        let endpoint = Endpoint::GetActionStatus;
        let response: ApiResponse<ActionStatusData> = self
            .http_client
            .get_with_query(endpoint, &Query { virtual_name })
            .await?;
        self.outcome(endpoint, response)
    }

    // ============================================================================
    // Config management
    // ============================================================================

    pub async fn list_app_configs(&self) -> Result<ApiOutcome<ConfigListData>> {
        let endpoint = Endpoint::ListAppConfigs;
        let response: ApiResponse<ConfigListData> = self.http_client.get(endpoint).await?;
        self.outcome(endpoint, response)
    }

    /// List task configs, optionally filtered by task type
    pub async fn list_task_configs(
        &self,
        task_type: Option<&str>,
    ) -> Result<ApiOutcome<ConfigListData>> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            task_type: Option<&'a str>,
        }

        let endpoint = Endpoint::ListTaskConfigs;
        let response: ApiResponse<ConfigListData> = self
            .http_client
            .get_with_query(endpoint, &Query { task_type })
            .await?;
        self.outcome(endpoint, response)
    }
}
