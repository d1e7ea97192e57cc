//! HTTP transport for the game assistant service
//!
//! Issues exactly one request per call and decodes the response body into the
//! uniform envelope. There is no retry or failover; resilience is left to the
//! caller.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{self, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{
    config::AssistantClientConfig,
    endpoint::{Endpoint, ParamBinding},
    error::{AssistantError, Result},
    model::common::{ApiResponse, decode_envelope},
};

/// Placeholder for endpoints that take no query or body
#[derive(Serialize)]
pub struct NoParams {}

/// HTTP client bound to one service base URL.
///
/// Holds no mutable state; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct AssistantHttpClient {
    client: Client,
    config: AssistantClientConfig,
}

impl AssistantHttpClient {
    /// Create a new HTTP client
    pub fn new(config: AssistantClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.access_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                AssistantError::InvalidConfig("access token is not a valid header value".into())
            })?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(AssistantError::Transport)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AssistantClientConfig {
        &self.config
    }

    /// Build full URL for a path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Build full URL including the encoded query string, as it goes on the wire
    pub fn build_url_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<String> {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| AssistantError::InvalidConfig(format!("unencodable query: {}", e)))?;

        let url = self.build_url(path);
        if encoded.is_empty() {
            Ok(url)
        } else {
            Ok(format!("{}?{}", url, encoded))
        }
    }

    /// Send the request an endpoint describes and decode its envelope.
    ///
    /// `query` is used for query-bound endpoints and `body` for body-bound
    /// ones; anything else passed is ignored.
    pub async fn invoke<T, Q, B>(
        &self,
        endpoint: Endpoint,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = match (endpoint.binding(), query) {
            (ParamBinding::Query { .. }, Some(query)) => {
                self.build_url_with_query(endpoint.path(), query)?
            }
            (ParamBinding::Query { required }, None) if !required.is_empty() => {
                return Err(AssistantError::InvalidRequest(format!(
                    "{} requires query parameters {:?}",
                    endpoint.name(),
                    required
                )));
            }
            (ParamBinding::Body, _) if body.is_none() => {
                return Err(AssistantError::InvalidRequest(format!(
                    "{} requires a request body",
                    endpoint.name()
                )));
            }
            _ => self.build_url(endpoint.path()),
        };

        let mut request = self.client.request(endpoint.method(), &url);
        if let (ParamBinding::Body, Some(body)) = (endpoint.binding(), body) {
            request = request.json(body);
        }

        debug!(
            endpoint = endpoint.name(),
            method = %endpoint.method(),
            url = %url,
            "Sending request"
        );

        let response = request.send().await?;
        self.handle_response(endpoint, response).await
    }

    /// GET an endpoint without parameters
    pub async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<ApiResponse<T>> {
        self.invoke::<T, NoParams, NoParams>(endpoint, None, None).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        query: &Q,
    ) -> Result<ApiResponse<T>> {
        self.invoke::<T, Q, NoParams>(endpoint, Some(query), None).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        self.invoke::<T, NoParams, B>(endpoint, None, Some(body)).await
    }

    /// Decode the body into an envelope.
    ///
    /// A non-2xx response whose body is still a valid envelope is returned as
    /// such, so its code and message reach the caller. Otherwise it is a
    /// transport failure.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        response: Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let envelope = decode_envelope::<T>(&body)?;
            debug!(
                endpoint = endpoint.name(),
                code = envelope.code,
                "Decoded response envelope"
            );
            return Ok(envelope);
        }

        match decode_envelope::<T>(&body) {
            Ok(envelope) => {
                debug!(
                    endpoint = endpoint.name(),
                    http_status = status.as_u16(),
                    code = envelope.code,
                    "Non-2xx response carried an envelope"
                );
                Ok(envelope)
            }
            Err(_) => {
                let body = String::from_utf8_lossy(&body).into_owned();
                error!("Request {} failed with status {}: {}", endpoint, status, body);
                Err(AssistantError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
