//! Endpoint directory
//!
//! Every remote operation the service exposes, with the HTTP method, path and
//! parameter binding it uses. [`crate::AssistantHttpClient::invoke`] is the
//! single routine that interprets an entry.

use std::fmt;

use reqwest::Method;

use crate::constants::app_api_path;

/// Where an operation's input goes on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamBinding {
    None,
    /// JSON request body
    Body,
    /// URL query string; `required` lists the keys that must be present
    Query { required: &'static [&'static str] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    HealthCheck,
    GetAppList,
    CreateApp,
    DestroyApp,
    SendMessage,
    ExecuteAction,
    GetActionStatus,
    ListAppConfigs,
    ListTaskConfigs,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::HealthCheck,
        Endpoint::GetAppList,
        Endpoint::CreateApp,
        Endpoint::DestroyApp,
        Endpoint::SendMessage,
        Endpoint::ExecuteAction,
        Endpoint::GetActionStatus,
        Endpoint::ListAppConfigs,
        Endpoint::ListTaskConfigs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::HealthCheck => "health_check",
            Endpoint::GetAppList => "get_app_list",
            Endpoint::CreateApp => "create_app",
            Endpoint::DestroyApp => "destroy_app",
            Endpoint::SendMessage => "send_message",
            Endpoint::ExecuteAction => "execute_action",
            Endpoint::GetActionStatus => "get_action_status",
            Endpoint::ListAppConfigs => "list_app_configs",
            Endpoint::ListTaskConfigs => "list_task_configs",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::CreateApp
            | Endpoint::DestroyApp
            | Endpoint::SendMessage
            | Endpoint::ExecuteAction => Method::POST,
            Endpoint::HealthCheck
            | Endpoint::GetAppList
            | Endpoint::GetActionStatus
            | Endpoint::ListAppConfigs
            | Endpoint::ListTaskConfigs => Method::GET,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::HealthCheck => app_api_path::HEALTH,
            Endpoint::GetAppList => app_api_path::APP_LIST,
            Endpoint::CreateApp => app_api_path::APP_CREATE,
            Endpoint::DestroyApp => app_api_path::APP_DESTROY,
            Endpoint::SendMessage => app_api_path::APP_MSG,
            Endpoint::ExecuteAction => app_api_path::APP_ACTION,
            Endpoint::GetActionStatus => app_api_path::ACTION_STATUS,
            Endpoint::ListAppConfigs => app_api_path::APP_CONFIGS,
            Endpoint::ListTaskConfigs => app_api_path::TASK_CONFIGS,
        }
    }

    pub fn binding(self) -> ParamBinding {
        match self {
            Endpoint::CreateApp
            | Endpoint::DestroyApp
            | Endpoint::SendMessage
            | Endpoint::ExecuteAction => ParamBinding::Body,
            Endpoint::GetActionStatus => ParamBinding::Query {
                required: &["virtual_name"],
            },
            Endpoint::ListTaskConfigs => ParamBinding::Query { required: &[] },
            Endpoint::HealthCheck | Endpoint::GetAppList | Endpoint::ListAppConfigs => {
                ParamBinding::None
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
