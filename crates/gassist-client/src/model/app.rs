// App instance model types

use serde::{Deserialize, Serialize};

use crate::constants::app_defaults;

/// Health check payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthData {
    pub service: String,
    pub version: String,
}

/// Running app instances
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppListData {
    pub count: i32,
    pub instances: Vec<AppInstance>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppInstance {
    pub virtual_name: String,
    pub cache_prefix: String,
    pub main_role: String,
    pub is_running: bool,
}

/// Parameters for creating an app instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfigRequest {
    pub virtual_name: String,
    #[serde(default = "default_cache_prefix")]
    pub cache_prefix: String,
    #[serde(default)]
    pub warehouse_password: String,
    #[serde(default = "default_main_role")]
    pub main_role: String,
    #[serde(default)]
    pub dm_debug: bool,
    #[serde(default)]
    pub auto_init_actions: bool,
}

fn default_cache_prefix() -> String {
    app_defaults::CACHE_PREFIX.to_string()
}

fn default_main_role() -> String {
    app_defaults::MAIN_ROLE.to_string()
}

impl AppConfigRequest {
    /// Config for `virtual_name` with every other field at its default
    pub fn new(virtual_name: &str) -> Self {
        Self {
            virtual_name: virtual_name.to_string(),
            cache_prefix: default_cache_prefix(),
            warehouse_password: app_defaults::WAREHOUSE_PASSWORD.to_string(),
            main_role: default_main_role(),
            dm_debug: false,
            auto_init_actions: false,
        }
    }

    pub fn with_cache_prefix(mut self, cache_prefix: &str) -> Self {
        self.cache_prefix = cache_prefix.to_string();
        self
    }

    pub fn with_warehouse_password(mut self, password: &str) -> Self {
        self.warehouse_password = password.to_string();
        self
    }

    pub fn with_main_role(mut self, main_role: &str) -> Self {
        self.main_role = main_role.to_string();
        self
    }

    pub fn with_dm_debug(mut self, enabled: bool) -> Self {
        self.dm_debug = enabled;
        self
    }

    pub fn with_auto_init_actions(mut self, enabled: bool) -> Self {
        self.auto_init_actions = enabled;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppCreateData {
    pub virtual_name: String,
    pub is_starting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppDestroyRequest {
    pub virtual_name: String,
}

impl AppDestroyRequest {
    pub fn new(virtual_name: &str) -> Self {
        Self {
            virtual_name: virtual_name.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppDestroyData {
    pub virtual_name: String,
    pub is_destroyed: bool,
}

/// Message delivered to a running instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppMsgRequest {
    pub virtual_name: String,
    pub msg: String,
}

impl AppMsgRequest {
    pub fn new(virtual_name: &str, msg: &str) -> Self {
        Self {
            virtual_name: virtual_name.to_string(),
            msg: msg.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppMsgData {
    pub virtual_name: String,
    pub msg: String,
}
