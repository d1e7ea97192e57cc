// Action model types

use serde::{Deserialize, Serialize};

use super::common::DynamicMap;

/// Trigger a named action on an instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppActionRequest {
    pub virtual_name: String,
    pub action: String,
    #[serde(default)]
    pub params: DynamicMap,
}

impl AppActionRequest {
    pub fn new(virtual_name: &str, action: &str) -> Self {
        Self {
            virtual_name: virtual_name.to_string(),
            action: action.to_string(),
            params: DynamicMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppActionData {
    pub virtual_name: String,
    pub action: String,
}

/// Per-action status of an instance; `actions` is null when none are known
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ActionStatusData {
    pub virtual_name: String,
    pub actions: Option<DynamicMap>,
}
