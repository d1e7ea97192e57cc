// Stored configuration set model types

use serde::{Deserialize, Serialize};

use super::common::DynamicMap;

/// App or task configuration sets stored on the service
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigListData {
    pub configs: Vec<DynamicMap>,
    pub count: i32,
}
