// Model types for game assistant API requests and responses

pub mod action;
pub mod app;
pub mod common;
pub mod configs;

pub use action::{ActionStatusData, AppActionData, AppActionRequest};
pub use app::{
    AppConfigRequest, AppCreateData, AppDestroyData, AppDestroyRequest, AppInstance, AppListData,
    AppMsgData, AppMsgRequest, HealthData,
};
pub use common::{ApiOutcome, ApiResponse, ApplicationFailure, DynamicMap, decode_envelope};
pub use configs::ConfigListData;
