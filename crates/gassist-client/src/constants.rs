// Game assistant API path constants

pub mod app_api_path {
    // Health
    pub const HEALTH: &str = "/";

    // App control
    pub const APP_LIST: &str = "/app_list";
    pub const APP_CREATE: &str = "/app_create";
    pub const APP_DESTROY: &str = "/app_destroy";
    pub const APP_MSG: &str = "/app_msg";
    pub const APP_ACTION: &str = "/app_action";
    pub const ACTION_STATUS: &str = "/action_status";

    // Config management
    pub const APP_CONFIGS: &str = "/app_configs";
    pub const TASK_CONFIGS: &str = "/task_configs";
}

/// Default values the service applies to omitted app config fields
pub mod app_defaults {
    pub const CACHE_PREFIX: &str = "default";
    pub const WAREHOUSE_PASSWORD: &str = "";
    pub const MAIN_ROLE: &str = "剑侠客";
}
