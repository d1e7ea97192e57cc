// Command-line arguments

use clap::{Parser, Subcommand};
use gassist_client::{
    AppActionRequest, AppConfigRequest, AssistantClientConfig, Result as ClientResult,
    config::{DEFAULT_BASE_URL, ENV_ACCESS_TOKEN, ENV_BASE_URL, ENV_READ_TIMEOUT_MS},
    constants::app_defaults,
};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "gassist", version, about = "Drive a game assistant service")]
pub struct Cli {
    /// Service base URL
    #[arg(long = "base-url", env = ENV_BASE_URL, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token sent with every request
    #[arg(long = "token", env = ENV_ACCESS_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Read timeout in milliseconds; the client default applies when unset
    #[arg(long = "timeout-ms", env = ENV_READ_TIMEOUT_MS)]
    pub timeout_ms: Option<u64>,

    /// Raise log verbosity to debug
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the service is up
    Health,
    /// List app instances
    List,
    /// Create and start an app instance
    Create {
        virtual_name: String,
        #[arg(long, default_value = app_defaults::CACHE_PREFIX)]
        cache_prefix: String,
        #[arg(long, default_value = app_defaults::WAREHOUSE_PASSWORD)]
        warehouse_password: String,
        #[arg(long, default_value = app_defaults::MAIN_ROLE)]
        main_role: String,
        #[arg(long)]
        dm_debug: bool,
        #[arg(long)]
        auto_init_actions: bool,
    },
    /// Destroy an app instance
    Destroy { virtual_name: String },
    /// Send a message to an app instance
    Msg { virtual_name: String, msg: String },
    /// Trigger a named action
    Action {
        virtual_name: String,
        action: String,
        /// Action parameter as key=value; the value is read as JSON when possible
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, Value)>,
    },
    /// Show action status of an app instance
    Status { virtual_name: String },
    /// List stored app configs
    AppConfigs,
    /// List stored task configs
    TaskConfigs {
        #[arg(long)]
        task_type: Option<String>,
    },
}

impl Cli {
    pub fn client_config(&self) -> ClientResult<AssistantClientConfig> {
        AssistantClientConfig::from_env().map(|config| self.apply(config))
    }

    /// Overlay the flags that were given on top of `config`
    pub fn apply(&self, mut config: AssistantClientConfig) -> AssistantClientConfig {
        config.base_url = self.base_url.clone();
        if let Some(timeout_ms) = self.timeout_ms {
            config.read_timeout_ms = timeout_ms;
        }
        if let Some(token) = &self.token {
            config = config.with_access_token(token);
        }
        config
    }
}

impl Command {
    pub fn app_config_request(&self) -> Option<AppConfigRequest> {
        match self {
            Command::Create {
                virtual_name,
                cache_prefix,
                warehouse_password,
                main_role,
                dm_debug,
                auto_init_actions,
            } => Some(
                AppConfigRequest::new(virtual_name)
                    .with_cache_prefix(cache_prefix)
                    .with_warehouse_password(warehouse_password)
                    .with_main_role(main_role)
                    .with_dm_debug(*dm_debug)
                    .with_auto_init_actions(*auto_init_actions),
            ),
            _ => None,
        }
    }

    pub fn action_request(&self) -> Option<AppActionRequest> {
        match self {
            Command::Action {
                virtual_name,
                action,
                params,
            } => Some(
                params
                    .iter()
                    .fold(AppActionRequest::new(virtual_name, action), |req, (k, v)| {
                        req.with_param(k, v.clone())
                    }),
            ),
            _ => None,
        }
    }
}

fn parse_param(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {}", s))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in {}", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_health() {
        let cli = Cli::try_parse_from(["gassist", "health"]).unwrap();
        assert!(matches!(cli.command, Command::Health));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_create_defaults() {
        let cli = Cli::try_parse_from(["gassist", "create", "alt"]).unwrap();
        let request = cli.command.app_config_request().unwrap();
        assert_eq!(request, AppConfigRequest::new("alt"));
    }

    #[test]
    fn test_parse_create_overrides() {
        let cli = Cli::try_parse_from([
            "gassist",
            "create",
            "alt",
            "--main-role",
            "飞燕女",
            "--dm-debug",
        ])
        .unwrap();
        let request = cli.command.app_config_request().unwrap();
        assert_eq!(request.main_role, "飞燕女");
        assert!(request.dm_debug);
        assert!(!request.auto_init_actions);
    }

    #[test]
    fn test_parse_action_params() {
        let cli = Cli::try_parse_from([
            "gassist",
            "action",
            "alt",
            "daily",
            "--param",
            "rounds=3",
            "--param",
            "map=长安城",
            "--param",
            "flags=[1,2]",
        ])
        .unwrap();
        let request = cli.command.action_request().unwrap();
        assert_eq!(request.action, "daily");
        assert_eq!(request.params["rounds"], json!(3));
        assert_eq!(request.params["map"], json!("长安城"));
        assert_eq!(request.params["flags"], json!([1, 2]));
    }

    #[test]
    fn test_parse_param_rejects_missing_equals() {
        assert!(parse_param("rounds").is_err());
        assert!(parse_param("=3").is_err());
        assert_eq!(parse_param("a=").unwrap(), ("a".to_string(), json!("")));
    }

    #[test]
    fn test_parse_task_configs() {
        let cli = Cli::try_parse_from(["gassist", "task-configs"]).unwrap();
        assert!(matches!(cli.command, Command::TaskConfigs { task_type: None }));

        let cli =
            Cli::try_parse_from(["gassist", "task-configs", "--task-type", "daily"]).unwrap();
        match cli.command {
            Command::TaskConfigs { task_type } => assert_eq!(task_type.as_deref(), Some("daily")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "gassist",
            "--base-url",
            "http://10.1.1.1:8000",
            "--timeout-ms",
            "500",
            "-v",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://10.1.1.1:8000");
        assert_eq!(cli.timeout_ms, Some(500));
        assert!(cli.verbose);
    }

    #[test]
    fn test_apply_keeps_configured_timeout_without_flag() {
        let mut cli = Cli::try_parse_from(["gassist", "health"]).unwrap();
        cli.timeout_ms = None;
        let base = AssistantClientConfig::new(DEFAULT_BASE_URL).with_timeouts(50, 100);

        let config = cli.apply(base);
        assert_eq!(config.read_timeout_ms, 100);
        assert_eq!(config.connect_timeout_ms, 50);
    }

    #[test]
    fn test_apply_timeout_flag_overrides() {
        let cli = Cli::try_parse_from(["gassist", "--timeout-ms", "500", "--token", "t", "list"])
            .unwrap();
        let base = AssistantClientConfig::new(DEFAULT_BASE_URL).with_timeouts(50, 100);

        let config = cli.apply(base);
        assert_eq!(config.read_timeout_ms, 500);
        assert_eq!(config.access_token.as_deref(), Some("t"));
    }
}
