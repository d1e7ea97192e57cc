// Configuration for AssistantClient

use std::{fmt, str::FromStr};

use url::Url;

use crate::error::{AssistantError, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const ENV_BASE_URL: &str = "GASSIST_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "GASSIST_ACCESS_TOKEN";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "GASSIST_CONNECT_TIMEOUT_MS";
pub const ENV_READ_TIMEOUT_MS: &str = "GASSIST_READ_TIMEOUT_MS";
pub const ENV_SUCCESS_CODES: &str = "GASSIST_SUCCESS_CODES";

/// Envelope codes that count as success.
///
/// The service does not publish its success range, so it is configured per
/// deployment. Defaults to `0` and `200`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessCodes(Vec<i32>);

impl SuccessCodes {
    pub fn new(codes: impl IntoIterator<Item = i32>) -> Self {
        let mut codes: Vec<i32> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        Self(codes)
    }

    pub fn contains(&self, code: i32) -> bool {
        self.0.binary_search(&code).is_ok()
    }

    pub fn codes(&self) -> &[i32] {
        &self.0
    }
}

impl Default for SuccessCodes {
    fn default() -> Self {
        Self(vec![0, 200])
    }
}

impl fmt::Display for SuccessCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(i32::to_string).collect();
        write!(f, "{}", joined.join(","))
    }
}

impl FromStr for SuccessCodes {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self> {
        let codes = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>().map_err(|_| {
                    AssistantError::InvalidConfig(format!("invalid success code: {}", part))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if codes.is_empty() {
            return Err(AssistantError::InvalidConfig(
                "success code list is empty".to_string(),
            ));
        }
        Ok(Self::new(codes))
    }
}

/// Configuration for the game assistant HTTP client
#[derive(Clone, Debug)]
pub struct AssistantClientConfig {
    /// Service base URL (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Bearer token sent with every request, if any
    pub access_token: Option<String>,
    /// Envelope codes treated as success
    pub success_codes: SuccessCodes,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for AssistantClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            access_token: None,
            success_codes: SuccessCodes::default(),
            user_agent: concat!("gassist-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AssistantClientConfig {
    /// Create a new config pointing at a single base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the bearer token
    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn with_success_codes(mut self, codes: SuccessCodes) -> Self {
        self.success_codes = codes;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Build a config from `GASSIST_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|t| !t.is_empty()) {
            config.access_token = Some(token);
        }
        if let Some(value) = lookup(ENV_CONNECT_TIMEOUT_MS) {
            config.connect_timeout_ms = parse_millis(ENV_CONNECT_TIMEOUT_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_READ_TIMEOUT_MS) {
            config.read_timeout_ms = parse_millis(ENV_READ_TIMEOUT_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_SUCCESS_CODES) {
            config.success_codes = value.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AssistantError::InvalidConfig(format!("invalid base url {}: {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(AssistantError::InvalidConfig(format!(
                "unsupported url scheme: {}",
                other
            ))),
        }
    }
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| AssistantError::InvalidConfig(format!("{} is not a number: {}", key, value)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = AssistantClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.connect_timeout_ms, 5000);
        assert_eq!(config.read_timeout_ms, 30000);
        assert!(config.access_token.is_none());
        assert!(config.user_agent.starts_with("gassist-client/"));
    }

    #[test]
    fn test_config_builder() {
        let config = AssistantClientConfig::new("http://10.0.0.2:9000")
            .with_timeouts(1000, 2000)
            .with_access_token("secret")
            .with_success_codes(SuccessCodes::new([0]))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.connect_timeout_ms, 1000);
        assert_eq!(config.read_timeout_ms, 2000);
        assert_eq!(config.access_token.as_deref(), Some("secret"));
        assert_eq!(config.success_codes.codes(), &[0]);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_success_codes() {
        let codes = SuccessCodes::default();
        assert!(codes.contains(0));
        assert!(codes.contains(200));
        assert!(!codes.contains(404));

        let codes: SuccessCodes = "200, 0,201,200".parse().unwrap();
        assert_eq!(codes.codes(), &[0, 200, 201]);
        assert_eq!(codes.to_string(), "0,200,201");

        assert!("".parse::<SuccessCodes>().is_err());
        assert!("0,ok".parse::<SuccessCodes>().is_err());
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = AssistantClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.success_codes, SuccessCodes::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AssistantClientConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://assistant.local"),
            (ENV_ACCESS_TOKEN, "abc"),
            (ENV_CONNECT_TIMEOUT_MS, "100"),
            (ENV_READ_TIMEOUT_MS, " 250 "),
            (ENV_SUCCESS_CODES, "0"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://assistant.local");
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.connect_timeout_ms, 100);
        assert_eq!(config.read_timeout_ms, 250);
        assert_eq!(config.success_codes.codes(), &[0]);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err =
            AssistantClientConfig::from_lookup(lookup_from(&[(ENV_READ_TIMEOUT_MS, "soon")]))
                .unwrap_err();
        assert!(matches!(err, AssistantError::InvalidConfig(_)));

        let err = AssistantClientConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, AssistantError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let config = AssistantClientConfig::new("localhost:8000/app");
        assert!(config.validate().is_err());
    }
}
