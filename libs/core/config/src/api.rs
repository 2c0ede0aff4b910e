use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend API the client talks to
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` prefix
    pub base_url: String,
    /// Upper bound for a single request; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl FromEnv for ApiConfig {
    /// Reads from environment variables with defaults:
    /// - API_BASE_URL: defaults to http://localhost:3000
    /// - API_TIMEOUT_SECS: defaults to 30, `0` disables the timeout
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("API_BASE_URL", DEFAULT_BASE_URL)
            .trim()
            .to_string();
        if base_url.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_BASE_URL".to_string(),
                details: "value is empty".to_string(),
            });
        }

        let timeout_secs: u64 = env_parse_or_default("API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Self { base_url, timeout })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_from_env_with_defaults() {
        temp_env::with_vars(
            [("API_BASE_URL", None::<&str>), ("API_TIMEOUT_SECS", None::<&str>)],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:3000");
                assert_eq!(config.timeout, Some(Duration::from_secs(30)));
            },
        );
    }

    #[test]
    fn test_api_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [
                ("API_BASE_URL", Some("https://portal.example.com")),
                ("API_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://portal.example.com");
                assert_eq!(config.timeout, Some(Duration::from_secs(5)));
            },
        );
    }

    #[test]
    fn test_api_config_zero_timeout_disables_it() {
        temp_env::with_vars(
            [("API_BASE_URL", None::<&str>), ("API_TIMEOUT_SECS", Some("0"))],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert!(config.timeout.is_none());
            },
        );
    }

    #[test]
    fn test_api_config_invalid_timeout() {
        temp_env::with_var("API_TIMEOUT_SECS", Some("soon"), || {
            let err = ApiConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("API_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_api_config_empty_base_url() {
        temp_env::with_vars(
            [("API_BASE_URL", Some("   ")), ("API_TIMEOUT_SECS", None::<&str>)],
            || {
                let err = ApiConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("API_BASE_URL"));
            },
        );
    }

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
