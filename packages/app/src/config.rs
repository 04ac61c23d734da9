//! Runtime settings read from the environment.

use std::time::Duration;

use github_activity_github::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const API_URL_VAR: &str = "GITHUB_ACTIVITY_API_URL";
pub const TIMEOUT_VAR: &str = "GITHUB_ACTIVITY_TIMEOUT_SECS";

/// Errors that can occur when loading [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API URL is not an http(s) URL.
    #[error("GITHUB_ACTIVITY_API_URL must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("GITHUB_ACTIVITY_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub api_url: String,
    /// Upper bound on the single events request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// * If a variable is set to a value that cannot be used
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`. Unset or blank variables keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidApiUrl`] if the API URL has no http(s) scheme
    /// * [`ConfigError::InvalidTimeout`] if the timeout is not a positive integer
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let lookup = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(api_url) = lookup(API_URL_VAR) {
            if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
                return Err(ConfigError::InvalidApiUrl(api_url));
            }
            config.api_url = api_url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            let secs = timeout
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(timeout))?;
            config.timeout = Duration::from_secs(secs);
        }

        log::debug!("Loaded config: {config:?}");

        Ok(config)
    }
}
