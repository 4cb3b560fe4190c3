//! Client configuration.

use std::env;
use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3002";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "SHOPEASY_API_URL";

/// Environment variable overriding the request timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "SHOPEASY_API_TIMEOUT_MS";

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing path.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Configuration pointing at a specific base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the environment, with defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(raw) = env::var(ENV_TIMEOUT_MS) {
            if let Ok(ms) = raw.trim().parse::<u64>() {
                config.timeout = Duration::from_millis(ms);
            }
        }
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
