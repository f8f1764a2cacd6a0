//! Client configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Default tutor service base URL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Path of the teaching endpoint, relative to the base URL
pub const TEACH_PATH: &str = "/teach";

/// Default request timeout (in seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the tutor service, without trailing slash
    pub api_url: String,
    /// Timeout applied to every request (in seconds)
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Create a configuration pointing at the given base URL
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base_url(&api_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with defaults
    ///
    /// * `TUTOR_API_URL` - base URL of the tutor service
    /// * `TUTOR_REQUEST_TIMEOUT_SECS` - request timeout, must be > 0
    pub fn from_env() -> Self {
        let api_url = env::var("TUTOR_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            request_timeout_secs: env::var("TUTOR_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Full URL of the teaching endpoint
    pub fn teach_url(&self) -> String {
        format!("{}{}", self.api_url, TEACH_PATH)
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
