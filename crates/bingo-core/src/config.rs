//! Configuration types for the Bingo SDK
//!
//! The SDK talks to exactly one endpoint; everything here describes where that
//! endpoint lives and how the transport should behave when reaching it.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the address service
pub const DEFAULT_BASE_URL: &str = "https://composekmp.free.beeceptor.com";

/// Default path of the add-address endpoint
pub const DEFAULT_ENDPOINT_PATH: &str = "/addaddress";

/// Main SDK configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Base URL of the address service (scheme + host, no trailing path)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the add-address endpoint, appended to `base_url`
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Total request timeout (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SdkConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint_path: default_endpoint_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Point the SDK at a different service
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the endpoint path
    pub fn with_endpoint_path(mut self, endpoint_path: impl Into<String>) -> Self {
        self.endpoint_path = endpoint_path.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the add-address endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.base_url.is_empty() {
            return Err(crate::Error::config("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(crate::Error::config(format!(
                "Base URL must use HTTP or HTTPS scheme. Got: {}",
                self.base_url
            )));
        }

        if !self.endpoint_path.starts_with('/') {
            return Err(crate::Error::config(format!(
                "Endpoint path must start with '/'. Got: {}",
                self.endpoint_path
            )));
        }

        if self.timeout_secs == 0 {
            return Err(crate::Error::config("Request timeout must be > 0"));
        }

        Ok(())
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_endpoint_path() -> String {
    DEFAULT_ENDPOINT_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("bingo-sdk/{}", crate::VERSION)
}
