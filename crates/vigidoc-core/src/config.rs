//! Configuration module
//!
//! Client configuration for reaching the verification service. Values come
//! from the environment with sensible defaults; tests construct the config
//! directly.

use std::env;
use std::time::Duration;

use crate::constants::DEFAULT_API_URL;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for the VigiDoc API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the environment: VIGIDOC_API_URL (or API_URL),
    /// falling back to the production endpoint.
    pub fn from_env() -> Self {
        let base_url = env::var("VIGIDOC_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let config = ClientConfig::new("https://api.example.test/");
        assert_eq!(config.base_url, "https://api.example.test");
    }

    #[test]
    fn with_request_timeout_overrides_default() {
        let config =
            ClientConfig::new("https://api.example.test").with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
