//! Configuration for the directory clients and chain queries

use crate::core::constants;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoints and HTTP settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Validator directory URL
    pub validators_url: String,
    /// Chain registry base URL (without the `/chains` suffix)
    pub chain_registry_url: String,
    /// Request timeout in seconds
    pub http_timeout_secs: u64,
    /// Port appended to node URIs that don't specify one
    pub default_rpc_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validators_url: constants::VALIDATORS_DIRECTORY_URL.to_string(),
            chain_registry_url: constants::CHAIN_REGISTRY_URL.to_string(),
            http_timeout_secs: constants::DEFAULT_HTTP_TIMEOUT_SECS,
            default_rpc_port: constants::DEFAULT_RPC_PORT,
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validators_url(mut self, url: impl Into<String>) -> Self {
        self.validators_url = url.into();
        self
    }

    pub fn with_chain_registry_url(mut self, url: impl Into<String>) -> Self {
        self.chain_registry_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_timeout(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Load config from environment variables
    ///
    /// - `RESTAKE_VALIDATORS_URL`
    /// - `RESTAKE_CHAIN_REGISTRY_URL`
    /// - `RESTAKE_HTTP_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("RESTAKE_VALIDATORS_URL") {
            config = config.with_validators_url(url);
        }

        if let Ok(url) = std::env::var("RESTAKE_CHAIN_REGISTRY_URL") {
            config = config.with_chain_registry_url(url);
        }

        if let Ok(secs) = std::env::var("RESTAKE_HTTP_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                config.http_timeout_secs = s;
            }
        }

        config
    }
}
