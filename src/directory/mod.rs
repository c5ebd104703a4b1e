//! HTTP clients for the public validator directory and chain registry
//!
//! Both services are plain JSON over HTTP GET. A single [`DirectoryClient`]
//! holds the pooled `reqwest` client and the configured base URLs.

pub mod chains;
pub mod validators;

use crate::config::Config;
use crate::core::constants::CONNECT_TIMEOUT_SECS;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

pub use chains::ChainRegistry;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the validator directory and chain registry
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    config: Config,
}

impl DirectoryClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }
}

/// `reqwest` client with the crate's user agent and timeouts
fn build_http_client(config: &Config) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(config.http_timeout())
        .build()?)
}
