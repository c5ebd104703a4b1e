//! Chain registry lookups

use super::DirectoryClient;
use crate::error::{Error, Result};
use crate::types::{ChainInfo, ChainResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

/// Source of per-chain metadata, keyed by registry chain name
#[async_trait]
pub trait ChainRegistry: Send + Sync {
    /// `Ok(None)` when the registry has no record for `chain_name`
    async fn chain_info(&self, chain_name: &str) -> Result<Option<ChainInfo>>;
}

impl DirectoryClient {
    pub fn chain_url(&self, chain_name: &str) -> String {
        format!(
            "{}/chains/{}",
            self.config().chain_registry_url.trim_end_matches('/'),
            chain_name
        )
    }
}

#[async_trait]
impl ChainRegistry for DirectoryClient {
    async fn chain_info(&self, chain_name: &str) -> Result<Option<ChainInfo>> {
        let url = self.chain_url(chain_name);
        debug!(chain = chain_name, url = %url, "Fetching chain info");

        let res = self.http().get(&url).send().await?;
        match res.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                debug!(chain = chain_name, "Chain not in registry");
                return Ok(None);
            }
            status => {
                return Err(Error::HttpStatus {
                    what: "Getting chain info",
                    status: status.as_u16(),
                    url,
                })
            }
        }

        let body: ChainResponse = res.json().await?;
        let chain = body.into_chain();
        if chain.is_empty() {
            return Ok(None);
        }
        Ok(Some(chain))
    }
}
