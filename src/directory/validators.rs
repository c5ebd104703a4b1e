//! Validator directory lookups

use super::DirectoryClient;
use crate::error::{Error, Result};
use crate::types::{ValidatorEntry, ValidatorForNetwork, ValidatorsResponse};
use reqwest::StatusCode;
use std::collections::HashSet;
use tracing::debug;

impl DirectoryClient {
    /// Fetch every operator listed in the validator directory
    pub async fn fetch_validators(&self) -> Result<Vec<ValidatorEntry>> {
        let url = &self.config().validators_url;
        debug!(url = %url, "Fetching validator directory");

        let res = self.http().get(url).send().await?;
        if res.status() != StatusCode::OK {
            return Err(Error::HttpStatus {
                what: "Getting validators",
                status: res.status().as_u16(),
                url: url.clone(),
            });
        }

        let body: ValidatorsResponse = res.json().await?;
        debug!(count = body.validators.len(), "Validator directory loaded");
        Ok(body.validators)
    }

    /// Validators that run on `network`, in directory order
    pub async fn get_supported_validators(&self, network: &str) -> Result<Vec<ValidatorForNetwork>> {
        let entries = self.fetch_validators().await?;
        Ok(supported_validators(&entries, network))
    }
}

/// One record per (operator, chain) pair where the chain is `network`.
///
/// Operators without a REStake bot on the chain are kept, with an empty
/// `restake_address`.
pub fn supported_validators(entries: &[ValidatorEntry], network: &str) -> Vec<ValidatorForNetwork> {
    entries
        .iter()
        .flat_map(|entry| {
            entry
                .chains
                .iter()
                .filter(move |c| c.name == network)
                .map(move |c| ValidatorForNetwork::from_entry(entry, c))
        })
        .collect()
}

/// Unique chain names in first-seen order
pub fn distinct_chain_names(entries: &[ValidatorEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .flat_map(|e| e.chains.iter())
        .filter(|c| !c.name.is_empty() && seen.insert(c.name.as_str()))
        .map(|c| c.name.clone())
        .collect()
}
