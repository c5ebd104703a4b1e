//! Delegation lookups for a network

use crate::chain::CosmosRpcClient;
use crate::config::Config;
use crate::error::Result;
use crate::types::{Delegation, DelegationResponse, Network};
use tracing::debug;

/// Delegations of `delegator_addr` on `network` with their reported balances
pub async fn get_delegation_responses(
    network: &Network,
    delegator_addr: &str,
    config: &Config,
) -> Result<Vec<DelegationResponse>> {
    debug!(
        network = %network.identifier,
        node = %network.node_uri,
        delegator = delegator_addr,
        "Querying delegations"
    );

    let client = CosmosRpcClient::new(&network.node_uri, config)?;
    client.delegator_delegations(delegator_addr).await
}

/// Current delegations of `delegator_addr` on `network`
pub async fn get_delegations(
    network: &Network,
    delegator_addr: &str,
    config: &Config,
) -> Result<Vec<Delegation>> {
    let responses = get_delegation_responses(network, delegator_addr, config).await?;
    Ok(responses.into_iter().map(|r| r.delegation).collect())
}
