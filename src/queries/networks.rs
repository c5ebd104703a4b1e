//! Network assembly: validator directory chains joined with registry metadata

use crate::directory::{validators::distinct_chain_names, ChainRegistry, DirectoryClient};
use crate::error::{Error, Result};
use crate::types::{ChainInfo, Network, ValidatorEntry};
use http::Uri;
use tracing::{debug, warn};

/// Every network with at least one directory validator and a registry record
pub async fn get_networks(client: &DirectoryClient) -> Result<Vec<Network>> {
    let entries = client.fetch_validators().await?;
    assemble_networks(&entries, client, client.config().default_rpc_port).await
}

/// Build one [`Network`] per distinct chain in `entries`.
///
/// Chains the registry has no data for are skipped silently. Registry errors
/// abort the whole assembly.
pub async fn assemble_networks<R>(
    entries: &[ValidatorEntry],
    registry: &R,
    default_port: u16,
) -> Result<Vec<Network>>
where
    R: ChainRegistry + ?Sized,
{
    let mut networks = Vec::new();

    for chain_name in distinct_chain_names(entries) {
        let Some(info) = registry.chain_info(&chain_name).await? else {
            debug!(chain = %chain_name, "No registry data, skipping");
            continue;
        };

        match build_network(&info, default_port)? {
            Some(network) => networks.push(network),
            None => warn!(chain = %chain_name, "Chain has no RPC endpoints, skipping"),
        }
    }

    Ok(networks)
}

/// `None` when the chain lists no RPC endpoint
pub fn build_network(info: &ChainInfo, default_port: u16) -> Result<Option<Network>> {
    let Some(rpc) = info.first_rpc() else {
        return Ok(None);
    };

    Ok(Some(Network {
        name: if info.pretty_name.is_empty() {
            info.chain_name.clone()
        } else {
            info.pretty_name.clone()
        },
        identifier: info.chain_name.clone(),
        node_uri: normalize_node_uri(rpc, default_port)?,
        chain_id: info.chain_id.clone(),
        cli_name: cli_name(info),
        bech32_prefix: info.bech32_prefix.clone(),
        codebase: info.codebase.clone(),
        fees: info.fees.clone(),
    }))
}

/// Daemon name from the registry, or the usual `<chain>d` convention
pub fn cli_name(info: &ChainInfo) -> String {
    if info.daemon_name.is_empty() {
        format!("{}d", info.chain_name)
    } else {
        info.daemon_name.clone()
    }
}

/// Make sure a node address carries an explicit port.
///
/// Addresses that already name a port are returned unchanged. Otherwise the
/// trailing `/` is dropped and `:{default_port}` is appended, so the result
/// always ends in the port: `https://rpc.example.com/` becomes
/// `https://rpc.example.com:443`.
pub fn normalize_node_uri(address: &str, default_port: u16) -> Result<String> {
    let address = address.trim();
    let uri: Uri = address
        .parse()
        .map_err(|e| Error::invalid_uri(address, e))?;

    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(Error::invalid_uri(address, "expected an absolute URI"));
    }

    if uri.port().is_some() {
        return Ok(address.to_string());
    }

    Ok(format!("{}:{}", address.trim_end_matches('/'), default_port))
}
