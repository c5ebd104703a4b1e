//! Network listing and selection.

use anyhow::Context as _;

use crate::cli::utils::{fuzzy_select, print_info, spinner};
use crate::cli::Context;
use crate::queries::get_networks;
use crate::types::Network;

/// Fetch networks behind a spinner
async fn fetch_networks(ctx: &Context) -> anyhow::Result<Vec<Network>> {
    let sp = spinner("Fetching networks...");
    let networks = get_networks(&ctx.directory).await;
    sp.finish_and_clear();
    networks.context("Failed to fetch networks")
}

/// `list-networks`
pub async fn list_networks(ctx: &Context) -> anyhow::Result<()> {
    let networks = fetch_networks(ctx).await?;

    if networks.is_empty() {
        print_info("No supported networks found");
        return Ok(());
    }

    println!("Below is a list of the supported networks");
    for network in &networks {
        println!("{}", network);
    }

    Ok(())
}

/// Let the user pick a network, or resolve `preselected` by identifier.
pub async fn select_network(ctx: &Context, preselected: Option<&str>) -> anyhow::Result<Network> {
    let networks = fetch_networks(ctx).await?;

    if let Some(id) = preselected {
        return find_network(networks, id).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown network {:?} (run list-networks to see the supported identifiers)",
                id
            )
        });
    }

    if networks.is_empty() {
        anyhow::bail!("No supported networks found");
    }

    let names: Vec<&str> = networks.iter().map(|n| n.name.as_str()).collect();
    let index = fuzzy_select("Choose network", &names)?;
    Ok(networks
        .into_iter()
        .nth(index)
        .context("Selected network out of range")?)
}

fn find_network(networks: Vec<Network>, identifier: &str) -> Option<Network> {
    networks
        .into_iter()
        .find(|n| n.identifier.eq_ignore_ascii_case(identifier))
}
