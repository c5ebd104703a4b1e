//! `grant`: print the authz grant commands for a chosen validator.

use anyhow::Context as _;

use crate::authz::GrantInstructions;
use crate::cli::commands::info::ask_for_address;
use crate::cli::commands::networks::select_network;
use crate::cli::commands::validators::select_validator;
use crate::cli::utils::spinner;
use crate::cli::Context;
use crate::queries::get_delegations;

pub async fn execute(ctx: &Context, network: Option<&str>) -> anyhow::Result<()> {
    let network = select_network(ctx, network).await?;
    let address = ask_for_address(&network)?;

    let sp = spinner(&format!("Fetching delegations from {}...", network.node_uri));
    let delegations = get_delegations(&network, &address, &ctx.config).await;
    sp.finish_and_clear();
    let delegations = delegations.context("Failed to fetch delegations")?;
    tracing::debug!(count = delegations.len(), "Delegations loaded");

    let validator = select_validator(ctx, &network, &delegations).await?;
    let instructions = GrantInstructions::new(&network, &validator)?;

    println!();
    print!("{}", instructions);

    Ok(())
}
