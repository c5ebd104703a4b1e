//! Validator listing and selection.

use anyhow::Context as _;

use crate::cli::utils::{select, spinner};
use crate::cli::Context;
use crate::queries::grantable_validators;
use crate::types::{Delegation, Network, ValidatorForNetwork};

/// `list-validators --network <id>`
pub async fn list_validators(ctx: &Context, network: &str) -> anyhow::Result<()> {
    let sp = spinner("Fetching validators...");
    let validators = ctx.directory.get_supported_validators(network).await;
    sp.finish_and_clear();
    let validators = validators.context("Failed to fetch validators")?;

    if validators.is_empty() {
        println!("{}", no_validators_message(network));
        return Ok(());
    }

    for validator in &validators {
        println!("{}", validator);
    }

    Ok(())
}

fn no_validators_message(network: &str) -> String {
    format!(
        "No validators found for network {:?} (have you checked if the network identifier is correct?)",
        network
    )
}

/// Let the user pick one of the REStake validators they delegate to.
pub async fn select_validator(
    ctx: &Context,
    network: &Network,
    delegations: &[Delegation],
) -> anyhow::Result<ValidatorForNetwork> {
    let sp = spinner("Fetching validators...");
    let supported = ctx
        .directory
        .get_supported_validators(&network.identifier)
        .await;
    sp.finish_and_clear();
    let supported = supported.context("Failed to fetch validators")?;

    let mut validators = grantable_validators(supported, delegations)?;

    let labels: Vec<String> = validators
        .iter()
        .map(|v| format!("{} ({})", v.name, v.validator_address))
        .collect();
    let index = select("Choose validator", &labels)?;

    if index >= validators.len() {
        anyhow::bail!("Selected validator out of range");
    }
    Ok(validators.swap_remove(index))
}
