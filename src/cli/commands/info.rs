//! `info`: current delegations of an address.

use anyhow::Context as _;

use crate::cli::commands::networks::select_network;
use crate::cli::utils::{
    create_table_with_headers, format_coin, format_shares, print_info, print_warning,
    prompt_input, spinner,
};
use crate::cli::Context;
use crate::queries::get_delegation_responses;
use crate::types::{DelegationResponse, Network};

/// Ask for the delegator address, warning when it doesn't match the network
pub fn ask_for_address(network: &Network) -> anyhow::Result<String> {
    let address = prompt_input("Address")?;
    if !network.accepts_address(&address) {
        print_warning(&format!(
            "{} does not look like a {} address (expected prefix {:?})",
            address, network.name, network.bech32_prefix
        ));
    }
    Ok(address)
}

pub async fn execute(ctx: &Context, network: Option<&str>) -> anyhow::Result<()> {
    let network = select_network(ctx, network).await?;
    let address = ask_for_address(&network)?;

    let sp = spinner(&format!("Fetching delegations from {}...", network.node_uri));
    let responses = get_delegation_responses(&network, &address, &ctx.config).await;
    sp.finish_and_clear();
    let responses = responses.context("Failed to fetch delegations")?;

    if responses.is_empty() {
        print_info("No delegations found");
        return Ok(());
    }

    let mut table = create_table_with_headers(&["Validator", "Shares", "Balance"]);
    for row in delegation_rows(&responses) {
        table.add_row(row);
    }
    println!("{}", table);

    Ok(())
}

/// Validator, display shares and balance for each delegation
fn delegation_rows(responses: &[DelegationResponse]) -> Vec<Vec<String>> {
    responses
        .iter()
        .map(|r| {
            vec![
                r.delegation.validator_address.clone(),
                format_shares(r.delegation.display_shares()),
                format_coin(r.balance.as_ref()),
            ]
        })
        .collect()
}
