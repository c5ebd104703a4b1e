//! Authz grant instructions for a Ledger-held delegator key.
//!
//! REStake needs two generic authorizations from the delegator: one to
//! withdraw rewards and one to delegate them. With the key on a Ledger these
//! have to be signed locally, so this module only renders the shell commands
//! for the chain's own binary. Nothing here is executed.

use crate::core::constants::{
    GAS_ADJUSTMENT, KEYRING_BACKEND, LEDGER_KEY_NAME, MSG_DELEGATE, MSG_WITHDRAW_DELEGATOR_REWARD,
};
use crate::error::{Error, Result};
use crate::types::{Network, ValidatorForNetwork};
use std::fmt;

/// Rendered commands plus the surrounding guidance text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantInstructions {
    pub cli_name: String,
    /// Where to get the chain binary, empty when the registry reports nothing
    pub binary_sources: Vec<String>,
    pub add_key_command: String,
    pub withdraw_grant_command: String,
    pub delegate_grant_command: String,
}

impl GrantInstructions {
    /// Build the instructions for granting `validator`'s REStake bot on `network`
    pub fn new(network: &Network, validator: &ValidatorForNetwork) -> Result<Self> {
        if !validator.has_restake_address() {
            return Err(Error::other(format!(
                "validator {} has no REStake address on {}",
                validator.name, network.identifier
            )));
        }

        Ok(Self {
            cli_name: network.cli_name.clone(),
            binary_sources: binary_sources(network),
            add_key_command: add_key_command(&network.cli_name),
            withdraw_grant_command: grant_command(
                network,
                &validator.restake_address,
                MSG_WITHDRAW_DELEGATOR_REWARD,
            ),
            delegate_grant_command: grant_command(network, &validator.restake_address, MSG_DELEGATE),
        })
    }

    /// The three commands in the order they must be run
    pub fn commands(&self) -> [&str; 3] {
        [
            &self.add_key_command,
            &self.withdraw_grant_command,
            &self.delegate_grant_command,
        ]
    }
}

impl fmt::Display for GrantInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.binary_sources.is_empty() {
            for line in &self.binary_sources {
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "First, you need to add your ledger to your keys in {} with the following command:",
            self.cli_name
        )?;
        writeln!(f, "{}", self.add_key_command)?;
        writeln!(f)?;
        writeln!(
            f,
            "The following commands will grant your validator access to withdraw rewards and delegate them:"
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.withdraw_grant_command)?;
        writeln!(f)?;
        writeln!(f, "{}", self.delegate_grant_command)?;
        writeln!(f)?;
        writeln!(
            f,
            "NB! These commands might need small adjustments for some chains (gas prices and node address in particular)."
        )
    }
}

fn binary_sources(network: &Network) -> Vec<String> {
    let codebase = &network.codebase;
    let mut lines = Vec::new();

    if !codebase.git_repo.is_empty() {
        let version = if codebase.recommended_version.is_empty() {
            String::new()
        } else {
            format!(
                " (reported recommended version is {})",
                codebase.recommended_version
            )
        };
        lines.push(format!(
            "You can find the binaries, or build from source here: {}{}",
            codebase.git_repo, version
        ));
    }

    if !codebase.binaries.is_empty() {
        lines.push("Prebuilt binaries:".to_string());
        lines.extend(
            codebase
                .binaries
                .iter()
                .map(|(platform, url)| format!("  {}: {}", platform, url)),
        );
    }

    lines
}

fn add_key_command(cli_name: &str) -> String {
    format!(
        "$ {} keys add {} --ledger --keyring-backend {}",
        cli_name, LEDGER_KEY_NAME, KEYRING_BACKEND
    )
}

fn grant_command(network: &Network, grantee: &str, msg_type: &str) -> String {
    let fees = network.fee_defaults();
    format!(
        "$ {cli} tx authz grant {grantee} generic --msg-type {msg_type} --from {key} --ledger \
         --chain-id {chain_id} --node {node} --keyring-backend {backend} --gas auto \
         --gas-prices {gas_prices} --gas-adjustment {adjustment}",
        cli = network.cli_name,
        grantee = grantee,
        msg_type = msg_type,
        key = LEDGER_KEY_NAME,
        chain_id = network.chain_id,
        node = network.node_uri,
        backend = KEYRING_BACKEND,
        gas_prices = fees.gas_prices_arg(),
        adjustment = GAS_ADJUSTMENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Codebase, FeeToken, Fees, GasPrice};

    fn juno() -> Network {
        Network {
            name: "Juno".to_string(),
            identifier: "juno".to_string(),
            node_uri: "https://rpc-juno.itastakers.com:443".to_string(),
            chain_id: "juno-1".to_string(),
            cli_name: "junod".to_string(),
            bech32_prefix: "juno".to_string(),
            codebase: Codebase::default(),
            fees: Fees {
                fee_tokens: vec![FeeToken {
                    denom: "ujuno".to_string(),
                    fixed_min_gas_price: Some(GasPrice::Text("0.0025".to_string())),
                    ..Default::default()
                }],
            },
        }
    }

    fn ecostake() -> ValidatorForNetwork {
        ValidatorForNetwork {
            path: "ecostake".to_string(),
            name: "ECO Stake".to_string(),
            restake_address: "juno1bot".to_string(),
            validator_address: "junovaloper1eco".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_commands() {
        let instructions = GrantInstructions::new(&juno(), &ecostake()).unwrap();
        let [add_key, withdraw, delegate] = instructions.commands();

        assert_eq!(add_key, "$ junod keys add ledger --ledger --keyring-backend file");
        assert_eq!(
            withdraw,
            "$ junod tx authz grant juno1bot generic --msg-type /cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward \
             --from ledger --ledger --chain-id juno-1 --node https://rpc-juno.itastakers.com:443 \
             --keyring-backend file --gas auto --gas-prices 0.0025ujuno --gas-adjustment 1.5"
        );
        assert!(delegate.contains("--msg-type /cosmos.staking.v1beta1.MsgDelegate "));
        assert!(delegate.contains("--gas-prices 0.0025ujuno"));
    }

    #[test]
    fn test_placeholder_fees() {
        let mut network = juno();
        network.fees = Fees::default();
        let instructions = GrantInstructions::new(&network, &ecostake()).unwrap();
        assert!(instructions.withdraw_grant_command.contains("--gas-prices CHANGEFEEchangedenom"));
        assert!(instructions.delegate_grant_command.contains("--gas-prices CHANGEFEEchangedenom"));
    }

    #[test]
    fn test_binary_sources() {
        let mut network = juno();
        network.codebase = Codebase {
            git_repo: "https://github.com/CosmosContracts/juno".to_string(),
            recommended_version: "v11.0.0".to_string(),
            binaries: [(
                "linux/amd64".to_string(),
                "https://example.com/junod".to_string(),
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        };

        let rendered = GrantInstructions::new(&network, &ecostake()).unwrap().to_string();
        assert!(rendered.starts_with(
            "You can find the binaries, or build from source here: https://github.com/CosmosContracts/juno (reported recommended version is v11.0.0)\n"
        ));
        assert!(rendered.contains("  linux/amd64: https://example.com/junod\n"));
    }

    #[test]
    fn test_without_codebase() {
        let rendered = GrantInstructions::new(&juno(), &ecostake()).unwrap().to_string();
        assert!(rendered.starts_with("First, you need to add your ledger"));
        assert!(!rendered.contains("binaries"));
    }

    #[test]
    fn test_missing_restake_address() {
        let mut validator = ecostake();
        validator.restake_address.clear();
        assert!(GrantInstructions::new(&juno(), &validator).is_err());
    }
}
