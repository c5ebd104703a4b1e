//! Assembled network record

use crate::core::constants::{PLACEHOLDER_DENOM, PLACEHOLDER_GAS_PRICE};
use crate::types::chain::{Codebase, Fees};
use serde::{Deserialize, Serialize};

/// A REStake-capable network with everything needed to print grant commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Human-readable name (`pretty_name`)
    pub name: String,
    /// Registry chain name used as the network identifier
    pub identifier: String,
    /// RPC node URI, always with an explicit port
    pub node_uri: String,
    pub chain_id: String,
    /// Name of the chain's CLI binary
    pub cli_name: String,
    pub bech32_prefix: String,
    pub codebase: Codebase,
    pub fees: Fees,
}

/// Gas price and denom for `--gas-prices`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeDefaults {
    pub gas_price: String,
    pub denom: String,
}

impl FeeDefaults {
    pub fn placeholder() -> Self {
        Self {
            gas_price: PLACEHOLDER_GAS_PRICE.to_string(),
            denom: PLACEHOLDER_DENOM.to_string(),
        }
    }

    /// `<price><denom>` as the chain binaries expect it
    pub fn gas_prices_arg(&self) -> String {
        format!("{}{}", self.gas_price, self.denom)
    }
}

impl Network {
    /// Fee defaults from the first fee token, falling back to placeholders
    pub fn fee_defaults(&self) -> FeeDefaults {
        let Some(token) = self.fees.fee_tokens.first() else {
            return FeeDefaults::placeholder();
        };

        FeeDefaults {
            gas_price: token
                .preferred_gas_price()
                .map(|p| p.to_string())
                .unwrap_or_else(|| PLACEHOLDER_GAS_PRICE.to_string()),
            denom: if token.denom.is_empty() {
                PLACEHOLDER_DENOM.to_string()
            } else {
                token.denom.clone()
            },
        }
    }

    /// Whether `address` looks like an account on this network
    pub fn accepts_address(&self, address: &str) -> bool {
        if self.bech32_prefix.is_empty() {
            return true;
        }
        address
            .strip_prefix(&self.bech32_prefix)
            .is_some_and(|rest| rest.starts_with('1'))
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Identifier: {:?})", self.name, self.identifier)
    }
}
