//! Chain registry records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry responses come either wrapped in `{"chain": ...}` or bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChainResponse {
    Wrapped { chain: ChainInfo },
    Bare(ChainInfo),
}

impl ChainResponse {
    pub fn into_chain(self) -> ChainInfo {
        match self {
            ChainResponse::Wrapped { chain } => chain,
            ChainResponse::Bare(chain) => chain,
        }
    }
}

/// Per-chain metadata from the registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainInfo {
    pub chain_name: String,
    pub chain_id: String,
    pub pretty_name: String,
    pub bech32_prefix: String,
    pub daemon_name: String,
    pub fees: Fees,
    pub codebase: Codebase,
    pub apis: Apis,
}

impl ChainInfo {
    /// The registry answered but knows nothing about the chain
    pub fn is_empty(&self) -> bool {
        self.chain_name.is_empty()
    }

    pub fn first_rpc(&self) -> Option<&str> {
        self.apis
            .rpc
            .iter()
            .map(|e| e.address.trim())
            .find(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fees {
    pub fee_tokens: Vec<FeeToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeToken {
    pub denom: String,
    pub fixed_min_gas_price: Option<GasPrice>,
    pub low_gas_price: Option<GasPrice>,
    pub average_gas_price: Option<GasPrice>,
    pub high_gas_price: Option<GasPrice>,
}

impl FeeToken {
    /// Price to put in `--gas-prices`, most conservative first
    pub fn preferred_gas_price(&self) -> Option<&GasPrice> {
        self.fixed_min_gas_price
            .as_ref()
            .or(self.average_gas_price.as_ref())
            .or(self.low_gas_price.as_ref())
    }
}

/// Gas prices show up as JSON numbers in most records and strings in a few
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GasPrice {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for GasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GasPrice::Number(n) => write!(f, "{}", n),
            GasPrice::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Codebase {
    pub git_repo: String,
    pub recommended_version: String,
    pub compatible_versions: Vec<String>,
    /// Download links keyed by platform, e.g. `linux/amd64`
    pub binaries: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Apis {
    pub rpc: Vec<ApiEndpoint>,
    pub rest: Vec<ApiEndpoint>,
    pub grpc: Vec<ApiEndpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoint {
    pub address: String,
    pub provider: String,
}
