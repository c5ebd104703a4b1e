//! Helps Ledger users enable REStake by printing the authz grant commands
//! they need to run with their chain's CLI binary.
//!
//! The crate looks up REStake-enabled validators in the public validator
//! directory, joins them with chain registry metadata into [`Network`]
//! records, queries a delegator's current delegations over Tendermint RPC and
//! renders [`GrantInstructions`]. It never signs or broadcasts anything.

pub mod authz;
pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod directory;
pub mod error;
pub mod logging;
pub mod queries;
pub mod types;

pub use authz::GrantInstructions;
pub use chain::CosmosRpcClient;
pub use config::Config;
pub use directory::{ChainRegistry, DirectoryClient};
pub use error::{Error, Result};
pub use logging::{init_logging, is_initialized, LogFormat, LoggingConfig};

pub use types::{
    ChainInfo, Coin, Delegation, DelegationResponse, FeeDefaults, Network, ValidatorEntry,
    ValidatorForNetwork,
};

pub use queries::{
    assemble_networks, filter_by_delegations, get_delegation_responses, get_delegations,
    get_networks, grantable_validators, normalize_node_uri,
};
