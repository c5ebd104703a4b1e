//! Directory and chain query functions
//!
//! Higher-level lookups built on the directory clients and the chain RPC client.

pub mod delegations;
pub mod networks;
pub mod validators;

pub use delegations::{get_delegation_responses, get_delegations};
pub use networks::{assemble_networks, build_network, cli_name, get_networks, normalize_node_uri};
pub use validators::{filter_by_delegations, grantable_validators};
