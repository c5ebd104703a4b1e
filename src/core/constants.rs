//! Endpoints, message types and placeholder literals used across the crate

/// Validator directory (operators and the chains they run REStake on)
pub const VALIDATORS_DIRECTORY_URL: &str = "https://validators.cosmos.directory";

/// Chain registry base URL; chain records live under `/chains/{name}`
pub const CHAIN_REGISTRY_URL: &str = "https://cosmos-chain.directory";

/// Port appended to node URIs that don't carry one
pub const DEFAULT_RPC_PORT: u16 = 443;

/// HTTP request timeout for directory lookups and RPC queries
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for all outbound HTTP
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Gas price placeholder when the registry reports no fee token
pub const PLACEHOLDER_GAS_PRICE: &str = "CHANGEFEE";

/// Denom placeholder when the registry reports no fee token
pub const PLACEHOLDER_DENOM: &str = "changedenom";

/// Key name the ledger is registered under in the chain binary's keyring
pub const LEDGER_KEY_NAME: &str = "ledger";

/// Keyring backend used in every printed command
pub const KEYRING_BACKEND: &str = "file";

/// Gas adjustment used in every printed command
pub const GAS_ADJUSTMENT: &str = "1.5";

/// Message type REStake uses to claim rewards
pub const MSG_WITHDRAW_DELEGATOR_REWARD: &str =
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";

/// Message type REStake uses to re-delegate rewards
pub const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";

/// ABCI query path for a delegator's delegations
pub const DELEGATOR_DELEGATIONS_PATH: &str = "/cosmos.staking.v1beta1.Query/DelegatorDelegations";

/// Page size requested from the staking module
pub const DELEGATIONS_PAGE_LIMIT: u64 = 100;

/// Scale of `cosmos.Dec` values on the wire (18 decimal places)
pub const DEC_PRECISION: u32 = 18;

/// Shares are displayed in whole tokens assuming 6-decimal base denoms
pub const DISPLAY_SHARE_DIVISOR: f64 = 1_000_000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_types_are_fully_qualified() {
        assert!(MSG_DELEGATE.starts_with("/cosmos."));
        assert!(MSG_WITHDRAW_DELEGATOR_REWARD.starts_with("/cosmos."));
    }
}
