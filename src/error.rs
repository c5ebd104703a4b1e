//! Error types for restake-authz-ledger

use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when none of the delegator's validators run REStake
pub const NO_RELEVANT_VALIDATORS: &str =
    "no relevant validators found (is the address staking with a REStake-enabled validator on this network?)";

/// Main error type for directory lookups, chain queries and the CLI
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected HTTP status from a directory endpoint
    #[error("{what} failed with a {status} code, url: {url}")]
    HttpStatus {
        what: &'static str,
        status: u16,
        url: String,
    },

    /// JSON decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Node address could not be parsed
    #[error("Invalid node URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Transport or JSON-RPC failure talking to the chain node
    #[error("RPC error: {0}")]
    Rpc(#[from] tendermint_rpc::Error),

    /// The chain node did not answer in time
    #[error("RPC request to {node} timed out after {secs}s")]
    Timeout { node: String, secs: u64 },

    /// ABCI query rejected by the application
    #[error("Chain query error (code {code}): {log}")]
    Query { code: u32, log: String },

    /// Protobuf or payload decoding errors
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Delegations exist but none of them are with a REStake validator
    #[error("{}", NO_RELEVANT_VALIDATORS)]
    NoRelevantValidators,

    /// Interactive prompt failed or was aborted
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    pub fn invalid_uri(uri: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidUri {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Prompt(e.to_string())
    }
}

impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        Error::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = Error::HttpStatus {
            what: "Getting chain info",
            status: 500,
            url: "https://cosmos-chain.directory/chains/osmosis".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Getting chain info failed with a 500 code, url: https://cosmos-chain.directory/chains/osmosis"
        );
    }

    #[test]
    fn test_no_relevant_validators_message() {
        let msg = Error::NoRelevantValidators.to_string();
        assert!(msg.starts_with("no relevant validators found"));
        assert!(msg.contains("REStake-enabled"));
    }
}
