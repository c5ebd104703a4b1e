//! Read-only chain access over Tendermint RPC
//!
//! Staking queries go through `abci_query` with the protobuf messages from
//! `cosmos-sdk-proto`. Nothing here signs or broadcasts.

use crate::config::Config;
use crate::core::constants::{DELEGATIONS_PAGE_LIMIT, DELEGATOR_DELEGATIONS_PATH};
use crate::error::{Error, Result};
use crate::types::DelegationResponse;
use cosmos_sdk_proto::cosmos::base::query::v1beta1::PageRequest;
use cosmos_sdk_proto::cosmos::staking::v1beta1::{
    QueryDelegatorDelegationsRequest, QueryDelegatorDelegationsResponse,
};
use prost::Message;
use std::time::Duration;
use tendermint_rpc::endpoint::abci_query::AbciQuery;
use tendermint_rpc::{Client, HttpClient};
use tracing::{debug, trace};

/// Client for one chain's RPC node
#[derive(Debug)]
pub struct CosmosRpcClient {
    client: HttpClient,
    node_uri: String,
    timeout: Duration,
}

impl CosmosRpcClient {
    /// Create a client for `node_uri` (e.g. `https://rpc.cosmos.network:443`)
    pub fn new(node_uri: impl Into<String>, config: &Config) -> Result<Self> {
        let node_uri = node_uri.into();
        let client = HttpClient::new(node_uri.as_str())?;
        Ok(Self {
            client,
            node_uri,
            timeout: config.http_timeout(),
        })
    }

    /// Run an ABCI query at the latest height.
    ///
    /// A non-zero ABCI code becomes [`Error::Query`] carrying the node's log.
    pub async fn abci_query(&self, path: &str, data: Vec<u8>) -> Result<AbciQuery> {
        trace!(node = %self.node_uri, path, "abci_query");

        let query = self
            .client
            .abci_query(Some(path.to_string()), data, None, false);
        let response = tokio::time::timeout(self.timeout, query)
            .await
            .map_err(|_| Error::Timeout {
                node: self.node_uri.clone(),
                secs: self.timeout.as_secs(),
            })??;

        if response.code.is_err() {
            let log = if response.codespace.is_empty() {
                response.log
            } else {
                format!("{}: {}", response.codespace, response.log)
            };
            return Err(Error::Query {
                code: response.code.value(),
                log,
            });
        }

        Ok(response)
    }

    /// All delegations of `delegator_addr`, following pagination to the end
    pub async fn delegator_delegations(
        &self,
        delegator_addr: &str,
    ) -> Result<Vec<DelegationResponse>> {
        let mut all = Vec::new();
        let mut key = Vec::new();

        loop {
            let request = QueryDelegatorDelegationsRequest {
                delegator_addr: delegator_addr.to_string(),
                pagination: Some(PageRequest {
                    key: key.clone(),
                    limit: DELEGATIONS_PAGE_LIMIT,
                    ..Default::default()
                }),
            };

            let response = self
                .abci_query(DELEGATOR_DELEGATIONS_PATH, request.encode_to_vec())
                .await?;
            let page = QueryDelegatorDelegationsResponse::decode(response.value.as_slice())?;
            debug!(
                delegator = delegator_addr,
                count = page.delegation_responses.len(),
                "Fetched delegations page"
            );

            let next = page
                .pagination
                .map(|p| p.next_key)
                .filter(|k| !k.is_empty());
            all.extend(
                page.delegation_responses
                    .into_iter()
                    .map(DelegationResponse::from),
            );

            match next {
                Some(next) if next != key => key = next,
                _ => break,
            }
        }

        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_encoding() {
        let request = QueryDelegatorDelegationsRequest {
            delegator_addr: "osmo1abc".to_string(),
            pagination: Some(PageRequest {
                limit: 100,
                ..Default::default()
            }),
        };
        // field 1 "osmo1abc", field 2 { field 3: 100 }
        let mut expected = vec![0x0a, 0x08];
        expected.extend_from_slice(b"osmo1abc");
        expected.extend_from_slice(&[0x12, 0x02, 0x18, 0x64]);
        assert_eq!(request.encode_to_vec(), expected);
    }

    #[test]
    fn test_rejects_malformed_node_uri() {
        let config = Config::default();
        assert!(CosmosRpcClient::new("not a uri", &config).is_err());
        assert!(CosmosRpcClient::new("https://rpc.osmosis.zone:443", &config).is_ok());
    }

    #[test]
    fn test_truncated_response_is_decode_error() {
        let err: Error = QueryDelegatorDelegationsResponse::decode(&[0x0a, 0x05, 0x0a][..])
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
