//! In-process stand-in for the validator directory, chain registry and a
//! Tendermint RPC node, shared by the integration tests.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use base64::Engine;
use cosmos_sdk_proto::cosmos::base::query::v1beta1::PageResponse;
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;
use cosmos_sdk_proto::cosmos::staking::v1beta1::{
    Delegation, DelegationResponse, QueryDelegatorDelegationsResponse,
};
use prost::Message;
use restake_authz_ledger::Config;
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock};

#[derive(Clone, Default)]
struct MockState {
    base: Arc<OnceLock<String>>,
}

fn validators_body() -> Value {
    json!({
        "validators": [
            {
                "path": "ecostake",
                "name": "ECO Stake",
                "identity": "5992A6D423A406D6",
                "chains": [
                    {"name": "mockchain", "address": "mockvaloper1eco", "restake": "mock1ecobot"},
                    {"name": "unlisted", "address": "unlistedvaloper1eco", "restake": "unlisted1bot"},
                    {"name": "blank", "address": "blankvaloper1eco"}
                ]
            },
            {
                "path": "lavender",
                "name": "Lavender.Five",
                "chains": [
                    {"name": "mockchain", "address": "mockvaloper1lav", "restake": {"address": "mock1lavbot"}}
                ]
            },
            {
                "path": "nobot",
                "name": "No Bot",
                "chains": [
                    {"name": "mockchain", "address": "mockvaloper1nobot", "restake": false}
                ]
            }
        ]
    })
}

async fn validators() -> Json<Value> {
    Json(validators_body())
}

async fn chain(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    let base = state.base.get().cloned().unwrap_or_default();
    match name.as_str() {
        "mockchain" => Json(json!({
            "repository": {"url": "https://github.com/cosmos/chain-registry"},
            "chain": {
                "chain_name": "mockchain",
                "chain_id": "mock-1",
                "pretty_name": "Mock Chain",
                "bech32_prefix": "mock",
                "fees": {"fee_tokens": [{"denom": "umock", "fixed_min_gas_price": 0.025}]},
                "apis": {"rpc": [{"address": base, "provider": "local"}]}
            }
        }))
        .into_response(),
        "blank" => Json(json!({})).into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn delegation(validator: &str, shares: &str) -> DelegationResponse {
    DelegationResponse {
        delegation: Some(Delegation {
            delegator_address: "mock1delegator".to_string(),
            validator_address: validator.to_string(),
            shares: shares.to_string(),
        }),
        balance: Some(Coin {
            denom: "umock".to_string(),
            amount: "1000000".to_string(),
        }),
    }
}

fn abci_response(id: &Value, code: u32, log: &str, value: &[u8]) -> Json<Value> {
    Json(json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {"response": {
            "code": code,
            "log": log,
            "info": "",
            "index": "0",
            "key": "",
            "value": base64::engine::general_purpose::STANDARD.encode(value),
            "proofOps": null,
            "height": "100",
            "codespace": if code == 0 { "" } else { "sdk" }
        }}
    }))
}

/// Two pages of delegations for `mock1delegator`; fixed failures for
/// `mock1invalid` (ABCI error code) and `mock1rpcfail` (JSON-RPC error)
async fn rpc(Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let data = request["params"]["data"].as_str().unwrap_or_default();
    let payload = hex::decode(data).unwrap_or_default();
    let contains = |needle: &[u8]| payload.windows(needle.len()).any(|w| w == needle);

    if contains(b"mock1invalid") {
        return abci_response(&id, 3, "invalid address", &[]);
    }
    if contains(b"mock1rpcfail") {
        return Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": -32603, "message": "Internal error", "data": "node is catching up"}
        }));
    }
    if contains(b"mock1nobody") {
        return abci_response(&id, 0, "", &[]);
    }

    let page = if contains(b"page-2") {
        QueryDelegatorDelegationsResponse {
            delegation_responses: vec![delegation("mockvaloper1lav", "2000000000000000000000000")],
            pagination: Some(PageResponse {
                next_key: vec![],
                total: 0,
            }),
        }
    } else {
        QueryDelegatorDelegationsResponse {
            delegation_responses: vec![
                delegation("mockvaloper1other", "1000000000000000000000000"),
                delegation("mockvaloper1nobot", "1000000000000000000000000"),
            ],
            pagination: Some(PageResponse {
                next_key: b"page-2".to_vec(),
                total: 0,
            }),
        }
    };
    abci_response(&id, 0, "", &page.encode_to_vec())
}

/// Start the mock on an ephemeral port and return its base URL
pub async fn spawn_mock() -> String {
    let state = MockState::default();
    let app = Router::new()
        .route("/", get(validators).post(rpc))
        .route("/chains/:name", get(chain))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    state.base.set(base.clone()).unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base
}

pub fn config_for(base: &str) -> Config {
    Config::new()
        .with_validators_url(format!("{}/", base))
        .with_chain_registry_url(base)
        .with_http_timeout(5)
}
