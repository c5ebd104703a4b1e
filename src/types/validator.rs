//! Validator directory records

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level response of the validator directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorsResponse {
    #[serde(default)]
    pub validators: Vec<ValidatorEntry>,
}

/// One operator and every chain it validates on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorEntry {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub chains: Vec<ValidatorChain>,
}

/// Operator presence on a single chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorChain {
    /// Chain registry name (e.g. `osmosis`)
    pub name: String,
    /// Validator operator address (`...valoper1...`)
    #[serde(default)]
    pub address: String,
    /// Address of the REStake bot that receives the grants
    #[serde(default, deserialize_with = "deserialize_restake")]
    pub restake: Option<String>,
}

/// `restake` is a bare address in older directory responses, an object with
/// an `address` field in newer ones, and `false` when the operator has none.
fn deserialize_restake<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let address = match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map
            .get("address")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };
    Ok(address.filter(|a| !a.is_empty()))
}

/// A validator as seen from a single network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorForNetwork {
    pub path: String,
    pub name: String,
    pub identity: String,
    pub restake_address: String,
    pub validator_address: String,
}

impl ValidatorForNetwork {
    pub fn from_entry(entry: &ValidatorEntry, chain: &ValidatorChain) -> Self {
        Self {
            path: entry.path.clone(),
            name: entry.name.clone(),
            identity: entry.identity.clone().unwrap_or_default(),
            restake_address: chain.restake.clone().unwrap_or_default(),
            validator_address: chain.address.clone(),
        }
    }

    /// Whether the directory lists a REStake bot address for this validator
    pub fn has_restake_address(&self) -> bool {
        !self.restake_address.is_empty()
    }
}

impl std::fmt::Display for ValidatorForNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_directory_entry() {
        let json = r#"{
            "validators": [{
                "path": "ecostake",
                "name": "ECO Stake 🌱",
                "identity": "5992A6D423A406D6",
                "total_usd": 1234.5,
                "chains": [
                    {"name": "osmosis", "address": "osmovaloper1abc", "restake": "osmo1bot"},
                    {"name": "juno", "address": "junovaloper1abc"}
                ]
            }]
        }"#;

        let res: ValidatorsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.validators.len(), 1);
        let entry = &res.validators[0];
        assert_eq!(entry.chains[0].restake.as_deref(), Some("osmo1bot"));
        assert_eq!(entry.chains[1].restake, None);

        let v = ValidatorForNetwork::from_entry(entry, &entry.chains[1]);
        assert_eq!(v.identity, "5992A6D423A406D6");
        assert!(!v.has_restake_address());
        assert_eq!(v.to_string(), "ecostake: ECO Stake 🌱");
    }

    #[test]
    fn test_restake_object_and_false() {
        let json = r#"[
            {"name": "akash", "address": "akashvaloper1x", "restake": {"address": "akash1bot", "run_time": "21:00"}},
            {"name": "evmos", "address": "evmosvaloper1x", "restake": false},
            {"name": "juno", "address": "junovaloper1x", "restake": ""}
        ]"#;
        let chains: Vec<ValidatorChain> = serde_json::from_str(json).unwrap();
        assert_eq!(chains[0].restake.as_deref(), Some("akash1bot"));
        assert_eq!(chains[1].restake, None);
        assert_eq!(chains[2].restake, None);
    }

    #[test]
    fn test_null_identity() {
        let json = r#"{"path": "p", "name": "n", "identity": null}"#;
        let entry: ValidatorEntry = serde_json::from_str(json).unwrap();
        assert!(entry.identity.is_none());
        assert!(entry.chains.is_empty());
    }
}
