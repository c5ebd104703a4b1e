//! Staking delegation records

use crate::core::constants::{DEC_PRECISION, DISPLAY_SHARE_DIVISOR};
use cosmos_sdk_proto::cosmos::base::v1beta1 as base;
use cosmos_sdk_proto::cosmos::staking::v1beta1 as staking;
use serde::{Deserialize, Serialize};

/// `cosmos.staking.v1beta1.Delegation`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator_address: String,
    pub validator_address: String,
    /// `cosmos.Dec` in its wire form: an integer scaled by 10^18
    pub shares: String,
}

/// `cosmos.base.v1beta1.Coin`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Delegation together with the balance the chain reports for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationResponse {
    pub delegation: Delegation,
    pub balance: Option<Coin>,
}

impl Delegation {
    /// Shares as a float
    pub fn shares_f64(&self) -> f64 {
        dec_to_f64(&self.shares)
    }

    /// Shares scaled down to display units
    pub fn display_shares(&self) -> f64 {
        self.shares_f64() / DISPLAY_SHARE_DIVISOR
    }
}

impl From<staking::Delegation> for Delegation {
    fn from(d: staking::Delegation) -> Self {
        Self {
            delegator_address: d.delegator_address,
            validator_address: d.validator_address,
            shares: d.shares,
        }
    }
}

impl From<base::Coin> for Coin {
    fn from(c: base::Coin) -> Self {
        Self {
            denom: c.denom,
            amount: c.amount,
        }
    }
}

impl From<staking::DelegationResponse> for DelegationResponse {
    fn from(r: staking::DelegationResponse) -> Self {
        Self {
            delegation: r.delegation.map(Delegation::from).unwrap_or_default(),
            balance: r.balance.map(Coin::from),
        }
    }
}

/// Convert a `cosmos.Dec` to f64.
///
/// The wire form is an integer string with 18 implied decimals. Strings that
/// already contain a decimal point are parsed as-is.
pub fn dec_to_f64(dec: &str) -> f64 {
    let dec = dec.trim();
    if dec.is_empty() {
        return 0.0;
    }
    if dec.contains('.') {
        return dec.parse().unwrap_or(0.0);
    }

    let (negative, digits) = match dec.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, dec),
    };
    let precision = DEC_PRECISION as usize;
    let padded = format!("{:0>width$}", digits, width = precision + 1);
    let (whole, frac) = padded.split_at(padded.len() - precision);
    let value: f64 = format!("{}.{}", whole, frac).parse().unwrap_or(0.0);

    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dec_to_f64() {
        assert_eq!(dec_to_f64("1000000000000000000"), 1.0);
        assert_eq!(dec_to_f64("2500000000000000000000000"), 2_500_000.0);
        assert_eq!(dec_to_f64("500000000000000000"), 0.5);
        assert_eq!(dec_to_f64("1"), 1e-18);
        assert_eq!(dec_to_f64("0"), 0.0);
        assert_eq!(dec_to_f64(""), 0.0);
        assert_eq!(dec_to_f64("12.5"), 12.5);
        assert_eq!(dec_to_f64("-1000000000000000000"), -1.0);
    }

    #[test]
    fn test_display_shares() {
        let d = Delegation {
            shares: "2500000000000000000000000".to_string(),
            ..Default::default()
        };
        assert_eq!(d.display_shares(), 2.5);
    }

    #[test]
    fn test_from_proto_response() {
        let response = DelegationResponse::from(staking::DelegationResponse {
            delegation: Some(staking::Delegation {
                delegator_address: "osmo1abc".to_string(),
                validator_address: "osmovaloper1xyz".to_string(),
                shares: "1000000000000000000000000".to_string(),
            }),
            balance: None,
        });
        assert_eq!(response.delegation.validator_address, "osmovaloper1xyz");
        assert_eq!(response.delegation.display_shares(), 1.0);
        assert!(response.balance.is_none());

        let empty = DelegationResponse::from(staking::DelegationResponse::default());
        assert_eq!(empty.delegation, Delegation::default());
    }
}
