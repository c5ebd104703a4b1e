//! Matching REStake validators against a delegator's delegations

use crate::error::{Error, Result};
use crate::types::{Delegation, ValidatorForNetwork};
use std::collections::HashSet;

/// Validators the delegator can grant REStake access to.
///
/// With no delegations every supported validator is a candidate. Otherwise
/// only validators the delegator actually delegates to are kept, and an empty
/// intersection is reported as [`Error::NoRelevantValidators`].
pub fn filter_by_delegations(
    validators: Vec<ValidatorForNetwork>,
    delegations: &[Delegation],
) -> Result<Vec<ValidatorForNetwork>> {
    let relevant: Vec<_> = if delegations.is_empty() {
        validators
    } else {
        let delegated: HashSet<&str> = delegations
            .iter()
            .map(|d| d.validator_address.as_str())
            .collect();
        validators
            .into_iter()
            .filter(|v| delegated.contains(v.validator_address.as_str()))
            .collect()
    };

    if relevant.is_empty() {
        return Err(Error::NoRelevantValidators);
    }
    Ok(relevant)
}

/// Delegated validators that also run a REStake bot, the ones a grant can target.
///
/// Applies [`filter_by_delegations`] first. Validators without a REStake
/// address are then dropped, and an empty result is reported as
/// [`Error::NoRelevantValidators`].
pub fn grantable_validators(
    validators: Vec<ValidatorForNetwork>,
    delegations: &[Delegation],
) -> Result<Vec<ValidatorForNetwork>> {
    let grantable: Vec<_> = filter_by_delegations(validators, delegations)?
        .into_iter()
        .filter(ValidatorForNetwork::has_restake_address)
        .collect();

    if grantable.is_empty() {
        return Err(Error::NoRelevantValidators);
    }
    Ok(grantable)
}
