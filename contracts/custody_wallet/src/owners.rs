use soroban_sdk::{log, Address, Env, Vec};

use crate::engine::GovernanceGrant;
use crate::errors::CustodyError;
use crate::types::DataKey;

pub(crate) fn is_owner(env: &Env, who: &Address) -> bool {
    env.storage().instance().has(&DataKey::Owner(who.clone()))
}

pub(crate) fn require_owner(env: &Env, who: &Address) -> Result<(), CustodyError> {
    if !is_owner(env, who) {
        return Err(CustodyError::Unauthorized);
    }
    Ok(())
}

pub(crate) fn list(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn threshold(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Threshold).unwrap_or(0)
}

/// Threshold and owner count are only ever validated together.
fn check_threshold(threshold: u32, owner_count: u32) -> Result<(), CustodyError> {
    if threshold == 0 || threshold > owner_count {
        return Err(CustodyError::ThresholdInvariantViolated);
    }
    Ok(())
}

fn check_identity(env: &Env, who: &Address) -> Result<(), CustodyError> {
    // The wallet can never authenticate as one of its own owners.
    if *who == env.current_contract_address() {
        return Err(CustodyError::InvalidIdentity);
    }
    Ok(())
}

/// Installs the initial owner set. Runs once, from `initialize`.
pub(crate) fn install(env: &Env, owners: &Vec<Address>, threshold: u32) -> Result<(), CustodyError> {
    if owners.is_empty() {
        return Err(CustodyError::EmptyOwners);
    }

    for i in 0..owners.len() {
        let owner = owners.get_unchecked(i);
        check_identity(env, &owner)?;
        for j in (i + 1)..owners.len() {
            if owner == owners.get_unchecked(j) {
                return Err(CustodyError::AlreadyOwner);
            }
        }
    }

    check_threshold(threshold, owners.len())?;

    for owner in owners.iter() {
        env.storage().instance().set(&DataKey::Owner(owner), &true);
    }
    env.storage().instance().set(&DataKey::Owners, owners);
    env.storage().instance().set(&DataKey::Threshold, &threshold);
    Ok(())
}

pub(crate) fn add_owner(env: &Env, _grant: &GovernanceGrant, owner: Address) -> Result<(), CustodyError> {
    check_identity(env, &owner)?;
    if is_owner(env, &owner) {
        return Err(CustodyError::AlreadyOwner);
    }

    let mut owners = list(env);
    check_threshold(threshold(env), owners.len() + 1)?;

    owners.push_back(owner.clone());
    env.storage().instance().set(&DataKey::Owner(owner.clone()), &true);
    env.storage().instance().set(&DataKey::Owners, &owners);

    log!(env, "owner added", owner, owners.len());
    Ok(())
}

pub(crate) fn set_threshold(env: &Env, _grant: &GovernanceGrant, threshold: u32) -> Result<(), CustodyError> {
    check_threshold(threshold, list(env).len())?;
    env.storage().instance().set(&DataKey::Threshold, &threshold);

    log!(env, "threshold changed", threshold);
    Ok(())
}
