//! The (transaction, owner) confirmation relation.
//!
//! A confirmation is a persistent `true` under `DataKey::Confirmation`; a
//! missing key means "not confirmed". Every write to the relation is paired
//! with the matching change to `Transaction::confirmations` in the same
//! call, so the counter always equals the number of present keys.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::CustodyError;
use crate::ledger;
use crate::owners;
use crate::types::{DataKey, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD};

/// Reading a present entry also extends its TTL, so entries live as long
/// as the transaction record whose counter they back.
pub(crate) fn is_confirmed(env: &Env, index: u64, owner: &Address) -> bool {
    let key = DataKey::Confirmation(index, owner.clone());
    let confirmed = env.storage().persistent().get(&key).unwrap_or(false);
    if confirmed {
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    confirmed
}

pub(crate) fn confirm(env: &Env, index: u64, owner: &Address) -> Result<u32, CustodyError> {
    owners::require_owner(env, owner)?;
    let mut transaction = ledger::get_pending(env, index)?;
    if is_confirmed(env, index, owner) {
        return Err(CustodyError::AlreadyConfirmed);
    }

    let key = DataKey::Confirmation(index, owner.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);

    transaction.confirmations += 1;
    ledger::store(env, &transaction);

    log!(env, "transaction confirmed", index, owner.clone(), transaction.confirmations);
    Ok(transaction.confirmations)
}

pub(crate) fn revoke(env: &Env, index: u64, owner: &Address) -> Result<u32, CustodyError> {
    owners::require_owner(env, owner)?;
    let mut transaction = ledger::get_pending(env, index)?;
    if !is_confirmed(env, index, owner) {
        return Err(CustodyError::NotConfirmed);
    }

    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(index, owner.clone()));

    transaction.confirmations -= 1;
    ledger::store(env, &transaction);

    log!(env, "confirmation revoked", index, owner.clone(), transaction.confirmations);
    Ok(transaction.confirmations)
}

/// Owners that currently confirm `index`, in owner-set order.
pub(crate) fn confirmers_of(env: &Env, index: u64) -> Result<Vec<Address>, CustodyError> {
    ledger::get(env, index)?;

    let mut confirmers = Vec::new(env);
    for owner in owners::list(env).iter() {
        if is_confirmed(env, index, &owner) {
            confirmers.push_back(owner);
        }
    }
    Ok(confirmers)
}
