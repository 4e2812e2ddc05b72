use soroban_sdk::{log, xdr::FromXdr, Address, Bytes, Env};

use crate::errors::CustodyError;
use crate::owners;
use crate::types::{
    DataKey, GovernanceAction, Transaction, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD,
};

pub(crate) fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

/// Decodes the governance action carried by a wallet-targeted payload.
/// Bytes that are not XDR trap in the host decoder; well-formed XDR of
/// another shape is `InvalidPayload`.
pub(crate) fn governance_action(env: &Env, payload: &Bytes) -> Result<GovernanceAction, CustodyError> {
    GovernanceAction::from_xdr(env, payload).map_err(|_| CustodyError::InvalidPayload)
}

pub(crate) fn propose(
    env: &Env,
    proposer: Address,
    target: Address,
    value: i128,
    payload: Bytes,
) -> Result<u64, CustodyError> {
    owners::require_owner(env, &proposer)?;

    if value < 0 {
        return Err(CustodyError::InvalidAmount);
    }

    if target == env.current_contract_address() {
        if value != 0 {
            return Err(CustodyError::InvalidAmount);
        }
        governance_action(env, &payload)?;
    }

    let index = count(env);
    let transaction = Transaction {
        index,
        proposer,
        target,
        value,
        payload,
        executed: false,
        confirmations: 0,
    };

    store(env, &transaction);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(index + 1));

    log!(env, "transaction proposed", index);
    Ok(index)
}

pub(crate) fn get(env: &Env, index: u64) -> Result<Transaction, CustodyError> {
    let key = DataKey::Transaction(index);
    let transaction: Transaction = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(CustodyError::NotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    Ok(transaction)
}

/// Loads a transaction that is still open for confirmation or execution.
pub(crate) fn get_pending(env: &Env, index: u64) -> Result<Transaction, CustodyError> {
    let transaction = get(env, index)?;
    if transaction.executed {
        return Err(CustodyError::AlreadyExecuted);
    }
    Ok(transaction)
}

pub(crate) fn store(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.index);
    env.storage().persistent().set(&key, transaction);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
