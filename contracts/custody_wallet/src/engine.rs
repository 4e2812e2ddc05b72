use soroban_sdk::{contractclient, log, token, Address, Bytes, Env};

use crate::errors::CustodyError;
use crate::governance;
use crate::ledger;
use crate::owners;
use crate::types::{DataKey, Transaction};

/// Entry point a contract target implements to receive a call from the
/// wallet. Returning `false` fails the execution.
#[contractclient(name = "CallReceiverClient")]
pub trait CallReceiver {
    fn on_multisig_call(env: Env, from: Address, value: i128, payload: Bytes) -> bool;
}

/// Performs the external effect of an executed transaction.
///
/// Called after the transaction is already marked executed, so an
/// implementation may re-enter the wallet freely.
pub(crate) trait CallForwarder {
    fn forward(&mut self, env: &Env, transaction: &Transaction) -> Result<(), CustodyError>;
}

/// Moves pool tokens to the target and, for a non-empty payload, invokes
/// the target's `on_multisig_call`.
pub(crate) struct HostForwarder;

impl CallForwarder for HostForwarder {
    fn forward(&mut self, env: &Env, transaction: &Transaction) -> Result<(), CustodyError> {
        let wallet = env.current_contract_address();

        if transaction.value > 0 {
            let token_address: Address = env
                .storage()
                .instance()
                .get(&DataKey::Token)
                .ok_or(CustodyError::NotInitialized)?;
            let token_client = token::Client::new(env, &token_address);
            match token_client.try_transfer(&wallet, &transaction.target, &transaction.value) {
                Ok(Ok(())) => {}
                _ => return Err(CustodyError::CallFailed),
            }
        }

        if !transaction.payload.is_empty() {
            let receiver = CallReceiverClient::new(env, &transaction.target);
            match receiver.try_on_multisig_call(&wallet, &transaction.value, &transaction.payload) {
                Ok(Ok(true)) => {}
                _ => return Err(CustodyError::CallFailed),
            }
        }

        Ok(())
    }
}

/// Authority to mutate the owner set or threshold.
///
/// Only `execute` constructs one, and only while applying a quorum-approved
/// transaction that targets the wallet itself.
pub(crate) struct GovernanceGrant {
    _private: (),
}

pub(crate) fn execute<F: CallForwarder>(
    env: &Env,
    index: u64,
    caller: &Address,
    forwarder: &mut F,
) -> Result<Transaction, CustodyError> {
    owners::require_owner(env, caller)?;
    let mut transaction = ledger::get_pending(env, index)?;
    if transaction.confirmations < owners::threshold(env) {
        return Err(CustodyError::QuorumNotMet);
    }

    // Mark executed before any outgoing call: a reentrant execute of this
    // index must observe the flag.
    transaction.executed = true;
    ledger::store(env, &transaction);

    let outcome = if transaction.target == env.current_contract_address() {
        let grant = GovernanceGrant { _private: () };
        governance::apply(env, &grant, &transaction.payload)
    } else {
        forwarder.forward(env, &transaction)
    };

    if let Err(err) = outcome {
        // The host discards the frame's other writes; restore the flag so
        // the ledger is consistent even for callers that do not roll back.
        transaction.executed = false;
        ledger::store(env, &transaction);
        log!(env, "execution failed", index, err as u32);
        return Err(err);
    }

    log!(env, "transaction executed", index, caller.clone());
    Ok(transaction)
}
