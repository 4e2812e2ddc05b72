use soroban_sdk::{Bytes, Env};

use crate::engine::GovernanceGrant;
use crate::errors::CustodyError;
use crate::events::{OwnerAdded, ThresholdChanged};
use crate::ledger;
use crate::owners;
use crate::types::GovernanceAction;

/// Applies the administrative change encoded in a wallet-targeted payload.
pub(crate) fn apply(env: &Env, grant: &GovernanceGrant, payload: &Bytes) -> Result<(), CustodyError> {
    match ledger::governance_action(env, payload)? {
        GovernanceAction::AddOwner(owner) => {
            owners::add_owner(env, grant, owner.clone())?;
            OwnerAdded { owner }.publish(env);
        }
        GovernanceAction::SetThreshold(threshold) => {
            owners::set_threshold(env, grant, threshold)?;
            ThresholdChanged { threshold }.publish(env);
        }
    }
    Ok(())
}
