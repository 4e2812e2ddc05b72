use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Bytes, Env, Vec};

use crate::confirmations;
use crate::engine::{self, HostForwarder};
use crate::errors::CustodyError;
use crate::events::{Confirmed, Deposited, Executed, Proposed, Revoked};
use crate::ledger;
use crate::owners;
use crate::types::{DataKey, Transaction, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

#[contract]
pub struct CustodyWallet;

#[contractimpl]
impl CustodyWallet {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        token: Address,
    ) -> Result<(), CustodyError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(CustodyError::AlreadyInitialized);
        }

        owners::install(&env, &owners, threshold)?;

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Initialized, &true);
        Self::bump_instance(&env);

        log!(&env, "wallet initialized", owners.len(), threshold);
        Ok(())
    }

    /// Adds `amount` of the pool token to the wallet. Anyone may deposit.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), CustodyError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(CustodyError::InvalidAmount);
        }

        let token_client = TokenClient::new(&env, &Self::pool_token(&env)?);
        token_client.transfer(&from, &env.current_contract_address(), &amount);
        Self::bump_instance(&env);

        Deposited { from, amount }.publish(&env);
        Ok(())
    }

    pub fn propose(
        env: Env,
        proposer: Address,
        target: Address,
        value: i128,
        payload: Bytes,
    ) -> Result<u64, CustodyError> {
        Self::require_initialized(&env)?;
        proposer.require_auth();

        let index = ledger::propose(&env, proposer.clone(), target.clone(), value, payload.clone())?;
        Self::bump_instance(&env);

        Proposed {
            index,
            proposer,
            target,
            value,
            payload,
        }
        .publish(&env);
        Ok(index)
    }

    pub fn confirm(env: Env, index: u64, owner: Address) -> Result<(), CustodyError> {
        Self::require_initialized(&env)?;
        owner.require_auth();

        confirmations::confirm(&env, index, &owner)?;
        Self::bump_instance(&env);

        Confirmed { index, owner }.publish(&env);
        Ok(())
    }

    pub fn revoke(env: Env, index: u64, owner: Address) -> Result<(), CustodyError> {
        Self::require_initialized(&env)?;
        owner.require_auth();

        confirmations::revoke(&env, index, &owner)?;
        Self::bump_instance(&env);

        Revoked { index, owner }.publish(&env);
        Ok(())
    }

    /// Executes a transaction once it holds at least `threshold`
    /// confirmations. Restricted to owners.
    pub fn execute(env: Env, index: u64, caller: Address) -> Result<(), CustodyError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        engine::execute(&env, index, &caller, &mut HostForwarder)?;
        Self::bump_instance(&env);

        Executed { index, caller }.publish(&env);
        Ok(())
    }

    /// Governance-only, and always rejected when invoked. Owner changes
    /// arrive as a `GovernanceAction::AddOwner` payload on a transaction
    /// targeting this wallet, applied by `execute` once it reaches quorum.
    pub fn add_owner(env: Env, owner: Address) -> Result<(), CustodyError> {
        Self::require_initialized(&env)?;
        log!(&env, "direct add_owner rejected", owner);
        Err(CustodyError::Unauthorized)
    }

    /// Always rejected; see `add_owner`. Threshold changes arrive as a
    /// `GovernanceAction::SetThreshold` payload.
    pub fn set_threshold(env: Env, threshold: u32) -> Result<(), CustodyError> {
        Self::require_initialized(&env)?;
        log!(&env, "direct set_threshold rejected", threshold);
        Err(CustodyError::Unauthorized)
    }

    pub fn is_owner(env: Env, owner: Address) -> Result<bool, CustodyError> {
        Self::require_initialized(&env)?;
        Ok(owners::is_owner(&env, &owner))
    }

    pub fn list_owners(env: Env) -> Result<Vec<Address>, CustodyError> {
        Self::require_initialized(&env)?;
        Ok(owners::list(&env))
    }

    pub fn threshold(env: Env) -> Result<u32, CustodyError> {
        Self::require_initialized(&env)?;
        Ok(owners::threshold(&env))
    }

    pub fn transaction_count(env: Env) -> Result<u64, CustodyError> {
        Self::require_initialized(&env)?;
        Ok(ledger::count(&env))
    }

    pub fn get_transaction(env: Env, index: u64) -> Result<Transaction, CustodyError> {
        Self::require_initialized(&env)?;
        ledger::get(&env, index)
    }

    pub fn list_confirmers(env: Env, index: u64) -> Result<Vec<Address>, CustodyError> {
        Self::require_initialized(&env)?;
        confirmations::confirmers_of(&env, index)
    }

    pub fn is_confirmed(env: Env, index: u64, owner: Address) -> Result<bool, CustodyError> {
        Self::require_initialized(&env)?;
        Ok(confirmations::is_confirmed(&env, index, &owner))
    }

    pub fn token(env: Env) -> Result<Address, CustodyError> {
        Self::require_initialized(&env)?;
        Self::pool_token(&env)
    }

    pub fn balance(env: Env) -> Result<i128, CustodyError> {
        Self::require_initialized(&env)?;
        let token_client = TokenClient::new(&env, &Self::pool_token(&env)?);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    fn require_initialized(env: &Env) -> Result<(), CustodyError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(CustodyError::NotInitialized);
        }
        Ok(())
    }

    fn pool_token(env: &Env) -> Result<Address, CustodyError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CustodyError::NotInitialized)
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
