use soroban_sdk::{contracttype, Address, Bytes};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Transactions and confirmations outlive the instance bump window.
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Token,
    Owners,
    Owner(Address),
    Threshold,
    TransactionCount,
    Transaction(u64),
    Confirmation(u64, Address),
}

/// A proposed action held in the ledger.
///
/// `target`, `value` and `payload` are fixed at proposal time. Only
/// `confirmations` and `executed` change afterwards, and neither changes
/// once `executed` is set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub index: u64,
    pub proposer: Address,
    pub target: Address,
    pub value: i128,
    pub payload: Bytes,
    pub executed: bool,
    pub confirmations: u32,
}

/// Administrative change carried, XDR-encoded, in the payload of a
/// transaction whose target is the wallet itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GovernanceAction {
    AddOwner(Address),
    SetThreshold(u32),
}
