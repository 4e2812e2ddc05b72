#![no_std]

mod confirmations;
mod engine;
pub mod errors;
pub mod events;
mod governance;
mod ledger;
mod owners;
pub mod types;
mod wallet;

pub use engine::{CallReceiver, CallReceiverClient};
pub use errors::CustodyError;
pub use types::{GovernanceAction, Transaction};
pub use wallet::{CustodyWallet, CustodyWalletClient};
