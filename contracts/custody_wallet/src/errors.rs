use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CustodyError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidIdentity = 3,
    AlreadyOwner = 4,
    EmptyOwners = 5,
    ThresholdInvariantViolated = 6,
    NotFound = 10,
    AlreadyExecuted = 11,
    AlreadyConfirmed = 12,
    NotConfirmed = 13,
    QuorumNotMet = 14,
    CallFailed = 15,
    InvalidAmount = 20,
    InvalidPayload = 21,
}
