use soroban_sdk::{contracterror, contracttype, Address, BytesN};

use crate::asset::Asset;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    TransferFailed = 1,
    HashMismatch = 2,
    NotYetExpired = 3,
    NotFunded = 4,
    AlreadyFunded = 5,
    DeadlineOverflow = 6,
    Reentrant = 7,
    InvalidAmount = 8,
}

/// Lifecycle of a single swap instance.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwapState {
    Created,
    Funded,
    Completed,
    Expired,
}

/// Parties and asset, fixed by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapTerms {
    pub owner: Address,
    pub counterparty: Address,
    pub asset: Asset,
}

/// Written once by a successful deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashTimeLock {
    pub hash_key: BytesN<32>, // keccak256 of the secret
    pub deadline: u64,        // ledger timestamp, seconds
}

// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Terms,
    Lock,
    State,
    Entered,
}
