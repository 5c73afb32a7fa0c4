#![no_std]

// Shared library for hash/time-locked swap contracts
// Contains the asset adapter, hash-lock and time-lock checks, events and the base swap state machine

pub mod asset;
pub mod baseswap;
pub mod events;
pub mod hashlock;
pub mod timelock;
pub mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

// Re-export commonly used types for easier imports
pub use asset::{Asset, Custodian, FungibleAsset, NftClient, NonFungibleAsset, NonFungibleLedger, NFT_RECEIVED};
pub use baseswap::{BaseSwapTrait, non_reentrant, only_state};
pub use hashlock::{digest, only_valid_secret};
pub use timelock::{deadline_for, only_after_deadline, ONE_DAY};
pub use types::{Error as SwapError, HashTimeLock, SwapState, SwapTerms};
