#![no_std]

// Non-fungible swap contract
// Holds one token identifier under a hash-lock and a time-lock

mod nftswap;

// Re-export the contract
pub use nftswap::{NftSwap, NftSwapClient};
