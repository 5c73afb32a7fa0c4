#![no_std]

// Fungible-asset swap contract
// Holds a fixed amount of one token under a hash-lock and a time-lock

mod fungibleswap;

// Re-export the contract
pub use fungibleswap::{FungibleSwap, FungibleSwapClient};
