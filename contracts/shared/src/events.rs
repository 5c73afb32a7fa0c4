use soroban_sdk::{symbol_short, Address, Bytes, BytesN, Env};

pub fn deposited(env: &Env, owner: &Address, hash_key: &BytesN<32>, deadline: u64) {
    env.events().publish(
        (symbol_short!("Deposit"), owner.clone()),
        (hash_key.clone(), deadline),
    );
}

/// The revealed secret. The relay replays it against the paired instance
/// on the other ledger.
pub fn swapped(env: &Env, hash_key: &BytesN<32>, secret: &Bytes) {
    env.events()
        .publish((symbol_short!("Swap"), hash_key.clone()), secret.clone());
}

pub fn withdrawn(env: &Env, owner: &Address, deadline: u64) {
    env.events()
        .publish((symbol_short!("Withdraw"), owner.clone()), deadline);
}
