use soroban_sdk::{log, panic_with_error, Address, Bytes, BytesN, Env};

use crate::asset::{Asset, Custodian};
use crate::types::{DataKey, Error, HashTimeLock, SwapState, SwapTerms};
use crate::{events, hashlock, timelock};

/// Public surface shared by every swap contract.
pub trait BaseSwapTrait {
    /// Locks the asset under `hash_key` until the computed deadline.
    fn deposit(
        env: Env,
        hash_key: BytesN<32>,
        base_deadline: u64,
        is_initiator_side: bool,
    ) -> Result<(), Error>;
    /// Releases the asset to the counterparty and publishes `secret`.
    fn confirm_swap(env: Env, secret: Bytes) -> Result<(), Error>;
    /// Returns the asset to the owner once the deadline has passed.
    fn withdrawal(env: Env) -> Result<(), Error>;
    fn owner(env: Env) -> Address;
    fn counterparty(env: Env) -> Address;
    fn asset(env: Env) -> Asset;
    fn hash_key(env: Env) -> Option<BytesN<32>>;
    fn deadline(env: Env) -> Option<u64>;
    fn state(env: Env) -> SwapState;
}

// Modifier helpers
pub fn only_state(env: &Env, expected: SwapState, error: Error) -> Result<(), Error> {
    if state(env) != expected {
        return Err(error);
    }
    Ok(())
}

/// Runs `f` with the reentrancy flag raised.
pub fn non_reentrant<T>(env: &Env, f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    let entered: bool = env
        .storage()
        .instance()
        .get(&DataKey::Entered)
        .unwrap_or(false);
    if entered {
        log!(env, "reentrant call rejected");
        return Err(Error::Reentrant);
    }
    env.storage().instance().set(&DataKey::Entered, &true);
    let result = f();
    env.storage().instance().set(&DataKey::Entered, &false);
    result
}

// Storage
pub fn initialize(env: &Env, owner: Address, counterparty: Address, asset: Asset) {
    if let Asset::Fungible(fungible) = &asset {
        if fungible.amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }
    }
    let terms = SwapTerms {
        owner,
        counterparty,
        asset,
    };
    env.storage().persistent().set(&DataKey::Terms, &terms);
    env.storage()
        .instance()
        .set(&DataKey::State, &SwapState::Created);
}

pub fn terms(env: &Env) -> SwapTerms {
    env.storage()
        .persistent()
        .get(&DataKey::Terms)
        .unwrap_or_else(|| panic!("Terms not set"))
}

pub fn lock(env: &Env) -> Option<HashTimeLock> {
    env.storage().persistent().get(&DataKey::Lock)
}

pub fn state(env: &Env) -> SwapState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or(SwapState::Created)
}

fn set_state(env: &Env, state: SwapState) {
    env.storage().instance().set(&DataKey::State, &state);
}

// Terms, lock and instance must stay live until the deadline passes.
pub fn extend_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    let persistent = env.storage().persistent();
    persistent.extend_ttl(&DataKey::Terms, max_ttl, max_ttl);
    if persistent.has(&DataKey::Lock) {
        persistent.extend_ttl(&DataKey::Lock, max_ttl, max_ttl);
    }
    env.storage().instance().extend_ttl(max_ttl, max_ttl);
}

fn funded_lock(env: &Env) -> Result<HashTimeLock, Error> {
    only_state(env, SwapState::Funded, Error::NotFunded)?;
    lock(env).ok_or(Error::NotFunded)
}

// Operations. Every one writes its state transition before touching the
// ledger; a failed transfer returns `Err` and the host discards the writes.

pub fn deposit<C: Custodian>(
    env: &Env,
    hash_key: BytesN<32>,
    base_deadline: u64,
    is_initiator_side: bool,
) -> Result<(), Error> {
    non_reentrant(env, || {
        let terms = terms(env);
        terms.owner.require_auth();
        only_state(env, SwapState::Created, Error::AlreadyFunded)?;

        let deadline = timelock::deadline_for(base_deadline, is_initiator_side)?;
        let lock = HashTimeLock { hash_key, deadline };
        env.storage().persistent().set(&DataKey::Lock, &lock);
        set_state(env, SwapState::Funded);
        extend_ttl(env);

        terms.asset.pull::<C>(env, &terms.owner)?;

        events::deposited(env, &terms.owner, &lock.hash_key, lock.deadline);
        log!(env, "funded, deadline {}", lock.deadline);
        Ok(())
    })
}

pub fn confirm_swap(env: &Env, secret: Bytes) -> Result<(), Error> {
    non_reentrant(env, || {
        let lock = funded_lock(env)?;
        hashlock::only_valid_secret(env, &secret, &lock.hash_key)?;

        set_state(env, SwapState::Completed);
        events::swapped(env, &lock.hash_key, &secret);

        let terms = terms(env);
        terms.asset.push(env, &terms.counterparty)?;
        log!(env, "completed, released to {}", terms.counterparty);
        Ok(())
    })
}

pub fn withdrawal(env: &Env) -> Result<(), Error> {
    non_reentrant(env, || {
        let lock = funded_lock(env)?;
        timelock::only_after_deadline(env, lock.deadline)?;

        set_state(env, SwapState::Expired);
        let terms = terms(env);
        events::withdrawn(env, &terms.owner, lock.deadline);

        terms.asset.push(env, &terms.owner)?;
        log!(env, "expired, returned to {}", terms.owner);
        Ok(())
    })
}
