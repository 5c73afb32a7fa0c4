use shared::{
    baseswap, Asset, BaseSwapTrait, Custodian, FungibleAsset, SwapError as Error, SwapState,
};
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env};

#[contract]
pub struct FungibleSwap;

// Token ledgers never ask a fungible custodian for acceptance.
impl Custodian for FungibleSwap {}

#[contractimpl]
impl FungibleSwap {
    /// Fixes both parties and the token amount for the lifetime of the instance.
    pub fn __constructor(
        env: Env,
        owner: Address,
        counterparty: Address,
        token: Address,
        amount: i128,
    ) {
        let asset = Asset::Fungible(FungibleAsset { token, amount });
        baseswap::initialize(&env, owner, counterparty, asset);
    }
}

#[contractimpl]
impl BaseSwapTrait for FungibleSwap {
    /// The owner must have approved this contract for the amount beforehand.
    fn deposit(
        env: Env,
        hash_key: BytesN<32>,
        base_deadline: u64,
        is_initiator_side: bool,
    ) -> Result<(), Error> {
        baseswap::deposit::<Self>(&env, hash_key, base_deadline, is_initiator_side)
    }

    fn confirm_swap(env: Env, secret: Bytes) -> Result<(), Error> {
        baseswap::confirm_swap(&env, secret)
    }

    fn withdrawal(env: Env) -> Result<(), Error> {
        baseswap::withdrawal(&env)
    }

    fn owner(env: Env) -> Address {
        baseswap::terms(&env).owner
    }

    fn counterparty(env: Env) -> Address {
        baseswap::terms(&env).counterparty
    }

    fn asset(env: Env) -> Asset {
        baseswap::terms(&env).asset
    }

    fn hash_key(env: Env) -> Option<BytesN<32>> {
        baseswap::lock(&env).map(|lock| lock.hash_key)
    }

    fn deadline(env: Env) -> Option<u64> {
        baseswap::lock(&env).map(|lock| lock.deadline)
    }

    fn state(env: Env) -> SwapState {
        baseswap::state(&env)
    }
}
