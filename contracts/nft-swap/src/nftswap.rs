use shared::{
    baseswap, Asset, BaseSwapTrait, Custodian, NonFungibleAsset, SwapError as Error, SwapState,
    NFT_RECEIVED,
};
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, BytesN, Env};

#[contract]
pub struct NftSwap;

impl Custodian for NftSwap {
    fn acknowledge(_env: &Env, _operator: &Address, _from: &Address, _token_id: u32) -> u32 {
        NFT_RECEIVED
    }
}

#[contractimpl]
impl NftSwap {
    pub fn __constructor(
        env: Env,
        owner: Address,
        counterparty: Address,
        collection: Address,
        token_id: u32,
    ) {
        let asset = Asset::NonFungible(NonFungibleAsset {
            collection,
            token_id,
        });
        baseswap::initialize(&env, owner, counterparty, asset);
    }

    /// Inbound-transfer hook called by ledgers that deliver tokens with a
    /// safe transfer.
    pub fn on_nft_received(env: Env, operator: Address, from: Address, token_id: u32) -> u32 {
        log!(&env, "received token {} from {}", token_id, from);
        <Self as Custodian>::acknowledge(&env, &operator, &from, token_id)
    }
}

#[contractimpl]
impl BaseSwapTrait for NftSwap {
    /// The owner must have approved this contract for the token beforehand.
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
