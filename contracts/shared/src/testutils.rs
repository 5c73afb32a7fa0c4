//! A minimal identifier-based ledger for exercising the non-fungible adapter.

use soroban_sdk::{contract, contractimpl, contracttype, vec, Address, Env, IntoVal, Symbol};

use crate::asset::{NonFungibleLedger, NFT_RECEIVED};

#[contracttype]
pub enum NftKey {
    Owner(u32),
    Approved(u32),
}

#[contract]
pub struct TestNft;

#[contractimpl]
impl TestNft {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        if env.storage().persistent().has(&NftKey::Owner(token_id)) {
            panic!("token already minted");
        }
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }

    pub fn approve(env: Env, owner: Address, spender: Address, token_id: u32) {
        owner.require_auth();
        if Self::owner_of(env.clone(), token_id) != owner {
            panic!("not the token owner");
        }
        env.storage()
            .persistent()
            .set(&NftKey::Approved(token_id), &spender);
    }

    pub fn approved(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&NftKey::Approved(token_id))
    }

    fn move_token(env: &Env, spender: &Address, from: &Address, to: &Address, token_id: u32) {
        spender.require_auth();
        let owner: Address = env
            .storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .unwrap_or_else(|| panic!("unknown token"));
        if owner != *from {
            panic!("from is not the token owner");
        }
        if spender != from && Self::approved(env.clone(), token_id).as_ref() != Some(spender) {
            panic!("spender not approved");
        }
        env.storage()
            .persistent()
            .remove(&NftKey::Approved(token_id));
        env.storage().persistent().set(&NftKey::Owner(token_id), to);
    }
}

#[contractimpl]
impl NonFungibleLedger for TestNft {
    fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .unwrap_or_else(|| panic!("unknown token"))
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        Self::move_token(&env, &spender, &from, &to, token_id);
    }

    // `to` must be a contract.
    fn safe_transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        Self::move_token(&env, &spender, &from, &to, token_id);
        let ack: u32 = env.invoke_contract(
            &to,
            &Symbol::new(&env, "on_nft_received"),
            vec![
                &env,
                spender.into_val(&env),
                from.into_val(&env),
                token_id.into_val(&env),
            ],
        );
        if ack != NFT_RECEIVED {
            panic!("recipient rejected token");
        }
    }
}
