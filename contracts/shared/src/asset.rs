use soroban_sdk::{contractclient, contracttype, log, token, Address, Env};

use crate::types::Error;

/// Acknowledgment a contract returns when it accepts an inbound
/// non-fungible transfer.
pub const NFT_RECEIVED: u32 = 0x150b_7a02;

/// Identifier-based ledger consumed by the non-fungible adapter.
///
/// The adapter itself only calls `transfer_from`. `owner_of` and
/// `safe_transfer_from` complete the surface a ledger exposes (see
/// `testutils::TestNft`) and are used to deliver into a swap from outside.
#[contractclient(name = "NftClient")]
pub trait NonFungibleLedger {
    fn owner_of(env: Env, token_id: u32) -> Address;
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
    /// Like `transfer_from`, but requires `to` to answer `on_nft_received`
    /// with `NFT_RECEIVED`.
    fn safe_transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Inbound-transfer acceptance capability of the contract holding custody.
///
/// The default refuses every token. A ledger cannot call back into the
/// instance while it is pulling, so the adapter asks the custodian type
/// directly before taking a non-fungible asset.
pub trait Custodian {
    fn acknowledge(_env: &Env, _operator: &Address, _from: &Address, _token_id: u32) -> u32 {
        0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FungibleAsset {
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonFungibleAsset {
    pub collection: Address,
    pub token_id: u32,
}

/// Asset held by one swap instance. The variant is fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Fungible(FungibleAsset),
    NonFungible(NonFungibleAsset),
}

impl Asset {
    /// Moves the asset from `from` into the current contract's custody.
    pub fn pull<C: Custodian>(&self, env: &Env, from: &Address) -> Result<(), Error> {
        match self {
            Asset::Fungible(asset) => asset.pull(env, from),
            Asset::NonFungible(asset) => asset.pull::<C>(env, from),
        }
    }

    /// Moves everything held by the current contract to `to`.
    pub fn push(&self, env: &Env, to: &Address) -> Result<(), Error> {
        match self {
            Asset::Fungible(asset) => asset.push(env, to),
            Asset::NonFungible(asset) => asset.push(env, to),
        }
    }
}

impl FungibleAsset {
    // Relies on an allowance granted by `from` to this contract beforehand.
    fn pull(&self, env: &Env, from: &Address) -> Result<(), Error> {
        let this = env.current_contract_address();
        let client = token::TokenClient::new(env, &self.token);
        match client.try_transfer_from(&this, from, &this, &self.amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "fungible pull of {} from {} failed", self.amount, from.clone());
                Err(Error::TransferFailed)
            }
        }
    }

    // Sends the live balance, not the deposited amount.
    fn push(&self, env: &Env, to: &Address) -> Result<(), Error> {
        let this = env.current_contract_address();
        let client = token::TokenClient::new(env, &self.token);
        let balance = match client.try_balance(&this) {
            Ok(Ok(balance)) => balance,
            _ => {
                log!(env, "balance query on {} failed", self.token.clone());
                return Err(Error::TransferFailed);
            }
        };
        match client.try_transfer(&this, to, &balance) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "fungible push of {} to {} failed", balance, to.clone());
                Err(Error::TransferFailed)
            }
        }
    }
}

impl NonFungibleAsset {
    fn pull<C: Custodian>(&self, env: &Env, from: &Address) -> Result<(), Error> {
        let this = env.current_contract_address();
        if C::acknowledge(env, &this, from, self.token_id) != NFT_RECEIVED {
            log!(env, "custodian does not accept token {}", self.token_id);
            return Err(Error::TransferFailed);
        }
        let client = NftClient::new(env, &self.collection);
        match client.try_transfer_from(&this, from, &this, &self.token_id) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "pull of token {} from {} failed", self.token_id, from.clone());
                Err(Error::TransferFailed)
            }
        }
    }

    fn push(&self, env: &Env, to: &Address) -> Result<(), Error> {
        let this = env.current_contract_address();
        let client = NftClient::new(env, &self.collection);
        match client.try_transfer_from(&this, &this, to, &self.token_id) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "push of token {} to {} failed", self.token_id, to.clone());
                Err(Error::TransferFailed)
            }
        }
    }
}
