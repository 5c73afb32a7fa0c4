use soroban_sdk::{Bytes, BytesN, Env};

use crate::types::Error;

pub fn digest(env: &Env, secret: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(secret).into()
}

pub fn only_valid_secret(env: &Env, secret: &Bytes, hash_key: &BytesN<32>) -> Result<(), Error> {
    if digest(env, secret) != *hash_key {
        return Err(Error::HashMismatch);
    }
    Ok(())
}
