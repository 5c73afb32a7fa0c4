use soroban_sdk::Env;

use crate::types::Error;

/// Extra window granted to the side that deposits first.
pub const ONE_DAY: u64 = 86_400;

/// Absolute deadline for a deposit made against `base_deadline`.
///
/// The initiating side keeps its asset locked one day longer than the
/// matching contract on the other ledger, so a secret revealed there near
/// the end of that window can still be replayed here.
pub fn deadline_for(base_deadline: u64, is_initiator_side: bool) -> Result<u64, Error> {
    if !is_initiator_side {
        return Ok(base_deadline);
    }
    base_deadline
        .checked_add(ONE_DAY)
        .ok_or(Error::DeadlineOverflow)
}

/// Passes only strictly after `deadline`.
pub fn only_after_deadline(env: &Env, deadline: u64) -> Result<(), Error> {
    if env.ledger().timestamp() <= deadline {
        return Err(Error::NotYetExpired);
    }
    Ok(())
}
