//! Return funds to the pool
//!
//! Unprivileged: anyone may grow the backing (an insurance payout
//! refunding a slash being the expected caller). The rate is recomputed
//! from the grown backing before the pull is reported.

use crate::math::compute_exchange_rate;
use crate::state::StakeVault;
use model_safety::math::add_u64;
use palisade_common::StakingError;

/// Outcome of a fund return, consumed by the entrypoint for transfer +
/// events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnFundsReceipt {
    /// Underlying pulled from the contributor
    pub amount_returned: u64,
    /// Rate after the backing grew
    pub new_exchange_rate: u128,
}

/// Process a fund return from any contributor
pub fn process_return_funds(
    vault: &mut StakeVault,
    amount: u64,
) -> Result<ReturnFundsReceipt, StakingError> {
    if amount == 0 {
        return Err(StakingError::InvalidAmount);
    }
    // With no shares outstanding the recomputation would collapse the
    // rate to zero and brick every later conversion
    if vault.total_shares == 0 {
        return Err(StakingError::NothingStaked);
    }

    let backing = vault.backing()?;
    let new_exchange_rate =
        compute_exchange_rate(add_u64(backing, amount), vault.total_shares)?;

    vault.exchange_rate = new_exchange_rate;
    vault.asset_pool = add_u64(vault.asset_pool, amount);

    Ok(ReturnFundsReceipt {
        amount_returned: amount,
        new_exchange_rate,
    })
}
