//! Claim accrued rewards
//!
//! The unclaimed total is refreshed without committing, the claimed
//! portion is paid out (by the entrypoint, in reward asset), and the
//! remainder becomes the new committed balance.

use crate::rewards::{peek_or_commit, AccrualEngine};
use crate::state::{StakeVault, StakerAccount};
use model_safety::math::min_u64;
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Outcome of a claim, consumed by the entrypoint for transfer + events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Reward asset to pay out (requested amount clamped to unclaimed)
    pub amount_claimed: u64,
    /// Rewards newly accrued (accrual event)
    pub newly_accrued: u64,
}

/// Process a rewards claim for `staker`
///
/// Pass `u64::MAX` to claim everything. On-behalf authorization is the
/// entrypoint's job and precedes this call.
pub fn process_claim_rewards<E: AccrualEngine>(
    vault: &StakeVault,
    staker_key: &Pubkey,
    staker: &mut StakerAccount,
    engine: &mut E,
    amount: u64,
) -> Result<ClaimReceipt, StakingError> {
    if amount == 0 {
        return Err(StakingError::InvalidAmount);
    }

    let update = peek_or_commit(engine, staker_key, staker, vault.total_shares, false);
    let amount_claimed = min_u64(amount, update.unclaimed_total);
    staker.rewards_to_claim = update.unclaimed_total.saturating_sub(amount_claimed);

    Ok(ClaimReceipt {
        amount_claimed,
        newly_accrued: update.newly_accrued,
    })
}
