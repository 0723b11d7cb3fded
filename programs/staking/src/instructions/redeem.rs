//! Redeem shares for underlying
//!
//! Outside a post-slashing period redemption is only eligible inside
//! the cooldown-then-window interval; during one the gates drop so
//! stakers can exit against the already-devalued rate.

use crate::cooldown::check_redeem_window;
use crate::math;
use crate::rewards::{peek_or_commit, AccrualEngine};
use crate::state::{StakeVault, StakerAccount};
use model_safety::math::{min_u64, sub_u64};
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Outcome of a redeem, consumed by the entrypoint for transfer + events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedeemReceipt {
    /// Shares burned (requested amount clamped to the balance)
    pub shares_burned: u64,
    /// Underlying leaving the pool
    pub assets_released: u64,
    /// Rewards newly accrued for the staker (accrual event)
    pub newly_accrued: u64,
}

/// Process a redeem for `staker`
///
/// On-behalf authorization is the entrypoint's job and precedes this
/// call; the self path has no gate.
pub fn process_redeem<E: AccrualEngine>(
    vault: &mut StakeVault,
    staker_key: &Pubkey,
    staker: &mut StakerAccount,
    engine: &mut E,
    now: u64,
    amount: u64,
) -> Result<RedeemReceipt, StakingError> {
    if amount == 0 {
        return Err(StakingError::InvalidAmount);
    }
    if !vault.post_slashing {
        check_redeem_window(now, staker.cooldown_timestamp, &vault.cooldown_params())?;
    }

    let shares_burned = min_u64(amount, staker.share_balance);
    let assets_released = math::preview_redeem(shares_burned, vault.exchange_rate)?;

    // Commit rewards at the pre-burn balance
    let update = peek_or_commit(engine, staker_key, staker, vault.total_shares, true);

    staker.share_balance = sub_u64(staker.share_balance, shares_burned);
    if staker.share_balance == 0 {
        staker.cooldown_timestamp = 0;
    }
    vault.burn_shares(shares_burned);
    vault.asset_pool = sub_u64(vault.asset_pool, assets_released);

    Ok(RedeemReceipt {
        shares_burned,
        assets_released,
        newly_accrued: update.newly_accrued,
    })
}
