//! Claim rewards and redeem shares in one step
//!
//! Independent amounts; the union of both legs' preconditions is
//! checked up front so a failing redeem leg cannot leave a half-applied
//! claim behind.

use crate::cooldown::check_redeem_window;
use crate::instructions::{process_claim_rewards, process_redeem, ClaimReceipt, RedeemReceipt};
use crate::rewards::AccrualEngine;
use crate::state::{StakeVault, StakerAccount};
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Process a combined claim + redeem for the same staker
pub fn process_claim_rewards_and_redeem<E: AccrualEngine>(
    vault: &mut StakeVault,
    staker_key: &Pubkey,
    staker: &mut StakerAccount,
    engine: &mut E,
    now: u64,
    claim_amount: u64,
    redeem_amount: u64,
) -> Result<(ClaimReceipt, RedeemReceipt), StakingError> {
    if claim_amount == 0 || redeem_amount == 0 {
        return Err(StakingError::InvalidAmount);
    }
    if !vault.post_slashing {
        check_redeem_window(now, staker.cooldown_timestamp, &vault.cooldown_params())?;
    }

    let claim = process_claim_rewards(vault, staker_key, staker, engine, claim_amount)?;
    let redeem = process_redeem(vault, staker_key, staker, engine, now, redeem_amount)?;

    Ok((claim, redeem))
}
