//! Stake underlying into the vault
//!
//! Order matters: rewards are committed at the pre-stake balance, the
//! cooldown merges before the balance grows, shares are minted at the
//! current rate, and only then does the asset pull happen (reported via
//! the receipt, executed by the entrypoint), so a reentrant observer of
//! the transfer sees fully consistent internal state.

use crate::cooldown::next_cooldown_timestamp;
use crate::math;
use crate::rewards::{peek_or_commit, AccrualEngine};
use crate::state::{StakeVault, StakerAccount};
use model_safety::math::add_u64;
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Outcome of a stake, consumed by the entrypoint for transfer + events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeReceipt {
    /// Shares minted to the recipient
    pub shares_minted: u64,
    /// Underlying entering the pool
    pub assets_staked: u64,
    /// Rewards newly accrued for the recipient (accrual event)
    pub newly_accrued: u64,
    /// Whether the underlying must be pulled from the funder (false
    /// when the assets arrive via a rewards claim)
    pub pull_funds: bool,
}

/// Process a stake for `staker` (the recipient of the shares)
pub fn process_stake<E: AccrualEngine>(
    vault: &mut StakeVault,
    staker_key: &Pubkey,
    staker: &mut StakerAccount,
    engine: &mut E,
    now: u64,
    amount: u64,
    pull_funds: bool,
) -> Result<StakeReceipt, StakingError> {
    if vault.post_slashing {
        return Err(StakingError::SlashingInProgress);
    }
    if amount == 0 {
        return Err(StakingError::InvalidAmount);
    }

    let shares_minted = math::preview_stake(amount, vault.exchange_rate)?;

    // Commit rewards at the pre-stake balance
    let update = peek_or_commit(engine, staker_key, staker, vault.total_shares, true);

    // Merge the cooldown before the balance grows; a fresh stake carries
    // progress `now`
    staker.cooldown_timestamp = next_cooldown_timestamp(
        now,
        now,
        amount,
        staker.cooldown_timestamp,
        staker.share_balance,
        &vault.cooldown_params(),
    );

    staker.share_balance = add_u64(staker.share_balance, shares_minted);
    vault.mint_shares(shares_minted);
    vault.asset_pool = add_u64(vault.asset_pool, amount);

    Ok(StakeReceipt {
        shares_minted,
        assets_staked: amount,
        newly_accrued: update.newly_accrued,
        pull_funds,
    })
}
