//! Claim rewards and restake them in one step
//!
//! Only meaningful when the reward asset is the staked asset: the
//! claimed amount lands in the vault's own pool and is staked for the
//! recipient without a second transfer leg.

use crate::instructions::{process_claim_rewards, process_stake};
use crate::rewards::AccrualEngine;
use crate::state::{StakeVault, StakerAccount};
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Outcome of a claim-and-restake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimAndStakeReceipt {
    /// Rewards claimed into the vault
    pub amount_claimed: u64,
    /// Shares minted to the recipient
    pub shares_minted: u64,
    /// Rewards newly accrued for the claiming staker (accrual event)
    pub newly_accrued: u64,
}

/// Claim `from`'s rewards and stake them, either back onto `from`
/// (`to = None`) or onto a different recipient
///
/// Each staker binds its own engine view, so a distinct recipient comes
/// with a distinct engine. Preconditions of both legs are checked before
/// either mutates.
pub fn process_claim_rewards_and_stake<E: AccrualEngine>(
    vault: &mut StakeVault,
    from_key: &Pubkey,
    from_staker: &mut StakerAccount,
    from_engine: &mut E,
    to: Option<(&Pubkey, &mut StakerAccount, &mut E)>,
    now: u64,
    amount: u64,
) -> Result<ClaimAndStakeReceipt, StakingError> {
    if vault.reward_mint != vault.underlying_mint {
        return Err(StakingError::RewardAssetMismatch);
    }
    if vault.post_slashing {
        return Err(StakingError::SlashingInProgress);
    }
    if amount == 0 {
        return Err(StakingError::InvalidAmount);
    }

    let claim = process_claim_rewards(vault, from_key, from_staker, from_engine, amount)?;
    if claim.amount_claimed == 0 {
        return Err(StakingError::InvalidAmount);
    }

    let stake = match to {
        Some((to_key, to_staker, to_engine)) => process_stake(
            vault,
            to_key,
            to_staker,
            to_engine,
            now,
            claim.amount_claimed,
            false,
        )?,
        None => process_stake(
            vault,
            from_key,
            from_staker,
            from_engine,
            now,
            claim.amount_claimed,
            false,
        )?,
    };

    Ok(ClaimAndStakeReceipt {
        amount_claimed: claim.amount_claimed,
        shares_minted: stake.shares_minted,
        newly_accrued: claim.newly_accrued,
    })
}
