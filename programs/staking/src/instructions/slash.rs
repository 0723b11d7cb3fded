//! Slash pooled assets to cover an external loss event
//!
//! The removable amount is capped at the configured fraction of the
//! assets backing the share supply. The rate is recomputed from the
//! shrunken backing in the same step that the transfer is reported, so
//! no staker can redeem at the pre-slash rate once the slash is
//! recorded. One slash may be pending at a time.

use crate::math::compute_exchange_rate;
use crate::state::{Role, StakeVault};
use model_safety::math::{min_u64, sub_u64};
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Outcome of a slash, consumed by the entrypoint for transfer + events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashReceipt {
    /// Underlying actually removed (requested amount after the cap)
    pub amount_slashed: u64,
    /// Rate after the backing shrank
    pub new_exchange_rate: u128,
}

/// Process a slash requested by the slashing admin
pub fn process_slash(
    vault: &mut StakeVault,
    caller: &Pubkey,
    requested: u64,
) -> Result<SlashReceipt, StakingError> {
    vault.roles.require(Role::SlashingAdmin, caller)?;

    if vault.post_slashing {
        return Err(StakingError::SlashingInProgress);
    }
    if requested == 0 {
        return Err(StakingError::InvalidAmount);
    }

    let backing = vault.backing()?;
    let amount_slashed = min_u64(requested, vault.max_slashable()?);

    let new_exchange_rate =
        compute_exchange_rate(sub_u64(backing, amount_slashed), vault.total_shares)?;

    vault.post_slashing = true;
    vault.exchange_rate = new_exchange_rate;
    vault.asset_pool = sub_u64(vault.asset_pool, amount_slashed);

    Ok(SlashReceipt {
        amount_slashed,
        new_exchange_rate,
    })
}
