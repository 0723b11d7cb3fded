//! Governance parameter updates

use crate::math::BPS_DENOM;
use crate::state::{Role, StakeVault};
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Bound the fraction a single slash may remove (slashing admin)
///
/// 100% is rejected outright: the rate recomputation must always keep a
/// nonzero backing to divide by.
pub fn process_set_max_slashable_percentage(
    vault: &mut StakeVault,
    caller: &Pubkey,
    bps: u64,
) -> Result<(), StakingError> {
    vault.roles.require(Role::SlashingAdmin, caller)?;
    if bps >= BPS_DENOM {
        return Err(StakingError::InvalidPercentage);
    }
    vault.max_slashable_bps = bps;
    Ok(())
}

/// Reconfigure the cooldown duration (cooldown admin)
pub fn process_set_cooldown_seconds(
    vault: &mut StakeVault,
    caller: &Pubkey,
    seconds: u64,
) -> Result<(), StakingError> {
    vault.roles.require(Role::CooldownAdmin, caller)?;
    vault.cooldown_seconds = seconds;
    Ok(())
}
