//! Settle a pending slash
//!
//! Clears the post-slashing flag: new slashes become possible again and
//! strict cooldown/window enforcement resumes on redemption.

use crate::state::{Role, StakeVault};
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Process a slash settlement by the slashing admin
pub fn process_settle_slashing(
    vault: &mut StakeVault,
    caller: &Pubkey,
) -> Result<(), StakingError> {
    vault.roles.require(Role::SlashingAdmin, caller)?;
    vault.post_slashing = false;
    Ok(())
}
