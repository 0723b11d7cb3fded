//! Activate a redemption cooldown
//!
//! Staking never starts a cooldown by itself; a staker opts in here and
//! the unstake window opens once the configured duration elapses.

use crate::state::StakerAccount;
use palisade_common::StakingError;

/// Process a cooldown activation for the calling staker
pub fn process_activate_cooldown(
    staker: &mut StakerAccount,
    now: u64,
) -> Result<u64, StakingError> {
    if staker.share_balance == 0 {
        return Err(StakingError::NothingStaked);
    }
    staker.cooldown_timestamp = now;
    Ok(now)
}
