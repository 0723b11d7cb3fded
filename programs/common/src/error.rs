//! Error codes shared by the staking program
//!
//! Every fault aborts the whole instruction with no partial state change.
//! Codes are stable: they surface as `ProgramError::Custom(code)` and are
//! matched by indexers and tests.

use pinocchio::program_error::ProgramError;

/// Staking program error codes
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingError {
    /// Instruction data missing, malformed, or unknown discriminator
    InvalidInstruction = 0,
    /// Account missing, wrong owner, wrong PDA, or bad flags
    InvalidAccount = 1,
    /// Account data shorter than the expected state layout
    AccountTooSmall = 2,
    /// Caller does not hold the role required for this operation
    Unauthorized = 3,
    /// Zero amount where a nonzero amount is required
    InvalidAmount = 4,
    /// Percentage at or above 100% (the bps denominator)
    InvalidPercentage = 5,
    /// A prior slash has not been settled yet
    SlashingInProgress = 6,
    /// No cooldown has been activated for this staker
    CooldownNotActive = 7,
    /// Cooldown period has not fully elapsed
    InsufficientCooldown = 8,
    /// The unstake window after the cooldown has already closed
    UnstakeWindowClosed = 9,
    /// Staker has no share balance
    NothingStaked = 10,
    /// Operation requires the reward asset to be the staked asset
    RewardAssetMismatch = 11,
    /// Exchange rate recomputation with zero total assets
    ZeroTotalAssets = 12,
    /// Intermediate fixed-point multiplication overflowed
    Overflow = 13,
}

impl From<StakingError> for ProgramError {
    fn from(e: StakingError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
