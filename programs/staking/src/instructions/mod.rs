/// Staking instruction handlers
pub mod activate_cooldown;
pub mod claim_rewards;
pub mod claim_rewards_and_redeem;
pub mod claim_rewards_and_stake;
pub mod configure;
pub mod initialize;
pub mod redeem;
pub mod return_funds;
pub mod settle_slashing;
pub mod slash;
pub mod stake;

pub use activate_cooldown::*;
pub use claim_rewards::*;
pub use claim_rewards_and_redeem::*;
pub use claim_rewards_and_stake::*;
pub use configure::*;
pub use initialize::*;
pub use redeem::*;
pub use return_funds::*;
pub use settle_slashing::*;
pub use slash::*;
pub use stake::*;

/// Instruction discriminator
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingInstruction {
    /// Initialize the vault singleton
    Initialize = 0,
    /// Initialize a per-staker account
    InitializeStaker = 1,
    /// Stake underlying, minting shares at the current rate
    Stake = 2,
    /// Stake with a permit-verified asset pull
    StakeWithPermit = 3,
    /// Start the caller's redemption cooldown
    ActivateCooldown = 4,
    /// Redeem shares for underlying inside the unstake window
    Redeem = 5,
    /// Redeem for another staker (claim helper only)
    RedeemOnBehalf = 6,
    /// Claim accrued rewards
    ClaimRewards = 7,
    /// Claim rewards for another staker (claim helper only)
    ClaimRewardsOnBehalf = 8,
    /// Claim rewards and restake them in one step
    ClaimRewardsAndStake = 9,
    /// Claim-and-restake for another staker (claim helper only)
    ClaimRewardsAndStakeOnBehalf = 10,
    /// Claim rewards and redeem shares in one step
    ClaimRewardsAndRedeem = 11,
    /// Claim-and-redeem for another staker (claim helper only)
    ClaimRewardsAndRedeemOnBehalf = 12,
    /// Remove pooled assets to cover a loss event (slashing admin)
    Slash = 13,
    /// Return previously slashed funds to the pool
    ReturnFunds = 14,
    /// Settle the pending slash (slashing admin)
    SettleSlashing = 15,
    /// Bound the slashable fraction (slashing admin)
    SetMaxSlashablePercentage = 16,
    /// Reconfigure the cooldown duration (cooldown admin)
    SetCooldownSeconds = 17,
}

// Note: Instruction dispatching is handled in entrypoint.rs
// The functions in this module are called from the entrypoint after
// account deserialization and validation.
