//! Rewards bridge: the adapter between stake accounting and the
//! external reward-accrual engine
//!
//! The engine owns the emission schedule and the time-weighted index
//! math; this program only ever asks it one question - how much has this
//! staker accrued since the last snapshot - and folds the answer into
//! the staker's committed `rewards_to_claim` balance.

use crate::state::StakerAccount;
use pinocchio::pubkey::Pubkey;

/// External reward-accrual engine
///
/// `update_user` reports the rewards newly accrued for `staker` since
/// the previous call, weighted by the share balance held over that
/// span, and advances the engine's snapshot. The call itself never
/// fails; an engine with nothing to report returns zero.
pub trait AccrualEngine {
    fn update_user(&mut self, staker: &Pubkey, balance: u64, total_staked: u64) -> u64;
}

/// Result of refreshing a staker's reward state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardsUpdate {
    /// Committed balance plus everything newly accrued
    pub unclaimed_total: u64,
    /// The newly accrued portion alone (for the accrual event)
    pub newly_accrued: u64,
}

/// Refresh a staker's unclaimed rewards, optionally committing
///
/// With `commit` the recomputed total is persisted into the staker's
/// stored balance (stake/redeem paths, which are about to change the
/// share balance the engine weights by). Without it the total is only
/// returned; the claim paths overwrite storage with the post-claim
/// remainder themselves.
pub fn peek_or_commit<E: AccrualEngine>(
    engine: &mut E,
    staker_key: &Pubkey,
    staker: &mut StakerAccount,
    total_staked: u64,
    commit: bool,
) -> RewardsUpdate {
    let newly_accrued = engine.update_user(staker_key, staker.share_balance, total_staked);
    let unclaimed_total = staker.rewards_to_claim.saturating_add(newly_accrued);
    if commit && newly_accrued != 0 {
        staker.rewards_to_claim = unclaimed_total;
    }
    RewardsUpdate {
        unclaimed_total,
        newly_accrued,
    }
}

/// Size of the RewardMeter account: 64 bytes
pub const REWARD_METER_SIZE: usize = 64;

/// Reward meter published by the external accrual engine
///
/// The engine maintains one meter per staker with a monotonically
/// increasing cumulative total. This program never writes it; it diffs
/// the reading against the staker's consumed marker.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RewardMeter {
    /// Magic bytes for validation
    pub magic: u64,

    /// Version (currently 0)
    pub version: u8,

    /// Bump seed for PDA (engine-side derivation)
    pub bump: u8,

    /// Padding for alignment
    pub _padding: [u8; 6],

    /// Staker this meter accrues for
    pub staker: Pubkey,

    /// Cumulative rewards accrued since inception
    pub cumulative_accrued: u64,

    /// Last engine update timestamp
    pub last_update_ts: u64,
}

impl RewardMeter {
    pub const LEN: usize = core::mem::size_of::<Self>();

    /// Magic bytes for validation
    pub const MAGIC: &'static [u8; 8] = b"PLSDRMTR";

    /// Current version
    pub const VERSION: u8 = 0;

    /// Validate the meter account
    pub fn validate(&self) -> bool {
        self.magic == u64::from_le_bytes(*Self::MAGIC) && self.version == Self::VERSION
    }
}

/// Accrual engine view over one published meter reading
///
/// Holds plain copies so the caller can bind it alongside mutable state
/// borrows; the advanced `consumed` marker is written back to the staker
/// account after the instruction logic runs.
pub struct MeterEngine {
    cumulative: u64,
    pub consumed: u64,
}

impl MeterEngine {
    pub fn new(cumulative: u64, consumed: u64) -> Self {
        Self {
            cumulative,
            consumed,
        }
    }
}

impl AccrualEngine for MeterEngine {
    fn update_user(&mut self, _staker: &Pubkey, _balance: u64, _total_staked: u64) -> u64 {
        // The engine already weighted the accrual by balance when it
        // advanced the meter; here only the unconsumed delta remains
        let accrued = self.cumulative.saturating_sub(self.consumed);
        self.consumed = self.cumulative;
        accrued
    }
}
