//! Pure state model of the staking vault
//!
//! Mirrors the program's accounting (exchange rate, share supply, asset
//! pool, slashing flags) without any account plumbing, small enough to
//! exhaustively exercise. Timing gates (cooldown/window) live in the
//! program's cooldown module; the model's redeem is unconditional, which
//! is the conservative case for the solvency invariants.

use arrayvec::ArrayVec;

/// Fixed-point scale of the exchange rate (1e18)
pub const RATE_UNIT: u128 = 1_000_000_000_000_000_000;

/// Basis-point denominator (10_000 = 100%)
pub const BPS_DENOM: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staker {
    pub shares: u64,
    pub cooldown_ts: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub max_slashable_bps: u64, // strictly < BPS_DENOM
    pub cooldown_seconds: u64,
    pub unstake_window: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    /// Shares-per-asset rate scaled by RATE_UNIT
    pub exchange_rate: u128,
    /// Physical underlying pool (includes rounding dust)
    pub pool: u64,
    /// Total share supply
    pub total_shares: u64,
    /// One unsettled slash at a time
    pub post_slashing: bool,
    pub params: Params,
    pub stakers: ArrayVec<Staker, 6>, // Small fixed bound for exhaustive runs
    /// For authorization-invariant checks: privileged transitions no-op
    /// when false
    pub admin_authorized: bool,
}

impl Default for Staker {
    fn default() -> Self {
        Self {
            shares: 0,
            cooldown_ts: 0,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_slashable_bps: 3_000,
            cooldown_seconds: 864_000,
            unstake_window: 172_800,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            exchange_rate: RATE_UNIT,
            pool: 0,
            total_shares: 0,
            post_slashing: false,
            params: Params::default(),
            stakers: ArrayVec::new(),
            admin_authorized: true,
        }
    }
}

impl State {
    /// Assets backing the share supply at the current rate (not the raw
    /// pool; the pool may hold rounding dust on top)
    pub fn backing(&self) -> u64 {
        preview_redeem_model(self.total_shares, self.exchange_rate)
    }
}

/// floor(shares * RATE_UNIT / rate), saturating on the impossible cases
pub fn preview_redeem_model(shares: u64, rate: u128) -> u64 {
    if rate == 0 {
        return 0;
    }
    let assets = (shares as u128).saturating_mul(RATE_UNIT) / rate;
    if assets > u64::MAX as u128 {
        u64::MAX
    } else {
        assets as u64
    }
}

/// floor(assets * rate / RATE_UNIT), saturating
pub fn preview_stake_model(assets: u64, rate: u128) -> u64 {
    let shares = match (assets as u128).checked_mul(rate) {
        Some(p) => p / RATE_UNIT,
        None => return u64::MAX,
    };
    if shares > u64::MAX as u128 {
        u64::MAX
    } else {
        shares as u64
    }
}

/// ceil(total_shares * RATE_UNIT / total_assets); None when assets == 0
pub fn compute_rate_model(total_assets: u64, total_shares: u64) -> Option<u128> {
    if total_assets == 0 {
        return None;
    }
    let num = (total_shares as u128)
        .saturating_mul(RATE_UNIT)
        .saturating_add(total_assets as u128 - 1);
    Some(num / total_assets as u128)
}
