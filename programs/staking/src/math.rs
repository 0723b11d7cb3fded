//! Exchange-rate fixed-point math
//!
//! The rate is the shares-per-asset ratio scaled by 1e18. Rounding is
//! directional and deliberate: the rate rounds up, both previews round
//! down, so every conversion favors the pool's solvency over the staker.

use model_safety::math::{mul_div_ceil, mul_div_floor};
use palisade_common::StakingError;

/// Fixed-point scale of the exchange rate (1e18)
pub const EXCHANGE_RATE_UNIT: u128 = 1_000_000_000_000_000_000;

/// Rate seeded at initialization: one share per asset
pub const INITIAL_EXCHANGE_RATE: u128 = EXCHANGE_RATE_UNIT;

/// Basis-point denominator (10_000 bps = 100%)
pub const BPS_DENOM: u64 = 10_000;

/// Shares minted for `assets` at `rate`: floor(assets * rate / UNIT)
pub fn preview_stake(assets: u64, rate: u128) -> Result<u64, StakingError> {
    let shares =
        mul_div_floor(assets as u128, rate, EXCHANGE_RATE_UNIT).ok_or(StakingError::Overflow)?;
    u64::try_from(shares).map_err(|_| StakingError::Overflow)
}

/// Assets released for `shares` at `rate`: floor(shares * UNIT / rate)
pub fn preview_redeem(shares: u64, rate: u128) -> Result<u64, StakingError> {
    let assets =
        mul_div_floor(shares as u128, EXCHANGE_RATE_UNIT, rate).ok_or(StakingError::Overflow)?;
    u64::try_from(assets).map_err(|_| StakingError::Overflow)
}

/// Recompute the rate from a (total_assets, total_shares) pair:
/// ceil(total_shares * UNIT / total_assets)
///
/// Fails with `ZeroTotalAssets` when the pool has been reduced to
/// nothing; there is no recovery path past that point.
pub fn compute_exchange_rate(total_assets: u64, total_shares: u64) -> Result<u128, StakingError> {
    if total_assets == 0 {
        return Err(StakingError::ZeroTotalAssets);
    }
    mul_div_ceil(
        total_shares as u128,
        EXCHANGE_RATE_UNIT,
        total_assets as u128,
    )
    .ok_or(StakingError::Overflow)
}

/// Upper bound of a single slash: floor(backing * max_bps / 10_000)
pub fn max_slashable(backing: u64, max_bps: u64) -> Result<u64, StakingError> {
    let cap = mul_div_floor(backing as u128, max_bps as u128, BPS_DENOM as u128)
        .ok_or(StakingError::Overflow)?;
    u64::try_from(cap).map_err(|_| StakingError::Overflow)
}
