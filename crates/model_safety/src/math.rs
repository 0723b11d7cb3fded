//! Safe arithmetic helpers - no unwrap, no panics, no as casts
//!
//! Saturating helpers for balance bookkeeping, checked mul-div with an
//! explicit rounding direction for the fixed-point exchange-rate math.

/// Add u64 with saturation at MAX
pub fn add_u64(a: u64, b: u64) -> u64 {
    a.saturating_add(b)
}

/// Subtract u64 with saturation at 0
pub fn sub_u64(a: u64, b: u64) -> u64 {
    a.saturating_sub(b)
}

/// Add u128 with saturation at MAX
pub fn add_u128(a: u128, b: u128) -> u128 {
    a.saturating_add(b)
}

/// Subtract u128 with saturation at 0
pub fn sub_u128(a: u128, b: u128) -> u128 {
    a.saturating_sub(b)
}

/// Minimum of two u64
pub fn min_u64(a: u64, b: u64) -> u64 {
    if a < b {
        a
    } else {
        b
    }
}

/// Maximum of two u64
pub fn max_u64(a: u64, b: u64) -> u64 {
    if a > b {
        a
    } else {
        b
    }
}

/// floor(a * b / d); None on overflow or d == 0
///
/// Rounds toward zero, which is the direction that favors the pool in
/// every preview conversion.
pub fn mul_div_floor(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    a.checked_mul(b).map(|p| p / d)
}

/// ceil(a * b / d); None on overflow or d == 0
///
/// The `+ (d - 1)` bias before the division is the upward rounding used
/// by the exchange-rate recomputation.
pub fn mul_div_ceil(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    a.checked_mul(b)?.checked_add(d - 1).map(|p| p / d)
}
