//! Invariant predicates over the model state
//!
//! Checked after every transition in tests; each maps to a property the
//! program must preserve.

use crate::state::*;

/// The exchange rate never reaches zero
pub fn rate_positive(s: &State) -> bool {
    s.exchange_rate > 0
}

/// Backing assets never exceed the physical pool: every share can be
/// redeemed at the current rate without draining someone else's payout
pub fn solvent(s: &State) -> bool {
    s.backing() <= s.pool
}

/// Per-staker share balances sum to the total supply
pub fn shares_consistent(s: &State) -> bool {
    let mut sum: u64 = 0;
    for staker in &s.stakers {
        sum = sum.saturating_add(staker.shares);
    }
    sum == s.total_shares
}

/// The slashable fraction stays strictly below 100%
pub fn slash_cap_strict(s: &State) -> bool {
    s.params.max_slashable_bps < BPS_DENOM
}

/// All invariants at once
pub fn invariants_hold(s: &State) -> bool {
    rate_positive(s) && solvent(s) && shares_consistent(s) && slash_cap_strict(s)
}
