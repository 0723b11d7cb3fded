//! State transition functions - all total, no panics
//!
//! Each transition returns the (possibly unchanged) next state. Invalid
//! inputs leave the state untouched rather than failing, so arbitrary
//! transition sequences can be replayed against the invariants.

use crate::math::*;
use crate::state::*;

/// Stake `amount` of underlying for staker `uid`
pub fn stake(mut s: State, uid: usize, amount: u64, now: u64) -> State {
    if uid >= s.stakers.len() || amount == 0 || s.post_slashing {
        return s;
    }

    let minted = preview_stake_model(amount, s.exchange_rate);

    s.stakers[uid].cooldown_ts = merge_cooldown(
        now,
        now,
        amount,
        s.stakers[uid].cooldown_ts,
        s.stakers[uid].shares,
        &s.params,
    );
    s.stakers[uid].shares = add_u64(s.stakers[uid].shares, minted);
    s.total_shares = add_u64(s.total_shares, minted);
    s.pool = add_u64(s.pool, amount);

    s
}

/// Start a cooldown for staker `uid`
pub fn activate_cooldown(mut s: State, uid: usize, now: u64) -> State {
    if uid >= s.stakers.len() || s.stakers[uid].shares == 0 {
        return s;
    }
    s.stakers[uid].cooldown_ts = now;
    s
}

/// Redeem up to `amount` shares for staker `uid` (timing gates elided)
pub fn redeem(mut s: State, uid: usize, amount: u64) -> State {
    if uid >= s.stakers.len() || amount == 0 {
        return s;
    }

    let burned = min_u64(amount, s.stakers[uid].shares);
    if burned == 0 {
        return s;
    }
    let payout = preview_redeem_model(burned, s.exchange_rate);

    s.stakers[uid].shares = sub_u64(s.stakers[uid].shares, burned);
    if s.stakers[uid].shares == 0 {
        s.stakers[uid].cooldown_ts = 0;
    }
    s.total_shares = sub_u64(s.total_shares, burned);
    s.pool = sub_u64(s.pool, payout);

    s
}

/// Slash up to the configured fraction of the backing assets
pub fn slash(mut s: State, requested: u64) -> State {
    if !s.admin_authorized || s.post_slashing || requested == 0 {
        return s;
    }

    let backing = s.backing();
    let cap = match mul_div_floor(backing as u128, s.params.max_slashable_bps as u128, BPS_DENOM as u128) {
        Some(c) => {
            if c > u64::MAX as u128 {
                u64::MAX
            } else {
                c as u64
            }
        }
        None => return s,
    };
    let actual = min_u64(requested, cap);
    if actual == 0 {
        return s;
    }

    let rate = match compute_rate_model(sub_u64(backing, actual), s.total_shares) {
        Some(r) => r,
        None => return s,
    };

    s.post_slashing = true;
    s.exchange_rate = rate;
    s.pool = sub_u64(s.pool, actual);

    s
}

/// Return funds to the pool, growing share value
///
/// No-op with zero shares outstanding: the rate recomputation would
/// collapse to zero and brick every later conversion.
pub fn return_funds(mut s: State, amount: u64) -> State {
    if amount == 0 || s.total_shares == 0 {
        return s;
    }

    let backing = s.backing();
    let rate = match compute_rate_model(add_u64(backing, amount), s.total_shares) {
        Some(r) => r,
        None => return s,
    };

    s.exchange_rate = rate;
    s.pool = add_u64(s.pool, amount);

    s
}

/// Settle the pending slash, re-enabling new slashes
pub fn settle_slashing(mut s: State) -> State {
    if !s.admin_authorized {
        return s;
    }
    s.post_slashing = false;
    s
}

/// The cooldown merge rule, shared with the program semantics
///
/// Returns the recipient's next cooldown timestamp when `amount_in`
/// arrives with cooldown progress `from_ts`.
pub fn merge_cooldown(
    now: u64,
    from_ts: u64,
    amount_in: u64,
    to_ts: u64,
    to_balance: u64,
    params: &Params,
) -> u64 {
    if to_ts == 0 {
        return 0;
    }
    let min_valid = now
        .saturating_sub(params.cooldown_seconds)
        .saturating_sub(params.unstake_window);
    if min_valid > to_ts {
        return 0;
    }
    let adjusted_from = if min_valid > from_ts { now } else { from_ts };
    if adjusted_from < to_ts {
        return to_ts;
    }
    let num = (amount_in as u128) * (adjusted_from as u128) + (to_balance as u128) * (to_ts as u128);
    let den = (amount_in as u128) + (to_balance as u128);
    if den == 0 {
        return to_ts;
    }
    let merged = num / den;
    if merged > u64::MAX as u128 {
        u64::MAX
    } else {
        merged as u64
    }
}
