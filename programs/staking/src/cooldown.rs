//! Cooldown state machine
//!
//! Each staker carries a single `cooldown_timestamp`; zero means no
//! active cooldown. Redemption is only eligible inside the bounded
//! window that opens once the cooldown has fully elapsed. When a balance
//! increase lands on an account that is still cooling, the two
//! timestamps merge by balance weight, so progress can neither be
//! reset by dusting a victim nor gamed by splitting and recombining
//! balances.

use crate::state::StakerAccount;
use palisade_common::StakingError;

/// Cooldown/window configuration, read from the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownParams {
    pub cooldown_seconds: u64,
    pub unstake_window: u64,
}

/// Eligibility phase of one staker's cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownPhase {
    /// No cooldown activated (timestamp is zero)
    Idle,
    /// Cooldown running, redemption not yet eligible
    Cooling,
    /// Cooldown elapsed, inside the unstake window
    Redeemable,
    /// Window passed; stale timestamp retained until the next mutation
    Expired,
}

/// Classify `ts` relative to `now`
pub fn phase(now: u64, ts: u64, params: &CooldownParams) -> CooldownPhase {
    if ts == 0 {
        return CooldownPhase::Idle;
    }
    let cooldown_end = ts.saturating_add(params.cooldown_seconds);
    if now <= cooldown_end {
        return CooldownPhase::Cooling;
    }
    if now - cooldown_end <= params.unstake_window {
        CooldownPhase::Redeemable
    } else {
        CooldownPhase::Expired
    }
}

/// Require that `ts` permits redemption at `now`
pub fn check_redeem_window(now: u64, ts: u64, params: &CooldownParams) -> Result<(), StakingError> {
    match phase(now, ts, params) {
        CooldownPhase::Redeemable => Ok(()),
        CooldownPhase::Idle => Err(StakingError::CooldownNotActive),
        CooldownPhase::Cooling => Err(StakingError::InsufficientCooldown),
        CooldownPhase::Expired => Err(StakingError::UnstakeWindowClosed),
    }
}

/// Next cooldown timestamp for a recipient about to receive
/// `amount_in` shares carrying cooldown progress `from_ts`
///
/// Rules, in order:
/// - a recipient with no cooldown stays at zero (activation is explicit);
/// - a fully expired recipient cooldown resets to zero;
/// - incoming progress older than the recipient's keeps the recipient's
///   timestamp (the already-more-progressed cooldown wins);
/// - otherwise the timestamps merge by balance weight, rounded down.
///
/// Self-stakes pass `from_ts = now`; share transfers pass the sender's
/// current timestamp so progress travels with the balance.
pub fn next_cooldown_timestamp(
    now: u64,
    from_ts: u64,
    amount_in: u64,
    to_ts: u64,
    to_balance: u64,
    params: &CooldownParams,
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

    let num =
        (amount_in as u128) * (adjusted_from as u128) + (to_balance as u128) * (to_ts as u128);
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

/// Cooldown bookkeeping for a share transfer between two stakers
///
/// Called by the ledger's transfer path with the pre-transfer balances
/// still in place: the recipient merges the sender's progress in, and a
/// sender emptied to zero loses its timestamp. Balance movement itself
/// stays with the ledger.
pub fn on_shares_transferred(
    now: u64,
    amount: u64,
    sender: &mut StakerAccount,
    recipient: &mut StakerAccount,
    params: &CooldownParams,
) {
    if sender.owner == recipient.owner {
        return;
    }

    recipient.cooldown_timestamp = next_cooldown_timestamp(
        now,
        sender.cooldown_timestamp,
        amount,
        recipient.cooldown_timestamp,
        recipient.share_balance,
        params,
    );

    if sender.share_balance == amount {
        sender.cooldown_timestamp = 0;
    }
}
