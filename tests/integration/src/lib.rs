//! Test harness for the staking vault
//!
//! Drives the program's instruction handlers against in-memory state,
//! with an index-based emission engine standing in for the external
//! accrual engine (per-share index advanced on every touch, the way a
//! real distribution manager works). The `World` methods replicate the
//! entrypoint's orchestration - authorization first, then the handler -
//! so scenario tests exercise the same sequencing as the program.

use std::collections::HashMap;

use palisade_common::StakingError;
use palisade_staking::cooldown::CooldownPhase;
use palisade_staking::instructions::{
    process_activate_cooldown, process_claim_rewards, process_claim_rewards_and_redeem,
    process_claim_rewards_and_stake, process_redeem, process_return_funds,
    process_set_cooldown_seconds, process_set_max_slashable_percentage, process_settle_slashing,
    process_slash, process_stake, ClaimAndStakeReceipt, ClaimReceipt, RedeemReceipt,
    ReturnFundsReceipt, SlashReceipt, StakeReceipt,
};
use palisade_staking::rewards::AccrualEngine;
use palisade_staking::state::{Role, RoleBook, StakeVault, StakerAccount};
use palisade_staking::{cooldown, math};

pub type Pubkey = [u8; 32];

pub const SLASHING_ADMIN: Pubkey = [0xA1; 32];
pub const COOLDOWN_ADMIN: Pubkey = [0xA2; 32];
pub const CLAIM_HELPER: Pubkey = [0xA3; 32];
pub const UNDERLYING: Pubkey = [0xB1; 32];
pub const CONTROLLER: Pubkey = [0xB2; 32];

const INDEX_UNIT: u128 = 1_000_000_000_000_000_000;

#[derive(Default)]
struct UserSnapshot {
    index: u128,
}

/// Index-based emission engine: a fixed emission per second spread over
/// the staked supply, accrued per staker on touch
pub struct EmissionEngine {
    pub emission_per_second: u64,
    pub now: u64,
    global_index: u128,
    last_ts: u64,
    snapshots: HashMap<Pubkey, UserSnapshot>,
}

impl EmissionEngine {
    pub fn new(emission_per_second: u64) -> Self {
        Self {
            emission_per_second,
            now: 0,
            global_index: 0,
            last_ts: 0,
            snapshots: HashMap::new(),
        }
    }
}

impl AccrualEngine for EmissionEngine {
    fn update_user(&mut self, staker: &Pubkey, balance: u64, total_staked: u64) -> u64 {
        // Advance the global per-share index
        let elapsed = self.now.saturating_sub(self.last_ts);
        if elapsed > 0 && total_staked > 0 {
            let emitted = (self.emission_per_second as u128) * (elapsed as u128);
            self.global_index += emitted * INDEX_UNIT / (total_staked as u128);
        }
        self.last_ts = self.now;

        // Accrue the staker against its snapshot
        let snapshot = self.snapshots.entry(*staker).or_default();
        let accrued = (balance as u128) * (self.global_index - snapshot.index) / INDEX_UNIT;
        snapshot.index = self.global_index;
        accrued as u64
    }
}

/// One vault plus its stakers and the emission engine
pub struct World {
    pub vault: StakeVault,
    pub stakers: HashMap<Pubkey, StakerAccount>,
    pub engine: EmissionEngine,
    pub now: u64,
}

impl World {
    /// Vault at the 1:1 rate; 50% slash cap, 1_000s cooldown, 200s window
    pub fn new() -> Self {
        Self::with_emission(0)
    }

    pub fn with_emission(emission_per_second: u64) -> Self {
        Self {
            vault: StakeVault::new(
                UNDERLYING,
                UNDERLYING,
                CONTROLLER,
                RoleBook::new(SLASHING_ADMIN, COOLDOWN_ADMIN, CLAIM_HELPER),
                5_000,
                1_000,
                200,
            )
            .expect("valid vault params"),
            stakers: HashMap::new(),
            engine: EmissionEngine::new(emission_per_second),
            now: 0,
        }
    }

    pub fn warp_to(&mut self, now: u64) {
        self.now = now;
        self.engine.now = now;
    }

    pub fn staker(&mut self, key: Pubkey) -> &mut StakerAccount {
        self.stakers
            .entry(key)
            .or_insert_with(|| StakerAccount::new(key, 0))
    }

    pub fn balance_of(&self, key: &Pubkey) -> u64 {
        self.stakers.get(key).map_or(0, |s| s.share_balance)
    }

    pub fn phase_of(&self, key: &Pubkey) -> CooldownPhase {
        let ts = self.stakers.get(key).map_or(0, |s| s.cooldown_timestamp);
        cooldown::phase(self.now, ts, &self.vault.cooldown_params())
    }

    pub fn stake(&mut self, who: Pubkey, amount: u64) -> Result<StakeReceipt, StakingError> {
        let now = self.now;
        let staker = self
            .stakers
            .entry(who)
            .or_insert_with(|| StakerAccount::new(who, 0));
        process_stake(
            &mut self.vault,
            &who,
            staker,
            &mut self.engine,
            now,
            amount,
            true,
        )
    }

    pub fn activate_cooldown(&mut self, who: Pubkey) -> Result<u64, StakingError> {
        let now = self.now;
        let staker = self.staker(who);
        process_activate_cooldown(staker, now)
    }

    pub fn redeem(&mut self, who: Pubkey, amount: u64) -> Result<RedeemReceipt, StakingError> {
        let now = self.now;
        let staker = self
            .stakers
            .entry(who)
            .or_insert_with(|| StakerAccount::new(who, 0));
        process_redeem(&mut self.vault, &who, staker, &mut self.engine, now, amount)
    }

    /// Entrypoint sequencing: the helper role gates before the handler
    pub fn redeem_on_behalf(
        &mut self,
        caller: Pubkey,
        who: Pubkey,
        amount: u64,
    ) -> Result<RedeemReceipt, StakingError> {
        self.vault.roles.require(Role::ClaimHelper, &caller)?;
        self.redeem(who, amount)
    }

    pub fn claim_rewards(
        &mut self,
        who: Pubkey,
        amount: u64,
    ) -> Result<ClaimReceipt, StakingError> {
        let staker = self
            .stakers
            .entry(who)
            .or_insert_with(|| StakerAccount::new(who, 0));
        process_claim_rewards(&self.vault, &who, staker, &mut self.engine, amount)
    }

    pub fn claim_rewards_on_behalf(
        &mut self,
        caller: Pubkey,
        who: Pubkey,
        amount: u64,
    ) -> Result<ClaimReceipt, StakingError> {
        self.vault.roles.require(Role::ClaimHelper, &caller)?;
        self.claim_rewards(who, amount)
    }

    /// Claim-and-restake onto the claiming staker
    pub fn claim_rewards_and_stake(
        &mut self,
        who: Pubkey,
        amount: u64,
    ) -> Result<ClaimAndStakeReceipt, StakingError> {
        let now = self.now;
        let staker = self
            .stakers
            .entry(who)
            .or_insert_with(|| StakerAccount::new(who, 0));
        process_claim_rewards_and_stake(
            &mut self.vault,
            &who,
            staker,
            &mut self.engine,
            None,
            now,
            amount,
        )
    }

    pub fn claim_rewards_and_redeem(
        &mut self,
        who: Pubkey,
        claim_amount: u64,
        redeem_amount: u64,
    ) -> Result<(ClaimReceipt, RedeemReceipt), StakingError> {
        let now = self.now;
        let staker = self
            .stakers
            .entry(who)
            .or_insert_with(|| StakerAccount::new(who, 0));
        process_claim_rewards_and_redeem(
            &mut self.vault,
            &who,
            staker,
            &mut self.engine,
            now,
            claim_amount,
            redeem_amount,
        )
    }

    pub fn slash(&mut self, caller: Pubkey, requested: u64) -> Result<SlashReceipt, StakingError> {
        process_slash(&mut self.vault, &caller, requested)
    }

    pub fn settle_slashing(&mut self, caller: Pubkey) -> Result<(), StakingError> {
        process_settle_slashing(&mut self.vault, &caller)
    }

    pub fn return_funds(&mut self, amount: u64) -> Result<ReturnFundsReceipt, StakingError> {
        process_return_funds(&mut self.vault, amount)
    }

    pub fn set_max_slashable(&mut self, caller: Pubkey, bps: u64) -> Result<(), StakingError> {
        process_set_max_slashable_percentage(&mut self.vault, &caller, bps)
    }

    pub fn set_cooldown_seconds(&mut self, caller: Pubkey, secs: u64) -> Result<(), StakingError> {
        process_set_cooldown_seconds(&mut self.vault, &caller, secs)
    }

    /// Solvency probe: everything redeemable at the current rate stays
    /// within the physical pool
    pub fn is_solvent(&self) -> bool {
        match math::preview_redeem(self.vault.total_shares, self.vault.exchange_rate) {
            Ok(backing) => backing <= self.vault.asset_pool,
            Err(_) => false,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
