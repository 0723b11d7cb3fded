//! Vault account: the pooled-stake singleton
//!
//! One vault per staked asset. Holds the exchange rate, slashing
//! configuration and flags, cooldown configuration, the share supply and
//! the physical asset pool. Share value is derived from the rate, never
//! from the raw pool (the pool additionally carries rounding dust).

use crate::cooldown::CooldownParams;
use crate::math::{self, BPS_DENOM, INITIAL_EXCHANGE_RATE};
use crate::state::RoleBook;
use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Size of the StakeVault account: 288 bytes
pub const STAKE_VAULT_SIZE: usize = 288;

/// Vault account state
/// PDA: ["vault", underlying_mint]
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct StakeVault {
    /// Magic bytes for validation
    pub magic: u64,

    /// Version (currently 0)
    pub version: u8,

    /// Bump seed for PDA
    pub bump: u8,

    /// True between an executed slash and its settlement
    pub post_slashing: bool,

    /// Padding for alignment
    pub _padding: [u8; 5],

    /// Mint of the staked asset
    pub underlying_mint: Pubkey,

    /// Mint of the reward asset
    pub reward_mint: Pubkey,

    /// External accrual engine trusted to publish reward meters
    pub rewards_controller: Pubkey,

    /// Role assignments (read-only here; rotation is external)
    pub roles: RoleBook,

    /// Shares-per-asset rate, 1e18 fixed-point; always > 0
    pub exchange_rate: u128,

    /// Slash cap in basis points; strictly below 10_000
    pub max_slashable_bps: u64,

    /// Cooldown duration before a redeem becomes eligible
    pub cooldown_seconds: u64,

    /// Width of the redemption window after the cooldown (immutable)
    pub unstake_window: u64,

    /// Total share supply
    pub total_shares: u64,

    /// Physical underlying pool, including rounding dust
    pub asset_pool: u64,

    /// Reserved for future use
    pub _reserved: [u8; 24],
}

impl StakeVault {
    pub const LEN: usize = core::mem::size_of::<Self>();

    /// Magic bytes for validation
    pub const MAGIC: &'static [u8; 8] = b"PLSDVALT";

    /// Current version
    pub const VERSION: u8 = 0;

    /// Initialize the vault in-place (avoids a large stack temporary)
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_in_place(
        &mut self,
        underlying_mint: Pubkey,
        reward_mint: Pubkey,
        rewards_controller: Pubkey,
        roles: RoleBook,
        max_slashable_bps: u64,
        cooldown_seconds: u64,
        unstake_window: u64,
        bump: u8,
    ) -> Result<(), StakingError> {
        if max_slashable_bps >= BPS_DENOM {
            return Err(StakingError::InvalidPercentage);
        }

        self.magic = u64::from_le_bytes(*Self::MAGIC);
        self.version = Self::VERSION;
        self.bump = bump;
        self.post_slashing = false;
        self._padding = [0; 5];
        self.underlying_mint = underlying_mint;
        self.reward_mint = reward_mint;
        self.rewards_controller = rewards_controller;
        self.roles = roles;
        self.exchange_rate = INITIAL_EXCHANGE_RATE;
        self.max_slashable_bps = max_slashable_bps;
        self.cooldown_seconds = cooldown_seconds;
        self.unstake_window = unstake_window;
        self.total_shares = 0;
        self.asset_pool = 0;
        self._reserved = [0; 24];

        Ok(())
    }

    /// Create a new vault (host side; the program initializes in-place)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        underlying_mint: Pubkey,
        reward_mint: Pubkey,
        rewards_controller: Pubkey,
        roles: RoleBook,
        max_slashable_bps: u64,
        cooldown_seconds: u64,
        unstake_window: u64,
    ) -> Result<Self, StakingError> {
        let mut vault = Self {
            magic: 0,
            version: 0,
            bump: 0,
            post_slashing: false,
            _padding: [0; 5],
            underlying_mint: [0; 32],
            reward_mint: [0; 32],
            rewards_controller: [0; 32],
            roles: RoleBook::new([0; 32], [0; 32], [0; 32]),
            exchange_rate: 0,
            max_slashable_bps: 0,
            cooldown_seconds: 0,
            unstake_window: 0,
            total_shares: 0,
            asset_pool: 0,
            _reserved: [0; 24],
        };
        vault.initialize_in_place(
            underlying_mint,
            reward_mint,
            rewards_controller,
            roles,
            max_slashable_bps,
            cooldown_seconds,
            unstake_window,
            0,
        )?;
        Ok(vault)
    }

    /// Validate the vault account
    pub fn validate(&self) -> bool {
        self.magic == u64::from_le_bytes(*Self::MAGIC) && self.version == Self::VERSION
    }

    /// Cooldown configuration snapshot
    pub fn cooldown_params(&self) -> CooldownParams {
        CooldownParams {
            cooldown_seconds: self.cooldown_seconds,
            unstake_window: self.unstake_window,
        }
    }

    /// Assets currently backing the share supply at the exchange rate
    pub fn backing(&self) -> Result<u64, StakingError> {
        math::preview_redeem(self.total_shares, self.exchange_rate)
    }

    /// Largest amount a single slash may remove right now
    pub fn max_slashable(&self) -> Result<u64, StakingError> {
        math::max_slashable(self.backing()?, self.max_slashable_bps)
    }

    /// Mint shares to the supply (the staker side is the caller's)
    pub fn mint_shares(&mut self, amount: u64) {
        self.total_shares = self.total_shares.saturating_add(amount);
    }

    /// Burn shares from the supply
    pub fn burn_shares(&mut self, amount: u64) {
        self.total_shares = self.total_shares.saturating_sub(amount);
    }
}
