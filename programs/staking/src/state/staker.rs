//! Per-staker account
//!
//! Tracks the share balance, the cooldown timestamp and the committed
//! unclaimed reward balance for one staker address.

use pinocchio::pubkey::Pubkey;

/// Size of the StakerAccount: 96 bytes
pub const STAKER_ACCOUNT_SIZE: usize = 96;

/// Staker account state
/// PDA: ["staker", vault, owner]
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct StakerAccount {
    /// Magic bytes for validation
    pub magic: u64,

    /// Version (currently 0)
    pub version: u8,

    /// Bump seed for PDA
    pub bump: u8,

    /// Padding for alignment
    pub _padding: [u8; 6],

    /// Staker address
    pub owner: Pubkey,

    /// Share balance
    pub share_balance: u64,

    /// Cooldown start instant; 0 = no active cooldown
    pub cooldown_timestamp: u64,

    /// Committed unclaimed rewards
    pub rewards_to_claim: u64,

    /// Cumulative meter reading already folded into rewards accounting
    pub accrued_consumed: u64,

    /// Reserved for future use
    pub _reserved: [u8; 16],
}

impl StakerAccount {
    pub const LEN: usize = core::mem::size_of::<Self>();

    /// Magic bytes for validation
    pub const MAGIC: &'static [u8; 8] = b"PLSDSTKR";

    /// Current version
    pub const VERSION: u8 = 0;

    /// Create a new staker account
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            magic: u64::from_le_bytes(*Self::MAGIC),
            version: Self::VERSION,
            bump,
            _padding: [0; 6],
            owner,
            share_balance: 0,
            cooldown_timestamp: 0,
            rewards_to_claim: 0,
            accrued_consumed: 0,
            _reserved: [0; 16],
        }
    }

    /// Initialize the account in-place
    pub fn initialize_in_place(&mut self, owner: Pubkey, bump: u8) {
        *self = Self::new(owner, bump);
    }

    /// Validate the staker account
    pub fn validate(&self) -> bool {
        self.magic == u64::from_le_bytes(*Self::MAGIC) && self.version == Self::VERSION
    }
}
