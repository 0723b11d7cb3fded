//! Role book: the capability checks gating privileged operations
//!
//! Three fixed roles, one address each, seeded at initialization. The
//! registry that rotates these addresses lives outside this program;
//! here they are only ever compared against the caller.

use palisade_common::StakingError;
use pinocchio::pubkey::Pubkey;

/// Privileged roles recognized by the vault
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May slash, settle a slash, and bound the slashable fraction
    SlashingAdmin = 0,
    /// May reconfigure the cooldown duration
    CooldownAdmin = 1,
    /// May claim and redeem on behalf of other stakers
    ClaimHelper = 2,
}

/// Role-to-address assignments embedded in the vault account
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RoleBook {
    pub slashing_admin: Pubkey,
    pub cooldown_admin: Pubkey,
    pub claim_helper: Pubkey,
}

impl RoleBook {
    pub fn new(slashing_admin: Pubkey, cooldown_admin: Pubkey, claim_helper: Pubkey) -> Self {
        Self {
            slashing_admin,
            cooldown_admin,
            claim_helper,
        }
    }

    /// Address currently holding `role`
    pub fn admin_of(&self, role: Role) -> &Pubkey {
        match role {
            Role::SlashingAdmin => &self.slashing_admin,
            Role::CooldownAdmin => &self.cooldown_admin,
            Role::ClaimHelper => &self.claim_helper,
        }
    }

    /// Require that `caller` holds `role`
    pub fn require(&self, role: Role, caller: &Pubkey) -> Result<(), StakingError> {
        if self.admin_of(role) != caller {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }
}
