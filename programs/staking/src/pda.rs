//! PDA derivation helpers

use pinocchio::pubkey::{find_program_address, Pubkey};

/// Vault PDA: ["vault", underlying_mint]
pub fn derive_vault_pda(program_id: &Pubkey, underlying_mint: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[b"vault", underlying_mint.as_ref()], program_id)
}

/// Staker PDA: ["staker", vault, owner]
pub fn derive_staker_pda(program_id: &Pubkey, vault: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[b"staker", vault.as_ref(), owner.as_ref()], program_id)
}
