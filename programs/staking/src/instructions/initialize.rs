//! Initialize instructions - vault singleton and per-staker accounts

use crate::pda::{derive_staker_pda, derive_vault_pda};
use crate::state::{RoleBook, StakeVault, StakerAccount};
use palisade_common::*;
use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey};

/// Initialization parameters for the vault singleton
#[derive(Debug, Clone, Copy)]
pub struct VaultInit {
    pub underlying_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub rewards_controller: Pubkey,
    pub roles: RoleBook,
    pub max_slashable_bps: u64,
    pub cooldown_seconds: u64,
    pub unstake_window: u64,
}

/// Process vault initialization
///
/// Called once at deployment. Seeds the 1:1 exchange rate and the role
/// assignments; both only ever change through their dedicated paths
/// afterwards.
pub fn process_initialize_vault(
    program_id: &Pubkey,
    vault_account: &AccountInfo,
    init: &VaultInit,
) -> Result<(), StakingError> {
    // Derive and verify the vault PDA
    let (expected_pda, bump) = derive_vault_pda(program_id, &init.underlying_mint);

    if vault_account.key() != &expected_pda {
        msg!("Error: Vault account is not the correct PDA");
        return Err(StakingError::InvalidAccount);
    }

    // Verify account size
    let data = vault_account
        .try_borrow_data()
        .map_err(|_| StakingError::InvalidAccount)?;

    if data.len() != StakeVault::LEN {
        msg!("Error: Vault account has incorrect size");
        return Err(StakingError::InvalidAccount);
    }

    // Check if already initialized (magic starts zeroed)
    if data[0] != 0 {
        msg!("Error: Vault account may already be initialized");
        return Err(StakingError::InvalidAccount);
    }

    drop(data);

    let vault = unsafe { borrow_account_data_mut::<StakeVault>(vault_account)? };

    vault.initialize_in_place(
        init.underlying_mint,
        init.reward_mint,
        init.rewards_controller,
        init.roles,
        init.max_slashable_bps,
        init.cooldown_seconds,
        init.unstake_window,
        bump,
    )?;

    msg!("Vault initialized successfully");
    Ok(())
}

/// Process staker account initialization
///
/// Creates the per-staker record holding the share balance, cooldown
/// timestamp and committed rewards.
pub fn process_initialize_staker(
    program_id: &Pubkey,
    staker_account: &AccountInfo,
    vault_key: &Pubkey,
    owner: &Pubkey,
) -> Result<(), StakingError> {
    let (expected_pda, bump) = derive_staker_pda(program_id, vault_key, owner);

    if staker_account.key() != &expected_pda {
        msg!("Error: Staker account is not the correct PDA");
        return Err(StakingError::InvalidAccount);
    }

    let data = staker_account
        .try_borrow_data()
        .map_err(|_| StakingError::InvalidAccount)?;

    if data.len() != StakerAccount::LEN {
        msg!("Error: Staker account has incorrect size");
        return Err(StakingError::InvalidAccount);
    }

    if data[0] != 0 {
        msg!("Error: Staker account may already be initialized");
        return Err(StakingError::InvalidAccount);
    }

    drop(data);

    let staker = unsafe { borrow_account_data_mut::<StakerAccount>(staker_account)? };
    staker.initialize_in_place(*owner, bump);

    msg!("Staker account initialized successfully");
    Ok(())
}
