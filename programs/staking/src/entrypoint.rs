//! Staking program entrypoint
//!
//! Discriminator dispatch, account validation and instruction-data
//! parsing live here; the instruction modules hold the state
//! transitions. Underlying/reward movement is reported by the receipts
//! each handler returns and settled on the token rail after the
//! internal bookkeeping is final, so reentrant observers of a transfer
//! always see consistent vault state.

use pinocchio::{
    account_info::AccountInfo,
    entrypoint,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::instructions::{
    process_activate_cooldown, process_claim_rewards, process_claim_rewards_and_redeem,
    process_claim_rewards_and_stake, process_initialize_staker, process_initialize_vault,
    process_redeem, process_return_funds, process_set_cooldown_seconds,
    process_set_max_slashable_percentage, process_settle_slashing, process_slash, process_stake,
    StakingInstruction, VaultInit,
};
use crate::rewards::{MeterEngine, RewardMeter};
use crate::state::{Role, RoleBook, StakeVault, StakerAccount};
use palisade_common::{
    borrow_account_data, borrow_account_data_mut, validate_owner, validate_signer,
    validate_writable, InstructionReader, StakingError,
};

entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Check minimum instruction data length
    if instruction_data.is_empty() {
        msg!("Error: Instruction data is empty");
        return Err(StakingError::InvalidInstruction.into());
    }

    // Parse instruction discriminator
    let discriminator = instruction_data[0];
    let instruction = match discriminator {
        0 => StakingInstruction::Initialize,
        1 => StakingInstruction::InitializeStaker,
        2 => StakingInstruction::Stake,
        3 => StakingInstruction::StakeWithPermit,
        4 => StakingInstruction::ActivateCooldown,
        5 => StakingInstruction::Redeem,
        6 => StakingInstruction::RedeemOnBehalf,
        7 => StakingInstruction::ClaimRewards,
        8 => StakingInstruction::ClaimRewardsOnBehalf,
        9 => StakingInstruction::ClaimRewardsAndStake,
        10 => StakingInstruction::ClaimRewardsAndStakeOnBehalf,
        11 => StakingInstruction::ClaimRewardsAndRedeem,
        12 => StakingInstruction::ClaimRewardsAndRedeemOnBehalf,
        13 => StakingInstruction::Slash,
        14 => StakingInstruction::ReturnFunds,
        15 => StakingInstruction::SettleSlashing,
        16 => StakingInstruction::SetMaxSlashablePercentage,
        17 => StakingInstruction::SetCooldownSeconds,
        _ => {
            msg!("Error: Unknown instruction");
            return Err(StakingError::InvalidInstruction.into());
        }
    };

    let data = &instruction_data[1..];

    match instruction {
        StakingInstruction::Initialize => {
            msg!("Instruction: Initialize");
            process_initialize_inner(program_id, accounts, data)
        }
        StakingInstruction::InitializeStaker => {
            msg!("Instruction: InitializeStaker");
            process_initialize_staker_inner(program_id, accounts, data)
        }
        StakingInstruction::Stake => {
            msg!("Instruction: Stake");
            process_stake_inner(program_id, accounts, data, false)
        }
        StakingInstruction::StakeWithPermit => {
            msg!("Instruction: StakeWithPermit");
            process_stake_inner(program_id, accounts, data, true)
        }
        StakingInstruction::ActivateCooldown => {
            msg!("Instruction: ActivateCooldown");
            process_activate_cooldown_inner(program_id, accounts, data)
        }
        StakingInstruction::Redeem => {
            msg!("Instruction: Redeem");
            process_redeem_inner(program_id, accounts, data, false)
        }
        StakingInstruction::RedeemOnBehalf => {
            msg!("Instruction: RedeemOnBehalf");
            process_redeem_inner(program_id, accounts, data, true)
        }
        StakingInstruction::ClaimRewards => {
            msg!("Instruction: ClaimRewards");
            process_claim_rewards_inner(program_id, accounts, data, false)
        }
        StakingInstruction::ClaimRewardsOnBehalf => {
            msg!("Instruction: ClaimRewardsOnBehalf");
            process_claim_rewards_inner(program_id, accounts, data, true)
        }
        StakingInstruction::ClaimRewardsAndStake => {
            msg!("Instruction: ClaimRewardsAndStake");
            process_claim_rewards_and_stake_inner(program_id, accounts, data, false)
        }
        StakingInstruction::ClaimRewardsAndStakeOnBehalf => {
            msg!("Instruction: ClaimRewardsAndStakeOnBehalf");
            process_claim_rewards_and_stake_inner(program_id, accounts, data, true)
        }
        StakingInstruction::ClaimRewardsAndRedeem => {
            msg!("Instruction: ClaimRewardsAndRedeem");
            process_claim_rewards_and_redeem_inner(program_id, accounts, data, false)
        }
        StakingInstruction::ClaimRewardsAndRedeemOnBehalf => {
            msg!("Instruction: ClaimRewardsAndRedeemOnBehalf");
            process_claim_rewards_and_redeem_inner(program_id, accounts, data, true)
        }
        StakingInstruction::Slash => {
            msg!("Instruction: Slash");
            process_slash_inner(program_id, accounts, data)
        }
        StakingInstruction::ReturnFunds => {
            msg!("Instruction: ReturnFunds");
            process_return_funds_inner(program_id, accounts, data)
        }
        StakingInstruction::SettleSlashing => {
            msg!("Instruction: SettleSlashing");
            process_settle_slashing_inner(program_id, accounts, data)
        }
        StakingInstruction::SetMaxSlashablePercentage => {
            msg!("Instruction: SetMaxSlashablePercentage");
            process_set_max_slashable_inner(program_id, accounts, data)
        }
        StakingInstruction::SetCooldownSeconds => {
            msg!("Instruction: SetCooldownSeconds");
            process_set_cooldown_seconds_inner(program_id, accounts, data)
        }
    }
}

// Shared loaders

fn current_timestamp() -> Result<u64, ProgramError> {
    let clock = Clock::get()?;
    Ok(clock.unix_timestamp as u64)
}

fn load_vault_mut<'a>(
    account: &'a AccountInfo,
    program_id: &Pubkey,
) -> Result<&'a mut StakeVault, StakingError> {
    validate_owner(account, program_id)?;
    validate_writable(account)?;
    let vault = unsafe { borrow_account_data_mut::<StakeVault>(account)? };
    if !vault.validate() {
        msg!("Error: Invalid vault account");
        return Err(StakingError::InvalidAccount);
    }
    Ok(vault)
}

fn load_vault<'a>(
    account: &'a AccountInfo,
    program_id: &Pubkey,
) -> Result<&'a StakeVault, StakingError> {
    validate_owner(account, program_id)?;
    let vault = unsafe { borrow_account_data::<StakeVault>(account)? };
    if !vault.validate() {
        msg!("Error: Invalid vault account");
        return Err(StakingError::InvalidAccount);
    }
    Ok(vault)
}

fn load_staker_mut<'a>(
    account: &'a AccountInfo,
    program_id: &Pubkey,
) -> Result<&'a mut StakerAccount, StakingError> {
    validate_owner(account, program_id)?;
    validate_writable(account)?;
    let staker = unsafe { borrow_account_data_mut::<StakerAccount>(account)? };
    if !staker.validate() {
        msg!("Error: Invalid staker account");
        return Err(StakingError::InvalidAccount);
    }
    Ok(staker)
}

/// Bind the staker's reward meter as an accrual-engine view
///
/// The meter is published by the configured rewards controller; the
/// advanced consumed marker must be written back to the staker account
/// after the instruction logic runs.
fn bind_meter(
    meter_account: &AccountInfo,
    vault: &StakeVault,
    staker: &StakerAccount,
) -> Result<MeterEngine, StakingError> {
    validate_owner(meter_account, &vault.rewards_controller)?;
    let meter = unsafe { borrow_account_data::<RewardMeter>(meter_account)? };
    if !meter.validate() || meter.staker != staker.owner {
        msg!("Error: Invalid reward meter account");
        return Err(StakingError::InvalidAccount);
    }
    Ok(MeterEngine::new(
        meter.cumulative_accrued,
        staker.accrued_consumed,
    ))
}

// Instruction processors with account validation

/// Process initialize instruction
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[signer]` Deployment authority
///
/// Expected data layout (216 bytes):
/// - underlying_mint: Pubkey (32 bytes)
/// - reward_mint: Pubkey (32 bytes)
/// - rewards_controller: Pubkey (32 bytes)
/// - slashing_admin: Pubkey (32 bytes)
/// - cooldown_admin: Pubkey (32 bytes)
/// - claim_helper: Pubkey (32 bytes)
/// - max_slashable_bps: u64 (8 bytes)
/// - cooldown_seconds: u64 (8 bytes)
/// - unstake_window: u64 (8 bytes)
fn process_initialize_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: Initialize requires at least 2 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let authority_account = &accounts[1];

    validate_signer(authority_account)?;
    validate_owner(vault_account, program_id)?;
    validate_writable(vault_account)?;

    let mut reader = InstructionReader::new(data);
    let underlying_mint = reader.read_pubkey()?;
    let reward_mint = reader.read_pubkey()?;
    let rewards_controller = reader.read_pubkey()?;
    let slashing_admin = reader.read_pubkey()?;
    let cooldown_admin = reader.read_pubkey()?;
    let claim_helper = reader.read_pubkey()?;
    let max_slashable_bps = reader.read_u64()?;
    let cooldown_seconds = reader.read_u64()?;
    let unstake_window = reader.read_u64()?;

    let init = VaultInit {
        underlying_mint,
        reward_mint,
        rewards_controller,
        roles: RoleBook::new(slashing_admin, cooldown_admin, claim_helper),
        max_slashable_bps,
        cooldown_seconds,
        unstake_window,
    };

    process_initialize_vault(program_id, vault_account, &init)?;
    Ok(())
}

/// Process staker-account initialization
///
/// Expected accounts:
/// 0. `[writable]` Staker account (PDA)
/// 1. `[]` Vault account
/// 2. `[signer]` Staker owner
fn process_initialize_staker_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    _data: &[u8],
) -> ProgramResult {
    if accounts.len() < 3 {
        msg!("Error: InitializeStaker requires at least 3 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let staker_account = &accounts[0];
    let vault_account = &accounts[1];
    let owner_account = &accounts[2];

    validate_signer(owner_account)?;
    validate_owner(staker_account, program_id)?;
    validate_writable(staker_account)?;
    validate_owner(vault_account, program_id)?;

    process_initialize_staker(
        program_id,
        staker_account,
        vault_account.key(),
        owner_account.key(),
    )?;
    Ok(())
}

/// Process stake instruction (plain and permit-authorized)
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[writable]` Staker account of the share recipient (PDA)
/// 2. `[signer]` Funder paying the underlying (permit path: `[]`)
/// 3. `[]` Reward meter for the recipient
/// 4. `[signer]` Permit attestation from the external verifier (permit path only)
/// 5... Underlying token accounts and token program for the asset pull
///
/// Expected data layout (8 bytes):
/// - amount: u64
fn process_stake_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
    with_permit: bool,
) -> ProgramResult {
    let min_accounts = if with_permit { 5 } else { 4 };
    if accounts.len() < min_accounts {
        msg!("Error: Stake is missing accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let staker_account = &accounts[1];
    let funder_account = &accounts[2];
    let meter_account = &accounts[3];

    if with_permit {
        // The external verifier vouches for the funder's approval by
        // co-signing; the funder itself does not have to
        validate_signer(&accounts[4])?;
    } else {
        validate_signer(funder_account)?;
    }

    let vault = load_vault_mut(vault_account, program_id)?;
    let staker = load_staker_mut(staker_account, program_id)?;

    let mut reader = InstructionReader::new(data);
    let amount = reader.read_u64()?;

    let mut engine = bind_meter(meter_account, vault, staker)?;
    let staker_key = staker.owner;
    let now = current_timestamp()?;

    let receipt = process_stake(vault, &staker_key, staker, &mut engine, now, amount, true)?;
    staker.accrued_consumed = engine.consumed;

    if receipt.newly_accrued != 0 {
        log!("rewards accrued: {}", receipt.newly_accrued);
    }
    log!(
        "staked: assets={}, shares={}",
        receipt.assets_staked,
        receipt.shares_minted
    );
    Ok(())
}

/// Process cooldown activation
///
/// Expected accounts:
/// 0. `[writable]` Staker account (PDA)
/// 1. `[signer]` Staker owner
fn process_activate_cooldown_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    _data: &[u8],
) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: ActivateCooldown requires at least 2 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let staker_account = &accounts[0];
    let owner_account = &accounts[1];

    validate_signer(owner_account)?;
    let staker = load_staker_mut(staker_account, program_id)?;

    if owner_account.key() != &staker.owner {
        msg!("Error: Only the staker may start its cooldown");
        return Err(StakingError::Unauthorized.into());
    }

    let now = current_timestamp()?;
    let started = process_activate_cooldown(staker, now)?;
    log!("cooldown activated at {}", started);
    Ok(())
}

/// Process redeem instruction (self and on-behalf)
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[writable]` Staker account being redeemed (PDA)
/// 2. `[signer]` Staker owner, or the claim helper on the on-behalf path
/// 3. `[]` Reward meter for the staker
/// 4... Underlying token accounts and token program for the payout
///
/// Expected data layout (8 bytes):
/// - amount: u64 (share amount; clamped to the balance)
fn process_redeem_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
    on_behalf: bool,
) -> ProgramResult {
    if accounts.len() < 4 {
        msg!("Error: Redeem requires at least 4 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let staker_account = &accounts[1];
    let signer_account = &accounts[2];
    let meter_account = &accounts[3];

    validate_signer(signer_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;
    let staker = load_staker_mut(staker_account, program_id)?;

    // Authorization precedes every other check
    if on_behalf {
        vault.roles.require(Role::ClaimHelper, signer_account.key())?;
    } else if signer_account.key() != &staker.owner {
        msg!("Error: Only the staker may redeem its own shares");
        return Err(StakingError::Unauthorized.into());
    }

    let mut reader = InstructionReader::new(data);
    let amount = reader.read_u64()?;

    let mut engine = bind_meter(meter_account, vault, staker)?;
    let staker_key = staker.owner;
    let now = current_timestamp()?;

    let receipt = process_redeem(vault, &staker_key, staker, &mut engine, now, amount)?;
    staker.accrued_consumed = engine.consumed;

    if receipt.newly_accrued != 0 {
        log!("rewards accrued: {}", receipt.newly_accrued);
    }
    log!(
        "redeemed: shares={}, assets={}",
        receipt.shares_burned,
        receipt.assets_released
    );
    Ok(())
}

/// Process rewards claim (self and on-behalf)
///
/// Expected accounts:
/// 0. `[]` Vault account (PDA)
/// 1. `[writable]` Staker account being claimed for (PDA)
/// 2. `[signer]` Staker owner, or the claim helper on the on-behalf path
/// 3. `[]` Reward meter for the staker
/// 4... Reward token accounts and token program for the payout
///
/// Expected data layout (8 bytes):
/// - amount: u64 (u64::MAX claims everything)
fn process_claim_rewards_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
    on_behalf: bool,
) -> ProgramResult {
    if accounts.len() < 4 {
        msg!("Error: ClaimRewards requires at least 4 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let staker_account = &accounts[1];
    let signer_account = &accounts[2];
    let meter_account = &accounts[3];

    validate_signer(signer_account)?;
    let vault = load_vault(vault_account, program_id)?;
    let staker = load_staker_mut(staker_account, program_id)?;

    if on_behalf {
        vault.roles.require(Role::ClaimHelper, signer_account.key())?;
    } else if signer_account.key() != &staker.owner {
        msg!("Error: Only the staker may claim its own rewards");
        return Err(StakingError::Unauthorized.into());
    }

    let mut reader = InstructionReader::new(data);
    let amount = reader.read_u64()?;

    let mut engine = bind_meter(meter_account, vault, staker)?;
    let staker_key = staker.owner;

    let receipt = process_claim_rewards(vault, &staker_key, staker, &mut engine, amount)?;
    staker.accrued_consumed = engine.consumed;

    if receipt.newly_accrued != 0 {
        log!("rewards accrued: {}", receipt.newly_accrued);
    }
    log!("rewards claimed: {}", receipt.amount_claimed);
    Ok(())
}

/// Process claim-and-restake (self and on-behalf)
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[writable]` Staker account whose rewards are claimed (PDA)
/// 2. `[signer]` That staker, or the claim helper on the on-behalf path
/// 3. `[]` Reward meter for the claiming staker
/// 4. `[writable]` Staker account receiving the restaked shares (may repeat account 1)
/// 5. `[]` Reward meter for the recipient (may repeat account 3)
///
/// Expected data layout (8 bytes):
/// - amount: u64 (u64::MAX claims everything)
fn process_claim_rewards_and_stake_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
    on_behalf: bool,
) -> ProgramResult {
    if accounts.len() < 6 {
        msg!("Error: ClaimRewardsAndStake requires at least 6 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let from_account = &accounts[1];
    let signer_account = &accounts[2];
    let from_meter_account = &accounts[3];
    let to_account = &accounts[4];
    let to_meter_account = &accounts[5];

    validate_signer(signer_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;
    let from_staker = load_staker_mut(from_account, program_id)?;

    if on_behalf {
        vault.roles.require(Role::ClaimHelper, signer_account.key())?;
    } else if signer_account.key() != &from_staker.owner {
        msg!("Error: Only the staker may restake its own rewards");
        return Err(StakingError::Unauthorized.into());
    }

    let mut reader = InstructionReader::new(data);
    let amount = reader.read_u64()?;

    let mut from_engine = bind_meter(from_meter_account, vault, from_staker)?;
    let from_key = from_staker.owner;
    let now = current_timestamp()?;

    let receipt = if to_account.key() == from_account.key() {
        let receipt = process_claim_rewards_and_stake(
            vault,
            &from_key,
            from_staker,
            &mut from_engine,
            None,
            now,
            amount,
        )?;
        from_staker.accrued_consumed = from_engine.consumed;
        receipt
    } else {
        let to_staker = load_staker_mut(to_account, program_id)?;
        let mut to_engine = bind_meter(to_meter_account, vault, to_staker)?;
        let to_key = to_staker.owner;
        let receipt = process_claim_rewards_and_stake(
            vault,
            &from_key,
            from_staker,
            &mut from_engine,
            Some((&to_key, &mut *to_staker, &mut to_engine)),
            now,
            amount,
        )?;
        from_staker.accrued_consumed = from_engine.consumed;
        to_staker.accrued_consumed = to_engine.consumed;
        receipt
    };

    log!(
        "rewards restaked: claimed={}, shares={}",
        receipt.amount_claimed,
        receipt.shares_minted
    );
    Ok(())
}

/// Process claim-and-redeem (self and on-behalf)
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[writable]` Staker account (PDA)
/// 2. `[signer]` Staker owner, or the claim helper on the on-behalf path
/// 3. `[]` Reward meter for the staker
/// 4... Token accounts for both payouts
///
/// Expected data layout (16 bytes):
/// - claim_amount: u64
/// - redeem_amount: u64
fn process_claim_rewards_and_redeem_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
    on_behalf: bool,
) -> ProgramResult {
    if accounts.len() < 4 {
        msg!("Error: ClaimRewardsAndRedeem requires at least 4 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let staker_account = &accounts[1];
    let signer_account = &accounts[2];
    let meter_account = &accounts[3];

    validate_signer(signer_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;
    let staker = load_staker_mut(staker_account, program_id)?;

    if on_behalf {
        vault.roles.require(Role::ClaimHelper, signer_account.key())?;
    } else if signer_account.key() != &staker.owner {
        msg!("Error: Only the staker may claim and redeem for itself");
        return Err(StakingError::Unauthorized.into());
    }

    let mut reader = InstructionReader::new(data);
    let claim_amount = reader.read_u64()?;
    let redeem_amount = reader.read_u64()?;

    let mut engine = bind_meter(meter_account, vault, staker)?;
    let staker_key = staker.owner;
    let now = current_timestamp()?;

    let (claim, redeem) = process_claim_rewards_and_redeem(
        vault,
        &staker_key,
        staker,
        &mut engine,
        now,
        claim_amount,
        redeem_amount,
    )?;
    staker.accrued_consumed = engine.consumed;

    log!(
        "rewards claimed: {}, redeemed: shares={}, assets={}",
        claim.amount_claimed,
        redeem.shares_burned,
        redeem.assets_released
    );
    Ok(())
}

/// Process slash instruction
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[signer]` Slashing admin
/// 2. `[writable]` Destination receiving the slashed underlying
/// 3... Token accounts and token program for the transfer
///
/// Expected data layout (8 bytes):
/// - requested_amount: u64 (clamped to the configured cap)
fn process_slash_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 3 {
        msg!("Error: Slash requires at least 3 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let admin_account = &accounts[1];

    validate_signer(admin_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;

    let mut reader = InstructionReader::new(data);
    let requested = reader.read_u64()?;

    let receipt = process_slash(vault, admin_account.key(), requested)?;

    msg!("Exchange rate updated");
    log!("slashed: {}", receipt.amount_slashed);
    Ok(())
}

/// Process return-funds instruction
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[signer]` Contributor funding the return
/// 2... Token accounts and token program for the pull
///
/// Expected data layout (8 bytes):
/// - amount: u64
fn process_return_funds_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: ReturnFunds requires at least 2 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let contributor_account = &accounts[1];

    validate_signer(contributor_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;

    let mut reader = InstructionReader::new(data);
    let amount = reader.read_u64()?;

    let receipt = process_return_funds(vault, amount)?;

    msg!("Exchange rate updated");
    log!("funds returned: {}", receipt.amount_returned);
    Ok(())
}

/// Process settle-slashing instruction
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[signer]` Slashing admin
fn process_settle_slashing_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    _data: &[u8],
) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: SettleSlashing requires at least 2 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let admin_account = &accounts[1];

    validate_signer(admin_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;

    process_settle_slashing(vault, admin_account.key())?;

    msg!("Slashing settled");
    Ok(())
}

/// Process max-slashable-percentage update
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[signer]` Slashing admin
///
/// Expected data layout (8 bytes):
/// - max_slashable_bps: u64
fn process_set_max_slashable_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: SetMaxSlashablePercentage requires at least 2 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let admin_account = &accounts[1];

    validate_signer(admin_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;

    let mut reader = InstructionReader::new(data);
    let bps = reader.read_u64()?;

    process_set_max_slashable_percentage(vault, admin_account.key(), bps)?;

    log!("max slashable bps set: {}", bps);
    Ok(())
}

/// Process cooldown-seconds update
///
/// Expected accounts:
/// 0. `[writable]` Vault account (PDA)
/// 1. `[signer]` Cooldown admin
///
/// Expected data layout (8 bytes):
/// - cooldown_seconds: u64
fn process_set_cooldown_seconds_inner(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: SetCooldownSeconds requires at least 2 accounts");
        return Err(StakingError::InvalidInstruction.into());
    }

    let vault_account = &accounts[0];
    let admin_account = &accounts[1];

    validate_signer(admin_account)?;
    let vault = load_vault_mut(vault_account, program_id)?;

    let mut reader = InstructionReader::new(data);
    let seconds = reader.read_u64()?;

    process_set_cooldown_seconds(vault, admin_account.key(), seconds)?;

    log!("cooldown seconds set: {}", seconds);
    Ok(())
}
