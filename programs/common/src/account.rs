//! Account validation and data access helpers
//!
//! Shared by entrypoints to validate account flags before any state is
//! touched, and to reinterpret raw account data as `#[repr(C)]` state.

use crate::error::StakingError;
use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};

/// Require that the account is owned by `program_id`
#[inline]
pub fn validate_owner(account: &AccountInfo, program_id: &Pubkey) -> Result<(), StakingError> {
    if !account.is_owned_by(program_id) {
        return Err(StakingError::InvalidAccount);
    }
    Ok(())
}

/// Require that the account is writable
#[inline]
pub fn validate_writable(account: &AccountInfo) -> Result<(), StakingError> {
    if !account.is_writable() {
        return Err(StakingError::InvalidAccount);
    }
    Ok(())
}

/// Require that the account signed the transaction
#[inline]
pub fn validate_signer(account: &AccountInfo) -> Result<(), StakingError> {
    if !account.is_signer() {
        return Err(StakingError::InvalidAccount);
    }
    Ok(())
}

/// Reinterpret account data as a `#[repr(C)]` state struct
///
/// # Safety
///
/// `T` must be `#[repr(C)]` with a layout written for account storage
/// (no pointers, explicit padding). The caller must not hold another
/// borrow of the same account data.
#[inline]
pub unsafe fn borrow_account_data<T>(account: &AccountInfo) -> Result<&T, StakingError> {
    let data = account
        .try_borrow_data()
        .map_err(|_| StakingError::InvalidAccount)?;
    if data.len() < core::mem::size_of::<T>() {
        return Err(StakingError::AccountTooSmall);
    }
    Ok(&*(data.as_ptr() as *const T))
}

/// Reinterpret account data as a mutable `#[repr(C)]` state struct
///
/// # Safety
///
/// Same requirements as [`borrow_account_data`].
#[inline]
pub unsafe fn borrow_account_data_mut<T>(account: &AccountInfo) -> Result<&mut T, StakingError> {
    let data = account
        .try_borrow_mut_data()
        .map_err(|_| StakingError::InvalidAccount)?;
    if data.len() < core::mem::size_of::<T>() {
        return Err(StakingError::AccountTooSmall);
    }
    Ok(&mut *(data.as_ptr() as *mut T))
}
