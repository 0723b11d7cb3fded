//! Instruction data deserialization helpers
//!
//! Safe parsing of instruction payloads from byte slices. All reads are
//! bounds checked and fail with `InvalidInstruction` instead of panicking.

use crate::error::StakingError;
use pinocchio::pubkey::Pubkey;

/// Read a u8 from instruction data
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8, StakingError> {
    if offset >= data.len() {
        return Err(StakingError::InvalidInstruction);
    }
    Ok(data[offset])
}

/// Read a u16 (little-endian) from instruction data
#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> Result<u16, StakingError> {
    if offset + 2 > data.len() {
        return Err(StakingError::InvalidInstruction);
    }
    let bytes = [data[offset], data[offset + 1]];
    Ok(u16::from_le_bytes(bytes))
}

/// Read a u64 (little-endian) from instruction data
#[inline]
pub fn read_u64(data: &[u8], offset: usize) -> Result<u64, StakingError> {
    if offset + 8 > data.len() {
        return Err(StakingError::InvalidInstruction);
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    Ok(u64::from_le_bytes(bytes))
}

/// Read a u128 (little-endian) from instruction data
#[inline]
pub fn read_u128(data: &[u8], offset: usize) -> Result<u128, StakingError> {
    if offset + 16 > data.len() {
        return Err(StakingError::InvalidInstruction);
    }
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&data[offset..offset + 16]);
    Ok(u128::from_le_bytes(bytes))
}

/// Read a fixed-size byte array from instruction data
#[inline]
pub fn read_bytes<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], StakingError> {
    if offset + N > data.len() {
        return Err(StakingError::InvalidInstruction);
    }
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&data[offset..offset + N]);
    Ok(bytes)
}

/// Read a pubkey (32 bytes) from instruction data
#[inline]
pub fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey, StakingError> {
    Ok(Pubkey::from(read_bytes::<32>(data, offset)?))
}

/// Instruction data reader with tracked offset
///
/// Reads fields sequentially from an instruction payload while tracking
/// the current offset.
pub struct InstructionReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> InstructionReader<'a> {
    /// Create a new instruction reader
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Get the current offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get remaining bytes
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Read a u8 and advance offset
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, StakingError> {
        let val = read_u8(self.data, self.offset)?;
        self.offset += 1;
        Ok(val)
    }

    /// Read a u16 and advance offset
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, StakingError> {
        let val = read_u16(self.data, self.offset)?;
        self.offset += 2;
        Ok(val)
    }

    /// Read a u64 and advance offset
    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, StakingError> {
        let val = read_u64(self.data, self.offset)?;
        self.offset += 8;
        Ok(val)
    }

    /// Read a u128 and advance offset
    #[inline]
    pub fn read_u128(&mut self) -> Result<u128, StakingError> {
        let val = read_u128(self.data, self.offset)?;
        self.offset += 16;
        Ok(val)
    }

    /// Read a fixed-size byte array and advance offset
    #[inline]
    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], StakingError> {
        let val = read_bytes(self.data, self.offset)?;
        self.offset += N;
        Ok(val)
    }

    /// Read a pubkey and advance offset
    #[inline]
    pub fn read_pubkey(&mut self) -> Result<Pubkey, StakingError> {
        let val = read_pubkey(self.data, self.offset)?;
        self.offset += 32;
        Ok(val)
    }
}
