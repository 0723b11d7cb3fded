#![no_std]

pub mod account;
pub mod error;
pub mod instruction;

pub use account::*;
pub use error::*;
pub use instruction::*;
