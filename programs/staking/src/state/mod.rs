//! Staking program state accounts

pub mod roles;
pub mod staker;
pub mod vault;

pub use roles::*;
pub use staker::*;
pub use vault::*;
