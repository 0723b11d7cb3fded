//! Pure Rust safety model for the staking vault
//! No Solana dependencies, no unwrap/panic, all functions total

pub mod helpers;
pub mod math;
pub mod state;
pub mod transitions;

// Re-export commonly used types
pub use helpers::*;
pub use state::*;
pub use transitions::*;
