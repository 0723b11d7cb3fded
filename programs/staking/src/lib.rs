#![cfg_attr(target_os = "solana", no_std)]

pub mod cooldown;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod rewards;
pub mod state;

// Always expose entrypoint for testing, but only register as entrypoint when feature enabled
pub mod entrypoint;

// Panic handler for no_std builds (only for Solana BPF)
#[cfg(all(target_os = "solana", not(test)))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

pub use instructions::*;
pub use state::*;

pinocchio_pubkey::declare_id!("SVau1tPa1isadeS1ashab1eStake9wXqKzRbTnHcGdM");
