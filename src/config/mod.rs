//! Configuration module for the price zone calculator.

pub mod ticks;
pub mod zones;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use ticks::{BEI_TICKS, TickBand, TickLadder};
pub use zones::ZONES;
