// Domain types and value objects
pub mod recommendation;
pub mod sample;
pub mod tick_size;

// Re-export commonly used types
pub use recommendation::Recommendation;
pub use sample::{CurrentSample, DailySample};
pub use tick_size::{PricePurpose, RoundDirection, round_for_purpose, snap_price, tick_size};
