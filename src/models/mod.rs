// Result models for the zone calculation.
// Plain data only: no rendering, no I/O.

pub mod price_zones;

// Re-export key types for convenience
pub use price_zones::{AdviceBasis, PriceZones, ZoneDiagnostics, ZoneReport};
