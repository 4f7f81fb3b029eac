// Zone calculation and the statistics around it
pub mod advice;
pub mod series_stats;
pub mod zone_calc;

// Re-export commonly used items
pub use advice::{build_advice, format_gain, format_rupiah};
pub use series_stats::{SeriesStats, TrendDirection, series_stats};
pub use zone_calc::compute_zones;
