// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{SeriesStats, TrendDirection, compute_zones, series_stats};
pub use data::ZoneRequest;
pub use domain::{CurrentSample, DailySample, Recommendation};
pub use models::{AdviceBasis, PriceZones, ZoneDiagnostics, ZoneReport};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

/// Compute buy/sell zones, stop loss and target for one stock
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding the daily series, current sample and upstream inputs
    pub input: PathBuf,

    /// Snap the trade levels onto the BEI tick grid before printing
    #[arg(long, default_value_t = false)]
    pub snap_ticks: bool,

    /// Print the full report as JSON instead of a text summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
