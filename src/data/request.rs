use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::{compute_zones, series_stats};
use crate::domain::{CurrentSample, DailySample, Recommendation};
use crate::models::ZoneReport;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

/// One stock's worth of input, as exported next to the dashboard data.
///
/// ```json
/// {
///   "recommendation": "BUY",
///   "buyZone": 1230,
///   "avgSharkBuy": 1262.4,
///   "current": { "shark_buyavg": 1260, "shark_sellavg": 1275, "retail_buyavg": 1255, "retail_sellavg": 1268 },
///   "daily": [ { "date": "2025-02-24", "shark_buyavg": 1250, "shark_sellavg": 1290 } ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequest {
    #[serde(default)]
    pub daily: Vec<DailySample>,
    #[serde(default)]
    pub current: CurrentSample,
    #[serde(default)]
    pub buy_zone: f64,
    /// Filled from the daily series when absent
    #[serde(default)]
    pub avg_shark_buy: Option<f64>,
    #[serde(default)]
    pub recommendation: Recommendation,
}

impl ZoneRequest {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open request file: {:?}", path))?;
        let reader = BufReader::new(file);
        let request: Self = serde_json::from_reader(reader)
            .context(format!("Failed to parse request JSON: {:?}", path))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_request_load {
            log::info!(
                "Loaded {:?}: {} daily samples, recommendation {}",
                path,
                request.daily.len(),
                request.recommendation
            );
        }
        Ok(request)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse request JSON")
    }

    /// The supplied shark buy average, else the mean of valid shark buys, else 0
    pub fn resolved_avg_shark_buy(&self) -> f64 {
        self.avg_shark_buy
            .or_else(|| series_stats(&self.daily).map(|stats| stats.avg_shark_buy))
            .unwrap_or(0.0)
    }

    pub fn evaluate(&self) -> ZoneReport {
        compute_zones(
            &self.daily,
            &self.current,
            self.buy_zone,
            self.resolved_avg_shark_buy(),
            self.recommendation,
        )
    }
}
