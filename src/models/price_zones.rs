use serde::{Deserialize, Serialize};

use crate::domain::{PricePurpose, Recommendation, snap_price};
use crate::utils::pct_change;

/// The four trade levels plus the blended price of the current day.
/// Recomputed from scratch on every call; nothing here is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceZones {
    pub buy_zone: f64,
    pub stop_loss: f64,
    pub sell_zone: f64,
    pub target_price: f64,
    pub avg_price: f64,
}

impl PriceZones {
    /// Gain from entering at the buy zone and exiting at the target, in percent.
    /// None when there is no buy zone to measure from.
    pub fn potential_gain_pct(&self) -> Option<f64> {
        pct_change(self.buy_zone, self.target_price)
    }

    /// Copy with the trade levels moved onto the exchange tick grid.
    /// Entries and stops round down, exits round up. `avg_price` is informational
    /// and left as is.
    pub fn snapped_to_ticks(&self) -> Self {
        Self {
            buy_zone: snap_price(self.buy_zone, PricePurpose::Buy),
            stop_loss: snap_price(self.stop_loss, PricePurpose::StopLoss),
            sell_zone: snap_price(self.sell_zone, PricePurpose::Sell),
            target_price: snap_price(self.target_price, PricePurpose::Target),
            avg_price: self.avg_price,
        }
    }
}

/// Side values computed along the way. Not used by the advice text, but kept
/// so a caller can show the observed range or tell "no data" from a real zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDiagnostics {
    /// Lowest valid shark buy/sell average in the series
    pub min_price: Option<f64>,
    /// Highest valid shark buy/sell average in the series
    pub max_price: Option<f64>,
    pub avg_shark_sell: f64,
    pub max_shark_sell: f64,
    /// Days that contributed a valid shark sell average
    pub shark_sell_samples: usize,
}

impl ZoneDiagnostics {
    /// False when the sell side had nothing to work with and the sell zone and
    /// target collapsed to 0
    pub fn has_sell_data(&self) -> bool {
        self.shark_sell_samples > 0
    }
}

/// Reference averages quoted in the advice text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceBasis {
    pub avg_shark_buy: f64,
    pub avg_shark_sell: f64,
}

/// Everything a presentation layer needs to render one stock's price block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneReport {
    pub recommendation: Recommendation,
    pub zones: PriceZones,
    pub diagnostics: ZoneDiagnostics,
    pub basis: AdviceBasis,
    pub advice: String,
}

impl ZoneReport {
    /// Same report with tick-snapped zones and the advice re-rendered to match
    pub fn snapped_to_ticks(&self) -> Self {
        let zones = self.zones.snapped_to_ticks();
        Self {
            recommendation: self.recommendation,
            zones,
            diagnostics: self.diagnostics,
            basis: self.basis,
            advice: crate::analysis::build_advice(self.recommendation, &zones, &self.basis),
        }
    }
}
