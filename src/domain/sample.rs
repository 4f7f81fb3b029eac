use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::is_valid_price;

/// One trading day of broker-summary averages.
///
/// Each field is the volume-weighted average price paid (buy) or received
/// (sell) by one trader class that day. Absent, zero, negative and non-finite
/// values all mean "no data" and are skipped by the filtered accessors.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DailySample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, alias = "whale_buyavg")]
    pub shark_buyavg: Option<f64>,
    #[serde(default, alias = "whale_sellavg")]
    pub shark_sellavg: Option<f64>,
    #[serde(default)]
    pub retail_buyavg: Option<f64>,
    #[serde(default)]
    pub retail_sellavg: Option<f64>,
}

/// "Today" has the same shape as any day in the history
pub type CurrentSample = DailySample;

impl DailySample {
    pub fn new(
        shark_buyavg: Option<f64>,
        shark_sellavg: Option<f64>,
        retail_buyavg: Option<f64>,
        retail_sellavg: Option<f64>,
    ) -> Self {
        Self {
            date: None,
            shark_buyavg,
            shark_sellavg,
            retail_buyavg,
            retail_sellavg,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn shark_buy(&self) -> Option<f64> {
        valid(self.shark_buyavg)
    }

    pub fn shark_sell(&self) -> Option<f64> {
        valid(self.shark_sellavg)
    }

    pub fn retail_buy(&self) -> Option<f64> {
        valid(self.retail_buyavg)
    }

    pub fn retail_sell(&self) -> Option<f64> {
        valid(self.retail_sellavg)
    }

    /// Plain mean of all four averages with absent fields counted as 0.
    ///
    /// Unlike every other statistic here this does NOT skip missing data, so a
    /// day with a missing field drags the mean towards zero. Negative and
    /// non-finite fields count as 0 too, keeping the result non-negative.
    pub fn blended_average(&self) -> f64 {
        let total = [
            self.shark_buyavg,
            self.shark_sellavg,
            self.retail_buyavg,
            self.retail_sellavg,
        ]
        .into_iter()
        .map(|v| valid(v).unwrap_or(0.0))
        .sum::<f64>();
        total / 4.0
    }
}

fn valid(value: Option<f64>) -> Option<f64> {
    value.filter(|&v| is_valid_price(v))
}
