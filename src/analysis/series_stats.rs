use serde::{Deserialize, Serialize};

use crate::config::ZONES;
use crate::domain::DailySample;
use crate::utils::{get_min_max, mean_or_zero};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

/// Direction of shark buying over the series
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TrendDirection {
    Uptrend,
    Downtrend,
    Sideways,
}

/// Summary of the shark side of a daily series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    pub min_shark_buy: f64,
    pub max_shark_buy: f64,
    pub avg_shark_buy: f64,
    /// 0 when no day has a valid shark sell
    pub avg_shark_sell: f64,
    /// Most recent valid shark buy, a proxy for the last traded price
    pub last_shark_buy: f64,
    /// Larger of the buy range relative to its mean and the mean daily
    /// sell-over-buy spread
    pub volatility_factor: f64,
    pub trend_direction: TrendDirection,
    /// Absolute percentage move between the two halves of the series
    pub trend_strength: f64,
}

/// Shark statistics for `daily`, or None when no day has a valid shark buy.
pub fn series_stats(daily: &[DailySample]) -> Option<SeriesStats> {
    let shark_buys: Vec<f64> = daily.iter().filter_map(DailySample::shark_buy).collect();
    let shark_sells: Vec<f64> = daily.iter().filter_map(DailySample::shark_sell).collect();

    let (min_shark_buy, max_shark_buy) = get_min_max(&shark_buys)?;
    let avg_shark_buy = mean_or_zero(&shark_buys);
    let avg_shark_sell = mean_or_zero(&shark_sells);
    let last_shark_buy = shark_buys.last().copied().unwrap_or(0.0);

    let range_volatility = if avg_shark_buy > 0.0 {
        (max_shark_buy - min_shark_buy) / avg_shark_buy
    } else {
        ZONES.volatility.default_range_volatility
    };

    // Days where sharks sold above what they paid
    let daily_spreads: Vec<f64> = daily
        .iter()
        .filter_map(|d| match (d.shark_buy(), d.shark_sell()) {
            (Some(buy), Some(sell)) if sell > buy => Some((sell - buy) / buy),
            _ => None,
        })
        .collect();
    let avg_daily_spread = if daily_spreads.is_empty() {
        ZONES.volatility.default_daily_spread
    } else {
        mean_or_zero(&daily_spreads)
    };

    let volatility_factor = range_volatility.max(avg_daily_spread);
    let (trend_direction, trend_strength) = shark_buy_trend(daily);

    let stats = SeriesStats {
        min_shark_buy,
        max_shark_buy,
        avg_shark_buy,
        avg_shark_sell,
        last_shark_buy,
        volatility_factor,
        trend_direction,
        trend_strength,
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_series_stats {
        log::info!("Series stats over {} days: {:?}", daily.len(), stats);
    }

    Some(stats)
}

/// Compare mean shark buy of the first half of the series against the second.
/// Here missing days count as 0, so gaps in one half pull its mean down.
fn shark_buy_trend(daily: &[DailySample]) -> (TrendDirection, f64) {
    let mid_point = daily.len() / 2;
    let (first_half, second_half) = if mid_point > 0 {
        daily.split_at(mid_point)
    } else {
        (daily, daily)
    };

    let half_mean = |half: &[DailySample]| -> f64 {
        let raw: Vec<f64> = half.iter().map(|d| d.shark_buyavg.unwrap_or(0.0)).collect();
        mean_or_zero(&raw)
    };

    let first_avg = half_mean(first_half);
    let second_avg = half_mean(second_half);

    let trend_pct = if first_avg > 0.0 {
        (second_avg - first_avg) / first_avg * 100.0
    } else {
        0.0
    };

    let threshold = ZONES.trend.threshold_pct;
    let direction = if trend_pct > threshold {
        TrendDirection::Uptrend
    } else if trend_pct < -threshold {
        TrendDirection::Downtrend
    } else {
        TrendDirection::Sideways
    };

    (direction, trend_pct.abs())
}
