//! Price zone calculator.
//!
//! Turns a history of daily shark/retail averages into the four trade levels
//! shown next to a recommendation. The calculation is pure: no I/O, no shared
//! state, safe to call from any thread.
//!
//! Degenerate input (empty history, all fields missing) never fails. The
//! affected levels come out as 0 and `ZoneDiagnostics` records that there was
//! nothing to work with.

use crate::analysis::advice::build_advice;
use crate::config::ZONES;
use crate::domain::{CurrentSample, DailySample, Recommendation};
use crate::models::{AdviceBasis, PriceZones, ZoneDiagnostics, ZoneReport};
use crate::utils::{get_max, get_min_max, mean_or_zero, sanitize_price};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

/// Compute price zones and the matching advice text.
///
/// `buy_zone` and `avg_shark_buy` come from the recommendation engine and are
/// taken as given; only the sell side is derived here. Negative or non-finite
/// values for either are treated as 0.
pub fn compute_zones(
    daily: &[DailySample],
    current: &CurrentSample,
    buy_zone: f64,
    avg_shark_buy: f64,
    recommendation: Recommendation,
) -> ZoneReport {
    let buy_zone = sanitize_price(buy_zone);
    let avg_shark_buy = sanitize_price(avg_shark_buy);

    let shark_buys: Vec<f64> = daily.iter().filter_map(DailySample::shark_buy).collect();
    let shark_sells: Vec<f64> = daily.iter().filter_map(DailySample::shark_sell).collect();

    // Observed range across both sides of the shark book
    let all_prices: Vec<f64> = shark_buys.iter().chain(&shark_sells).copied().collect();
    let (min_price, max_price) = get_min_max(&all_prices).unzip();

    let avg_price = current.blended_average();
    let stop_loss = buy_zone * ZONES.stop_loss_ratio;

    let avg_shark_sell = mean_or_zero(&shark_sells);
    let max_shark_sell = get_max(&shark_sells).unwrap_or(0.0);
    let sell_zone = avg_shark_sell.max(max_shark_sell * ZONES.sell_zone_premium);

    // Sharks' average exit is taken as fair value
    let target_price = avg_shark_sell;

    let zones = PriceZones {
        buy_zone,
        stop_loss,
        sell_zone,
        target_price,
        avg_price,
    };

    let diagnostics = ZoneDiagnostics {
        min_price,
        max_price,
        avg_shark_sell,
        max_shark_sell,
        shark_sell_samples: shark_sells.len(),
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_zone_calculation {
        log::info!(
            "Zones [{}]: buy {:.2} stop {:.2} sell {:.2} target {:.2} avg {:.2} | {} buy / {} sell samples, range {:?}..{:?}",
            recommendation,
            buy_zone,
            stop_loss,
            sell_zone,
            target_price,
            avg_price,
            shark_buys.len(),
            shark_sells.len(),
            min_price,
            max_price,
        );
    }

    let basis = AdviceBasis {
        avg_shark_buy,
        avg_shark_sell,
    };

    ZoneReport {
        recommendation,
        zones,
        diagnostics,
        basis,
        advice: build_advice(recommendation, &zones, &basis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn shark(buy: Option<f64>, sell: Option<f64>) -> DailySample {
        DailySample::new(buy, sell, None, None)
    }

    #[test]
    fn sell_side_from_mixed_history() {
        let daily = vec![
            shark(None, Some(100.0)),
            shark(None, Some(200.0)),
            shark(Some(0.0), None),
        ];
        let report = compute_zones(
            &daily,
            &DailySample::default(),
            0.0,
            0.0,
            Recommendation::Wait,
        );

        assert!(approx_eq(report.diagnostics.avg_shark_sell, 150.0));
        assert!(approx_eq(report.diagnostics.max_shark_sell, 200.0));
        assert!(approx_eq(report.zones.sell_zone, 202.0));
        assert!(approx_eq(report.zones.target_price, 150.0));
        assert_eq!(report.diagnostics.shark_sell_samples, 2);
    }

    #[test]
    fn no_shark_sells_means_zero_sell_zone_and_target() {
        let daily = vec![
            shark(Some(1_000.0), None),
            shark(Some(1_020.0), Some(0.0)),
            shark(Some(990.0), Some(-4.0)),
        ];
        let report = compute_zones(
            &daily,
            &DailySample::default(),
            980.0,
            1_003.3,
            Recommendation::Buy,
        );

        assert_eq!(report.zones.sell_zone, 0.0);
        assert_eq!(report.zones.target_price, 0.0);
        assert!(!report.diagnostics.has_sell_data());
        // Range still comes from the buy side
        assert_eq!(report.diagnostics.min_price, Some(990.0));
        assert_eq!(report.diagnostics.max_price, Some(1_020.0));
    }

    #[test]
    fn stop_loss_is_five_percent_below_buy_zone() {
        for buy_zone in [0.0, 1.0, 137.0, 1_000.0, 8_125.0, 49_950.0] {
            let report = compute_zones(
                &[],
                &DailySample::default(),
                buy_zone,
                0.0,
                Recommendation::Buy,
            );
            assert_eq!(report.zones.stop_loss, buy_zone * 0.95);
        }
    }

    #[test]
    fn sell_zone_dominates_average_and_premium_max() {
        let daily: Vec<DailySample> = [1_480.0, 1_505.0, 1_530.0, 1_495.0, 1_610.0]
            .iter()
            .map(|&sell| shark(Some(sell - 15.0), Some(sell)))
            .collect();
        let report = compute_zones(
            &daily,
            &DailySample::default(),
            1_450.0,
            1_509.0,
            Recommendation::Sell,
        );

        let d = report.diagnostics;
        assert!(report.zones.sell_zone >= d.avg_shark_sell);
        assert!(report.zones.sell_zone >= d.max_shark_sell * 1.01);
        assert!(approx_eq(report.zones.sell_zone, 1_610.0 * 1.01));
        assert!(approx_eq(report.zones.target_price, 1_524.0));
        assert_eq!(d.min_price, Some(1_465.0));
        assert_eq!(d.max_price, Some(1_610.0));
    }

    #[test]
    fn sell_zone_bounds_hold_across_series_shapes() {
        let series: [&[f64]; 5] = [
            &[1_250.0],
            &[800.0, 800.0, 800.0, 800.0],
            &[100.0, 101.0, 99.0, 100.0, 5_000.0],
            &[0.5, 0.25, 0.75],
            &[49_950.0, 50_100.0, 49_800.0, 50_025.0],
        ];

        for sells in series {
            let daily: Vec<DailySample> = sells.iter().map(|&s| shark(None, Some(s))).collect();
            let report = compute_zones(
                &daily,
                &DailySample::default(),
                0.0,
                0.0,
                Recommendation::Sell,
            );
            let d = report.diagnostics;
            let zones = report.zones;

            assert_eq!(d.shark_sell_samples, sells.len(), "{sells:?}");
            assert!(zones.sell_zone >= d.avg_shark_sell, "{sells:?}");
            assert!(zones.sell_zone >= d.max_shark_sell * 1.01, "{sells:?}");
            assert_eq!(zones.target_price, d.avg_shark_sell, "{sells:?}");
        }
    }

    #[test]
    fn negative_current_field_keeps_average_non_negative() {
        let current = DailySample::new(Some(-4_000.0), Some(10.0), Some(10.0), Some(10.0));
        let report = compute_zones(&[], &current, 0.0, 0.0, Recommendation::Wait);

        assert!(approx_eq(report.zones.avg_price, 7.5));
        assert!(report.advice.contains("period average of Rp 8."), "{}", report.advice);
        assert!(!report.advice.contains("Rp -"), "{}", report.advice);
    }

    #[test]
    fn buy_advice_reports_ten_percent_gain() {
        let daily = vec![shark(Some(990.0), Some(1_100.0))];
        let report = compute_zones(
            &daily,
            &DailySample::default(),
            1_000.0,
            990.0,
            Recommendation::Buy,
        );
        assert!(approx_eq(report.zones.target_price, 1_100.0));
        assert!(report.advice.contains("10.0%"), "{}", report.advice);
    }

    #[test]
    fn zero_buy_zone_gives_no_infinite_gain() {
        let daily = vec![shark(None, Some(1_100.0))];
        let report = compute_zones(
            &daily,
            &DailySample::default(),
            0.0,
            0.0,
            Recommendation::Buy,
        );
        assert_eq!(report.zones.potential_gain_pct(), None);
        assert!(!report.advice.contains("inf"));
        assert!(!report.advice.contains("NaN"));
    }

    #[test]
    fn empty_history_uses_current_sample_only() {
        let current = DailySample::new(Some(1_000.0), Some(1_040.0), Some(980.0), None);
        let report = compute_zones(&[], &current, 0.0, 0.0, Recommendation::Wait);

        assert_eq!(report.zones.buy_zone, 0.0);
        assert_eq!(report.zones.stop_loss, 0.0);
        assert_eq!(report.zones.sell_zone, 0.0);
        assert_eq!(report.zones.target_price, 0.0);
        // Missing retail sell counts as 0
        assert!(approx_eq(report.zones.avg_price, 755.0));
        assert_eq!(report.diagnostics.min_price, None);
        assert_eq!(report.diagnostics.max_price, None);
    }

    #[test]
    fn invalid_external_inputs_are_clamped() {
        let report = compute_zones(
            &[],
            &DailySample::default(),
            f64::NAN,
            -12.0,
            Recommendation::Buy,
        );
        assert_eq!(report.zones.buy_zone, 0.0);
        assert_eq!(report.zones.stop_loss, 0.0);
        assert_eq!(report.basis.avg_shark_buy, 0.0);
        assert!(!report.advice.contains("NaN"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let daily = vec![shark(Some(500.0), Some(520.0)), shark(Some(505.0), Some(530.0))];
        let current = DailySample::new(Some(510.0), Some(525.0), Some(508.0), Some(515.0));
        let first = compute_zones(&daily, &current, 498.0, 502.5, Recommendation::Wait);
        let second = compute_zones(&daily, &current, 498.0, 502.5, Recommendation::Wait);
        assert_eq!(first, second);
    }
}
