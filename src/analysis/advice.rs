use crate::domain::Recommendation;
use crate::models::{AdviceBasis, PriceZones};

/// Whole-rupiah price label. Halves round away from zero, matching what the
/// dashboard has always displayed.
pub fn format_rupiah(price: f64) -> String {
    format!("Rp {:.0}", price.round())
}

/// Signed one-decimal percentage, or "N/A" when there was no base to measure from
pub fn format_gain(pct: Option<f64>) -> String {
    match pct {
        Some(p) if p.is_finite() => format!("{:+.1}%", p),
        _ => "N/A".to_string(),
    }
}

/// Render the advisory paragraph for a recommendation.
pub fn build_advice(
    recommendation: Recommendation,
    zones: &PriceZones,
    basis: &AdviceBasis,
) -> String {
    let mut advice = String::new();
    match recommendation {
        Recommendation::Buy => {
            advice.push_str(&format!(
                "ENTRY: wait for price to approach the buy zone {}. ",
                format_rupiah(zones.buy_zone)
            ));
            advice.push_str(&format!(
                "Target price {} (potential {}). ",
                format_rupiah(zones.target_price),
                format_gain(zones.potential_gain_pct())
            ));
            advice.push_str(&format!(
                "Stop loss at {} for protection. ",
                format_rupiah(zones.stop_loss)
            ));
            advice.push_str(&format!(
                "Buy zone is based on the Shark buy average ({}) with a dynamic discount.",
                format_rupiah(basis.avg_shark_buy)
            ));
        }
        Recommendation::Sell => {
            advice.push_str(&format!(
                "EXIT: consider selling as price approaches the sell zone {}. ",
                format_rupiah(zones.sell_zone)
            ));
            advice.push_str(&format!(
                "If still holding, keep a stop loss at {}. ",
                format_rupiah(zones.stop_loss)
            ));
            advice.push_str(&format!(
                "Sell zone is based on the Shark sell average ({}) as the fair-value exit.",
                format_rupiah(basis.avg_shark_sell)
            ));
        }
        Recommendation::Wait => {
            advice.push_str("WAIT: time to sit on the sidelines. ");
            advice.push_str(&format!(
                "Buy zone: {} | Sell zone: {}. ",
                format_rupiah(zones.buy_zone),
                format_rupiah(zones.sell_zone)
            ));
            advice.push_str(
                "Wait for a breakout or a rejection at one of these levels before entering. ",
            );
            advice.push_str(&format!(
                "Price is currently around the period average of {}.",
                format_rupiah(zones.avg_price)
            ));
        }
    }
    advice
}
