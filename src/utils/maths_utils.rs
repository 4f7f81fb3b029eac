use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

/// True for values that can stand in as a price: finite and strictly positive.
/// Zero is the "no data" sentinel in the daily series, never a real price.
#[inline]
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Clamp an externally supplied price to a usable non-negative number
pub fn sanitize_price(value: f64) -> f64 {
    if is_valid_price(value) { value } else { 0.0 }
}

pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    Some((get_min(vec)?, get_max(vec)?))
}

/// Arithmetic mean, or 0.0 for an empty slice (statrs would give NaN)
pub fn mean_or_zero(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    vec.iter().mean()
}

/// Percentage change from `from` to `to`.
/// None when `from` is not a usable base, so callers never render inf/NaN.
pub fn pct_change(from: f64, to: f64) -> Option<f64> {
    if !is_valid_price(from) || !to.is_finite() {
        return None;
    }
    Some((to - from) / from * 100.0)
}
