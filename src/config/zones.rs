//! Zone calculation configuration

/// Settings for the shark-series trend classifier
pub struct TrendSettings {
    // Percentage move between the first and second half of the series that
    // counts as a trend (applies in both directions)
    pub threshold_pct: f64,
}

/// Fallbacks used when the series is too thin to measure volatility
pub struct VolatilitySettings {
    // Used when the average shark buy is not positive
    pub default_range_volatility: f64,
    // Used when no day has a shark sell above its shark buy
    pub default_daily_spread: f64,
}

/// The Master Zone Configuration
pub struct ZoneConfig {
    // Stop loss sits this fraction of the buy zone (0.95 = 5% below entry)
    pub stop_loss_ratio: f64,
    // Premium applied on top of the highest shark sell to get the sell zone floor
    pub sell_zone_premium: f64,

    // Sub-groups
    pub trend: TrendSettings,
    pub volatility: VolatilitySettings,
}

pub const ZONES: ZoneConfig = ZoneConfig {
    stop_loss_ratio: 0.95,
    sell_zone_premium: 1.01,

    trend: TrendSettings { threshold_pct: 2.0 },

    volatility: VolatilitySettings {
        default_range_volatility: 0.05,
        default_daily_spread: 0.02,
    },
};
