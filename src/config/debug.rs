//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! calculation stays quiet for library callers.

pub struct DebugFlags {
    /// Emit every intermediate value of the zone calculation.
    pub print_zone_calculation: bool,
    /// Emit the shark series statistics (volatility, trend) when computed.
    pub print_series_stats: bool,
    /// Emit a summary of each request file after it is parsed.
    pub print_request_load: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_zone_calculation: false,
    print_series_stats: false,
    print_request_load: false,
};
