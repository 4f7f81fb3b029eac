//! Exchange tick-size ladder.
//!
//! Prices on the Indonesia Stock Exchange (BEI) move in fixed increments that
//! widen as the price rises. Each band covers prices up to and including
//! `max_price`; anything above the last band uses `top_tick`.

/// One rung of the ladder
pub struct TickBand {
    pub max_price: f64,
    pub tick: f64,
}

pub struct TickLadder {
    pub bands: &'static [TickBand],
    pub top_tick: f64,
}

impl TickLadder {
    /// Tick increment that applies at `price`
    pub fn tick_for(&self, price: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| price <= band.max_price)
            .map_or(self.top_tick, |band| band.tick)
    }
}

pub const BEI_TICKS: TickLadder = TickLadder {
    bands: &[
        TickBand { max_price: 200.0, tick: 1.0 },
        TickBand { max_price: 500.0, tick: 2.0 },
        TickBand { max_price: 2_000.0, tick: 5.0 },
        TickBand { max_price: 5_000.0, tick: 10.0 },
        TickBand { max_price: 10_000.0, tick: 25.0 },
        TickBand { max_price: 25_000.0, tick: 50.0 },
    ],
    top_tick: 100.0,
};
