use crate::config::BEI_TICKS;
use crate::utils::is_valid_price;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundDirection {
    Down,
    Up,
}

/// What a price will be used for; decides which way it is rounded.
/// Entries and stops round down, exits round up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum PricePurpose {
    Buy,
    Target,
    Sell,
    StopLoss,
}

impl PricePurpose {
    pub fn direction(self) -> RoundDirection {
        match self {
            PricePurpose::Buy | PricePurpose::StopLoss => RoundDirection::Down,
            PricePurpose::Target | PricePurpose::Sell => RoundDirection::Up,
        }
    }
}

pub fn tick_size(price: f64) -> f64 {
    BEI_TICKS.tick_for(price)
}

/// Snap `price` onto the tick grid. Never returns less than one tick.
pub fn round_to_tick(price: f64, direction: RoundDirection) -> f64 {
    let tick = tick_size(price);
    let steps = price / tick;
    let rounded = match direction {
        RoundDirection::Down => steps.floor() * tick,
        RoundDirection::Up => steps.ceil() * tick,
    };
    rounded.max(tick)
}

pub fn round_for_purpose(price: f64, purpose: PricePurpose) -> f64 {
    round_to_tick(price, purpose.direction())
}

/// Like `round_for_purpose`, but a missing price (0 or invalid) stays 0
/// instead of being lifted to one tick.
pub fn snap_price(price: f64, purpose: PricePurpose) -> f64 {
    if is_valid_price(price) {
        round_for_purpose(price, purpose)
    } else {
        0.0
    }
}
