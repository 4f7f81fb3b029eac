pub mod maths_utils;

pub use maths_utils::{
    get_max, get_min, get_min_max, is_valid_price, mean_or_zero, pct_change, sanitize_price,
};
