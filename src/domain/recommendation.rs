use serde::{Deserialize, Serialize};

/// Trade call produced upstream by the signal engine.
///
/// The data generator emits `HOLD` for the no-trade case; the dashboard has
/// always rendered that through the WAIT branch, so both spellings map here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Recommendation {
    Buy,
    Sell,
    #[default]
    #[serde(alias = "HOLD")]
    #[strum(to_string = "WAIT", serialize = "HOLD")]
    Wait,
}
