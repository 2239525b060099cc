//! Pure rule tables that turn raw readings into display text.

pub mod advice;
pub mod pollen;
pub mod weather_code;

pub use advice::{Advice, AdviceKind, sport_advice};
pub use pollen::{PollenLevel, classify_pollen};
pub use weather_code::{WeatherSummary, describe_weather};
