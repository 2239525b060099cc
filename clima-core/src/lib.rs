//! Core library for the ClimaTem backend.
//!
//! This crate defines:
//! - Configuration for the server and the upstream APIs
//! - The upstream fetcher and the Open-Meteo provider
//! - Classifiers for weather codes, pollen and training advice
//! - The aggregator that turns upstream payloads into frontend reports
//!
//! It is used by `clima-server`, but has no HTTP surface of its own.

pub mod aggregator;
pub mod classify;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;

pub use aggregator::Aggregator;
pub use config::{Config, ServerConfig, UpstreamConfig};
pub use error::{ClimaError, FetchError};
pub use model::{CityCandidate, ConditionsReport, CurrentConditions, PollenReading};
pub use provider::{OpenMeteoProvider, WeatherProvider};
