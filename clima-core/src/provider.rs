use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    config::UpstreamConfig,
    error::FetchError,
    model::{AirQualityResponse, ForecastResponse, GeoResponse},
};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// The three upstream lookups the aggregator depends on.
///
/// Coordinates are passed as caller text and forwarded unvalidated.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn geocode(&self, name: &str) -> Result<GeoResponse, FetchError>;

    async fn forecast(&self, lat: &str, lon: &str) -> Result<ForecastResponse, FetchError>;

    async fn air_quality(&self, lat: &str, lon: &str) -> Result<AirQualityResponse, FetchError>;
}

/// Construct the default provider from config.
pub fn provider_from_config(config: &UpstreamConfig) -> anyhow::Result<Box<dyn WeatherProvider>> {
    Ok(Box::new(OpenMeteoProvider::from_config(config)?))
}
