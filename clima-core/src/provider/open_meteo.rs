use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;

use crate::{
    config::UpstreamConfig,
    error::FetchError,
    fetch::Fetcher,
    model::{AirQualityResponse, ForecastResponse, GeoResponse},
};

use super::WeatherProvider;

const GEOCODE_COUNT: &str = "5";
const GEOCODE_LANGUAGE: &str = "pt";
const FORECAST_CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,precipitation,wind_speed_10m";
const FORECAST_DAILY_FIELDS: &str = "uv_index_max";
const POLLEN_CURRENT_FIELDS: &str = "birch_pollen,grass_pollen,olive_pollen,ragweed_pollen";

/// Open-Meteo geocoding, forecast and air-quality APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    fetcher: Fetcher,
    geocoding_url: Url,
    forecast_url: Url,
    air_quality_url: Url,
}

impl OpenMeteoProvider {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let fetcher = Fetcher::from_config(config)?;

        Ok(Self {
            fetcher,
            geocoding_url: parse_endpoint("geocoding_url", &config.geocoding_url)?,
            forecast_url: parse_endpoint("forecast_url", &config.forecast_url)?,
            air_quality_url: parse_endpoint("air_quality_url", &config.air_quality_url)?,
        })
    }

    pub fn geocode_url(&self, name: &str) -> Url {
        with_query(
            &self.geocoding_url,
            &[
                ("name", name),
                ("count", GEOCODE_COUNT),
                ("language", GEOCODE_LANGUAGE),
                ("format", "json"),
            ],
        )
    }

    pub fn forecast_url(&self, lat: &str, lon: &str) -> Url {
        with_query(
            &self.forecast_url,
            &[
                ("latitude", lat),
                ("longitude", lon),
                ("current", FORECAST_CURRENT_FIELDS),
                ("daily", FORECAST_DAILY_FIELDS),
                ("timezone", "auto"),
            ],
        )
    }

    pub fn air_quality_url(&self, lat: &str, lon: &str) -> Url {
        with_query(
            &self.air_quality_url,
            &[
                ("latitude", lat),
                ("longitude", lon),
                ("current", POLLEN_CURRENT_FIELDS),
                ("timezone", "auto"),
            ],
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn geocode(&self, name: &str) -> Result<GeoResponse, FetchError> {
        self.fetcher.get_json(self.geocode_url(name)).await
    }

    async fn forecast(&self, lat: &str, lon: &str) -> Result<ForecastResponse, FetchError> {
        self.fetcher.get_json(self.forecast_url(lat, lon)).await
    }

    async fn air_quality(&self, lat: &str, lon: &str) -> Result<AirQualityResponse, FetchError> {
        self.fetcher.get_json(self.air_quality_url(lat, lon)).await
    }
}

fn parse_endpoint(field: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).with_context(|| format!("Invalid upstream {field}: {raw}"))
}

/// Query values are form-encoded, so user text can't break out of its parameter.
fn with_query(base: &Url, pairs: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().extend_pairs(pairs);
    url
}
