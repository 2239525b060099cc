//! Joins the upstream lookups with the classifiers.
//!
//! City resolution can fail with [`ClimaError`]. Conditions never fail: a
//! degraded upstream call is replaced by its zero value and the report is
//! built from whatever is left.

use std::sync::Arc;

use tracing::instrument;

use crate::{
    classify::{classify_pollen, describe_weather, sport_advice},
    error::{ClimaError, FetchError},
    model::{CityCandidate, ConditionsReport, CurrentConditions, PollenReading},
    provider::WeatherProvider,
};

/// Pollen level handed to the advice rules. Pollen is not wired into them.
const ADVICE_POLLEN_LEVEL: u8 = 0;

#[derive(Debug, Clone)]
pub struct Aggregator {
    provider: Arc<dyn WeatherProvider>,
}

impl Aggregator {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// First geocoding match for `name`.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_city(&self, name: &str) -> Result<CityCandidate, ClimaError> {
        if name.is_empty() {
            return Err(ClimaError::InvalidInput("city name is empty".to_string()));
        }

        let geo = degrade("geocoding", self.provider.geocode(name).await);

        geo.results
            .into_iter()
            .next()
            .ok_or_else(|| ClimaError::NotFound(name.to_string()))
    }

    /// Best-effort conditions report for the given coordinates.
    #[instrument(skip(self), level = "info")]
    pub async fn conditions(&self, lat: &str, lon: &str) -> ConditionsReport {
        let (forecast, air) = tokio::join!(
            self.provider.forecast(lat, lon),
            self.provider.air_quality(lat, lon),
        );

        let current = CurrentConditions::from(degrade("forecast", forecast));
        let pollen = PollenReading::from(degrade("air quality", air));

        build_report(&current, &pollen)
    }
}

/// Derive the frontend payload from normalized readings.
pub fn build_report(current: &CurrentConditions, pollen: &PollenReading) -> ConditionsReport {
    let weather = describe_weather(current.weather_code, current.is_day);
    let pollen_level = classify_pollen(pollen);
    let uv = current.uv_today();
    let advice = sport_advice(
        current.temperature_c,
        current.precipitation_mm,
        current.wind_speed_kmh,
        uv,
        ADVICE_POLLEN_LEVEL,
    );

    ConditionsReport {
        temperature_c: current.temperature_c,
        feels_like_c: current.feels_like_c,
        humidity_pct: current.humidity_pct,
        uv,
        pollen: pollen_level.label().to_string(),
        description: weather.description.to_string(),
        icon: weather.icon.to_string(),
        advice: advice.text.to_string(),
        advice_kind: advice.kind,
    }
}

fn degrade<T: Default>(source: &str, result: Result<T, FetchError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(
            source,
            timeout = e.is_timeout(),
            error = %e,
            "Upstream degraded, using zero values"
        );
        T::default()
    })
}
