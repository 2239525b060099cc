use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::AdviceKind;

/// One geocoding match, handed to the frontend as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CityCandidate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default, rename = "admin1")]
    pub region: String,
    #[serde(default)]
    pub country: String,
}

/// Current weather snapshot plus the daily UV maxima.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: i32,
    pub weather_code: i32,
    pub is_day: bool,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub uv_index_max: Vec<f64>,
}

impl CurrentConditions {
    /// Today's UV maximum, or 0.0 when the forecast carried no days.
    pub fn uv_today(&self) -> f64 {
        self.uv_index_max.first().copied().unwrap_or(0.0)
    }
}

/// Pollen concentrations in provider units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PollenReading {
    pub birch: f64,
    pub grass: f64,
    pub olive: f64,
    pub ragweed: f64,
}

impl PollenReading {
    pub fn total(&self) -> f64 {
        self.birch + self.grass + self.olive + self.ragweed
    }
}

/// Payload returned by `/api/clima`. Field names follow the frontend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsReport {
    #[serde(rename = "temp")]
    pub temperature_c: f64,
    #[serde(rename = "sensacao")]
    pub feels_like_c: f64,
    #[serde(rename = "umidade")]
    pub humidity_pct: i32,
    pub uv: f64,
    #[serde(rename = "polen")]
    pub pollen: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "icone")]
    pub icon: String,
    #[serde(rename = "dica")]
    pub advice: String,
    #[serde(rename = "tipo_dica")]
    pub advice_kind: AdviceKind,
}

/// Raw geocoding response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<CityCandidate>,
}

/// Raw forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: ForecastCurrent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily: ForecastDaily,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastCurrent {
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_2m: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub relative_humidity_2m: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub weather_code: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_day: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub precipitation: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed_10m: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastDaily {
    #[serde(deserialize_with = "null_entries_as_zero")]
    pub uv_index_max: Vec<f64>,
}

impl From<ForecastResponse> for CurrentConditions {
    fn from(raw: ForecastResponse) -> Self {
        let current = raw.current;
        Self {
            temperature_c: current.temperature_2m,
            feels_like_c: current.apparent_temperature,
            humidity_pct: current.relative_humidity_2m,
            weather_code: current.weather_code,
            is_day: current.is_day == 1,
            precipitation_mm: current.precipitation,
            wind_speed_kmh: current.wind_speed_10m,
            uv_index_max: raw.daily.uv_index_max,
        }
    }
}

/// Raw air-quality response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirQualityResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: AirQualityCurrent,
}

/// Species outside the provider's coverage area come back as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirQualityCurrent {
    #[serde(deserialize_with = "null_as_default")]
    pub birch_pollen: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub grass_pollen: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub olive_pollen: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ragweed_pollen: f64,
}

/// A `null` value leaves the field at its zero value, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_entries_as_zero<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.unwrap_or(0.0))
        .collect())
}

impl From<AirQualityResponse> for PollenReading {
    fn from(raw: AirQualityResponse) -> Self {
        let current = raw.current;
        Self {
            birch: current.birch_pollen,
            grass: current.grass_pollen,
            olive: current.olive_pollen,
            ragweed: current.ragweed_pollen,
        }
    }
}
