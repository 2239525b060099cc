/// Description and icon for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSummary {
    pub description: &'static str,
    pub icon: &'static str,
}

impl WeatherSummary {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

const CLOUDY: WeatherSummary = WeatherSummary::new("Nublado", "☁️");

/// See: https://open-meteo.com/en/docs#weathervariables
pub fn describe_weather(code: i32, is_day: bool) -> WeatherSummary {
    match code {
        0 if is_day => WeatherSummary::new("Céu Limpo", "☀️"),
        0 => WeatherSummary::new("Céu Limpo", "🌙"),
        1..=3 => CLOUDY,
        45 | 48 => WeatherSummary::new("Nevoeiro", "🌫️"),
        51 | 53 | 55 | 61 | 63 | 65 => WeatherSummary::new("Chuva", "🌧️"),
        80..=82 => WeatherSummary::new("Pancadas", "🌦️"),
        95 | 96 | 99 => WeatherSummary::new("Tempestade", "⚡"),
        // Unmapped codes (snow, drizzle variants, ...) fall back to cloudy.
        _ => CLOUDY,
    }
}
