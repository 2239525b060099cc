use serde::{Deserialize, Serialize};

/// Category tag the frontend uses to colour the advice box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    /// Danger.
    Perigo,
    /// Caution.
    Atencao,
    /// Good.
    Bom,
}

impl AdviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perigo => "perigo",
            Self::Atencao => "atencao",
            Self::Bom => "bom",
        }
    }
}

impl std::fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub text: &'static str,
    pub kind: AdviceKind,
}

impl Advice {
    const fn new(text: &'static str, kind: AdviceKind) -> Self {
        Self { text, kind }
    }
}

/// Outdoor training recommendation. Rules are checked in order and the
/// first match wins, so rain always beats heat, UV and wind.
///
/// `_pollen_level` is accepted but not part of any rule yet.
pub fn sport_advice(
    temperature_c: f64,
    precipitation_mm: f64,
    wind_speed_kmh: f64,
    uv_index: f64,
    _pollen_level: u8,
) -> Advice {
    if precipitation_mm >= 2.0 {
        return Advice::new("🌧️ Chuva Forte: Evite treino outdoor.", AdviceKind::Perigo);
    }
    if precipitation_mm > 0.1 {
        return Advice::new("🌦️ Chuva Leve: Cuidado com piso liso.", AdviceKind::Atencao);
    }
    if temperature_c > 32.0 {
        return Advice::new("🔥 Calor Extremo: Hidrate-se muito.", AdviceKind::Perigo);
    }
    if uv_index >= 8.0 {
        return Advice::new("☀️ UV Crítico: Use proteção total.", AdviceKind::Perigo);
    }
    if wind_speed_kmh > 35.0 {
        return Advice::new("💨 Ventania: Risco de acidentes.", AdviceKind::Perigo);
    }
    Advice::new("✅ Condições Perfeitas para treino!", AdviceKind::Bom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_conditions() {
        let advice = sport_advice(20.0, 0.0, 10.0, 3.0, 0);
        assert_eq!(advice.text, "✅ Condições Perfeitas para treino!");
        assert_eq!(advice.kind, AdviceKind::Bom);
    }

    #[test]
    fn heavy_rain_wins_regardless_of_other_inputs() {
        let advice = sport_advice(40.0, 3.0, 80.0, 11.0, 3);
        assert!(advice.text.contains("Chuva Forte"));
        assert_eq!(advice.kind, AdviceKind::Perigo);
    }

    #[test]
    fn heavy_rain_checked_before_heat() {
        let advice = sport_advice(35.0, 2.0, 0.0, 0.0, 0);
        assert!(advice.text.contains("Chuva Forte"));
    }

    #[test]
    fn light_rain_is_caution() {
        let advice = sport_advice(35.0, 0.5, 50.0, 9.0, 0);
        assert!(advice.text.contains("Chuva Leve"));
        assert_eq!(advice.kind, AdviceKind::Atencao);
    }

    #[test]
    fn drizzle_at_threshold_is_ignored() {
        let advice = sport_advice(20.0, 0.1, 0.0, 0.0, 0);
        assert_eq!(advice.kind, AdviceKind::Bom);
    }

    #[test]
    fn heat_beats_uv_and_wind() {
        let advice = sport_advice(32.5, 0.0, 50.0, 10.0, 0);
        assert!(advice.text.contains("Calor Extremo"));
        assert_eq!(advice.kind, AdviceKind::Perigo);
    }

    #[test]
    fn thirty_two_degrees_is_not_extreme() {
        assert_eq!(sport_advice(32.0, 0.0, 0.0, 0.0, 0).kind, AdviceKind::Bom);
    }

    #[test]
    fn uv_eight_is_critical() {
        let advice = sport_advice(25.0, 0.0, 50.0, 8.0, 0);
        assert!(advice.text.contains("UV Crítico"));
    }

    #[test]
    fn strong_wind_is_danger() {
        let advice = sport_advice(25.0, 0.0, 35.1, 7.9, 0);
        assert!(advice.text.contains("Ventania"));
        assert_eq!(advice.kind, AdviceKind::Perigo);
        assert_eq!(sport_advice(25.0, 0.0, 35.0, 7.9, 0).kind, AdviceKind::Bom);
    }

    #[test]
    fn pollen_level_does_not_change_outcome() {
        for level in 0..=3 {
            assert_eq!(sport_advice(20.0, 0.0, 10.0, 3.0, level), sport_advice(20.0, 0.0, 10.0, 3.0, 0));
        }
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AdviceKind::Atencao).expect("serialize"), "\"atencao\"");
        assert_eq!(AdviceKind::Perigo.to_string(), "perigo");
    }
}
