use crate::model::PollenReading;

/// Severity band for the summed pollen concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PollenLevel {
    /// A total of exactly zero. Provider outages and genuinely pollen-free
    /// air both land here.
    Unavailable,
    Low,
    Medium,
    High,
}

impl PollenLevel {
    pub fn level(&self) -> u8 {
        match self {
            Self::Unavailable => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unavailable => "Indisponível 🚫",
            Self::Low => "Baixo ✅",
            Self::Medium => "Médio 🌾",
            Self::High => "Alto ⚠️",
        }
    }
}

pub fn classify_pollen(reading: &PollenReading) -> PollenLevel {
    let total = reading.total();

    if total == 0.0 {
        PollenLevel::Unavailable
    } else if total > 50.0 {
        PollenLevel::High
    } else if total > 20.0 {
        PollenLevel::Medium
    } else {
        PollenLevel::Low
    }
}
