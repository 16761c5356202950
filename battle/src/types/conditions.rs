//! Weather and entry hazards

use super::pokemon_type::Type;
use crate::error::ValidationError;

/// Multiplier applied to a boosted move type under weather
pub const WEATHER_BOOST: f64 = 1.5;

/// Multiplier applied to a weakened move type under weather
pub const WEATHER_PENALTY: f64 = 0.5;

/// Lowercase and drop separators so `"Stealth Rock"`, `"stealth_rock"` and
/// `"stealth-rock"` compare equal
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

impl Weather {
    /// Parse from a form value. Empty and `"none"` mean no weather.
    pub fn from_protocol(s: &str) -> Result<Option<Self>, ValidationError> {
        match normalize(s).as_str() {
            "sun" | "sunnyday" | "harshsunlight" => Ok(Some(Weather::Sun)),
            "rain" | "raindance" => Ok(Some(Weather::Rain)),
            "sand" | "sandstorm" => Ok(Some(Weather::Sand)),
            "hail" => Ok(Some(Weather::Hail)),
            "none" | "" => Ok(None),
            _ => Err(ValidationError::UnknownWeather(s.to_string())),
        }
    }

    /// Damage multiplier for a move of the given type.
    ///
    /// Sun boosts Fire and weakens Water, Rain does the reverse. Sand and
    /// Hail have no offensive effect.
    pub fn damage_modifier(&self, move_type: Type) -> f64 {
        match (self, move_type) {
            (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => WEATHER_BOOST,
            (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => WEATHER_PENALTY,
            _ => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
            Weather::Hail => "Hail",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry hazard class on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    StealthRock,
    Spikes,
    ToxicSpikes,
}

impl Hazard {
    /// Parse from a form value. Empty and `"none"` mean no hazard.
    pub fn from_protocol(s: &str) -> Result<Option<Self>, ValidationError> {
        match normalize(s).as_str() {
            "stealthrock" => Ok(Some(Hazard::StealthRock)),
            "spikes" => Ok(Some(Hazard::Spikes)),
            "toxicspikes" => Ok(Some(Hazard::ToxicSpikes)),
            "none" | "" => Ok(None),
            _ => Err(ValidationError::UnknownHazard(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hazard::StealthRock => "Stealth Rock",
            Hazard::Spikes => "Spikes",
            Hazard::ToxicSpikes => "Toxic Spikes",
        }
    }
}

impl std::fmt::Display for Hazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
