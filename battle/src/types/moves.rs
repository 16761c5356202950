//! The single move each combatant brings

use super::conditions::normalize;
use super::pokemon_type::Type;
use super::stats::Stat;
use crate::error::ValidationError;

/// Whether a move hits with Attack/Defense or Sp. Atk/Sp. Def
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    Physical,
    Special,
}

impl MoveCategory {
    pub fn from_protocol(s: &str) -> Result<Self, ValidationError> {
        match normalize(s).as_str() {
            "physical" => Ok(MoveCategory::Physical),
            "special" => Ok(MoveCategory::Special),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }

    /// Attacker stat used by this category
    pub fn offensive_stat(&self) -> Stat {
        match self {
            MoveCategory::Physical => Stat::Atk,
            MoveCategory::Special => Stat::Spa,
        }
    }

    /// Defender stat used by this category
    pub fn defensive_stat(&self) -> Stat {
        match self {
            MoveCategory::Physical => Stat::Def,
            MoveCategory::Special => Stat::Spd,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
        }
    }
}

impl std::fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Move descriptor: type, category and base power.
///
/// The name is a label only. `critical` forces the critical-hit multiplier;
/// there is no random roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    name: String,
    move_type: Type,
    category: MoveCategory,
    power: u32,
    critical: bool,
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        move_type: Type,
        category: MoveCategory,
        power: u32,
    ) -> Result<Self, ValidationError> {
        if power == 0 {
            return Err(ValidationError::InvalidPower(0));
        }

        Ok(Self {
            name: name.into(),
            move_type,
            category,
            power,
            critical: false,
        })
    }

    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn move_type(&self) -> Type {
        self.move_type
    }

    pub fn category(&self) -> MoveCategory {
        self.category
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn is_critical(&self) -> bool {
        self.critical
    }
}

/// Convert a raw form value into move power
pub fn positive_power(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(ValidationError::InvalidPower(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_protocol() {
        assert_eq!(MoveCategory::from_protocol("physical"), Ok(MoveCategory::Physical));
        assert_eq!(MoveCategory::from_protocol("Special"), Ok(MoveCategory::Special));
        assert_eq!(
            MoveCategory::from_protocol("status"),
            Err(ValidationError::UnknownCategory("status".to_string()))
        );
    }

    #[test]
    fn test_category_stats() {
        assert_eq!(MoveCategory::Physical.offensive_stat(), Stat::Atk);
        assert_eq!(MoveCategory::Physical.defensive_stat(), Stat::Def);
        assert_eq!(MoveCategory::Special.offensive_stat(), Stat::Spa);
        assert_eq!(MoveCategory::Special.defensive_stat(), Stat::Spd);
    }

    #[test]
    fn test_move_new() {
        let mov = Move::new("Flamethrower", Type::Fire, MoveCategory::Special, 90).unwrap();
        assert_eq!(mov.name(), "Flamethrower");
        assert_eq!(mov.move_type(), Type::Fire);
        assert_eq!(mov.category(), MoveCategory::Special);
        assert_eq!(mov.power(), 90);
        assert!(!mov.is_critical());
        assert!(mov.with_critical(true).is_critical());
    }

    #[test]
    fn test_move_rejects_zero_power() {
        assert_eq!(
            Move::new("Splash", Type::Normal, MoveCategory::Physical, 0),
            Err(ValidationError::InvalidPower(0))
        );
    }

    #[test]
    fn test_positive_power() {
        assert_eq!(positive_power(80), Ok(80));
        assert_eq!(positive_power(0), Err(ValidationError::InvalidPower(0)));
        assert_eq!(positive_power(-40), Err(ValidationError::InvalidPower(-40)));
    }
}
