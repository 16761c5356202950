//! Base stats

use crate::error::ValidationError;

/// The six battle stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    /// Request field name for this stat
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Atk => "attack",
            Stat::Def => "defense",
            Stat::Spa => "sp_atk",
            Stat::Spd => "sp_def",
            Stat::Spe => "speed",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Battle-relevant stat values for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl BaseStats {
    /// Same value for every stat
    pub fn uniform(value: u32) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Get value for a stat
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Reject any zero stat
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Stat::ALL.iter().find(|stat| self.get(**stat) == 0) {
            Some(stat) => Err(ValidationError::InvalidStat {
                stat: *stat,
                value: 0,
            }),
            None => Ok(()),
        }
    }
}

/// Convert a raw form value into a stat, rejecting zero, negatives and
/// anything past `u32::MAX`
pub fn positive_stat(stat: Stat, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(ValidationError::InvalidStat { stat, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let mut stats = BaseStats::uniform(100);
        stats.atk = 130;
        stats.spe = 45;
        assert_eq!(stats.get(Stat::Atk), 130);
        assert_eq!(stats.get(Stat::Def), 100);
        assert_eq!(stats.get(Stat::Spe), 45);
    }

    #[test]
    fn test_validate() {
        assert!(BaseStats::uniform(1).validate().is_ok());

        let mut stats = BaseStats::uniform(100);
        stats.spd = 0;
        assert_eq!(
            stats.validate(),
            Err(ValidationError::InvalidStat {
                stat: Stat::Spd,
                value: 0
            })
        );
    }

    #[test]
    fn test_positive_stat() {
        assert_eq!(positive_stat(Stat::Hp, 150), Ok(150));
        assert_eq!(positive_stat(Stat::Hp, 1), Ok(1));
        assert_eq!(
            positive_stat(Stat::Atk, 0),
            Err(ValidationError::InvalidStat {
                stat: Stat::Atk,
                value: 0
            })
        );
        assert!(positive_stat(Stat::Def, -5).is_err());
        assert!(positive_stat(Stat::Spe, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_stat_names_match_request_fields() {
        let names: Vec<&str> = Stat::ALL.iter().map(Stat::as_str).collect();
        assert_eq!(names, ["hp", "attack", "defense", "sp_atk", "sp_def", "speed"]);
    }
}
