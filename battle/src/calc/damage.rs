//! Damage range for one attacker against one defender

use matchup_protocol::DamagePayload;

use crate::error::ComputationError;
use crate::types::{FieldState, StatProfile};

/// Same-type attack bonus
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Applied only when the move is flagged critical
pub const CRITICAL_MULTIPLIER: f64 = 1.5;

/// Lowest damage roll as a percentage of the highest
pub const MIN_ROLL_PERCENT: f64 = 85.0;

/// Damage one combatant's move does to the other
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    pub min: u64,
    pub max: u64,
    pub stab: bool,
    pub crit: bool,
    /// One of 0, 0.25, 0.5, 1, 2, 4
    pub effectiveness: f32,
}

impl DamageResult {
    pub fn is_immune(&self) -> bool {
        self.effectiveness == 0.0
    }

    pub fn to_protocol(&self) -> DamagePayload {
        DamagePayload {
            min: self.min,
            max: self.max,
            stab: self.stab,
            crit: self.crit,
            effectiveness: self.effectiveness,
        }
    }
}

/// `floor(floor(floor(2*level/5 + 2) * power * offense/defense) / 50) + 2`,
/// in exact integer arithmetic
pub fn base_damage(
    level: u8,
    power: u32,
    offense: u32,
    defense: u32,
) -> Result<u64, ComputationError> {
    // 42 * u32::MAX * u32::MAX fits in u128, and the quotient fits in u64
    let level_factor = 2 * u128::from(level) / 5 + 2;
    let scaled = level_factor * u128::from(power) * u128::from(offense);

    u64::try_from(scaled / u128::from(defense.max(1)) / 50 + 2)
        .map_err(|_| ComputationError::Overflow("base damage"))
}

/// Compute the damage range for `attacker`'s move landing on `defender`
pub fn calculate(
    attacker: &StatProfile,
    defender: &StatProfile,
    field: &FieldState,
) -> Result<DamageResult, ComputationError> {
    let mov = attacker.chosen_move();
    let category = mov.category();

    let base = base_damage(
        attacker.level(),
        mov.power(),
        attacker.stat(category.offensive_stat()),
        defender.stat(category.defensive_stat()),
    )?;

    let stab = attacker.has_type(mov.move_type());
    let effectiveness = mov
        .move_type()
        .effectiveness_against(defender.primary_type(), defender.secondary_type());
    let crit = mov.is_critical();

    let mut modifier = 1.0;
    if stab {
        modifier *= STAB_MULTIPLIER;
    }
    modifier *= f64::from(effectiveness);
    if let Some(weather) = field.weather {
        modifier *= weather.damage_modifier(mov.move_type());
    }
    if crit {
        modifier *= CRITICAL_MULTIPLIER;
    }

    let modified = base as f64 * modifier;
    if !modified.is_finite() {
        return Err(ComputationError::NonFinite(modified));
    }

    let max = modified.floor().max(0.0) as u64;
    let min = (modified * MIN_ROLL_PERCENT / 100.0).floor().max(0.0) as u64;

    Ok(DamageResult {
        min,
        max,
        stab,
        crit,
        effectiveness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, Move, MoveCategory, Type, Weather};

    fn profile(primary: Type, secondary: Option<Type>, mov: Move) -> StatProfile {
        StatProfile::builder()
            .level(50)
            .types(primary, secondary)
            .stats(BaseStats::uniform(100))
            .with_move(mov)
            .build()
            .unwrap()
    }

    fn physical(t: Type, power: u32) -> Move {
        Move::new("Strike", t, MoveCategory::Physical, power).unwrap()
    }

    #[test]
    fn test_base_damage() {
        // floor(2*50/5 + 2) = 22; 22 * 80 = 1760; 1760 / 50 = 35; + 2
        assert_eq!(base_damage(50, 80, 100, 100), Ok(37));
        // floor(2*1/5 + 2) = 2; 2 * 10 * 5 / 500 = 0; 0 / 50 = 0; + 2
        assert_eq!(base_damage(1, 10, 5, 500), Ok(2));
        // 42 * 120 * 200 / 100 = 10080; / 50 = 201; + 2
        assert_eq!(base_damage(100, 120, 200, 100), Ok(203));
    }

    #[test]
    fn test_base_damage_extreme_values() {
        let expected = 42 * u128::from(u32::MAX) * u128::from(u32::MAX) / 50 + 2;
        assert_eq!(
            base_damage(100, u32::MAX, u32::MAX, 1).map(u128::from),
            Ok(expected)
        );
        assert_eq!(base_damage(1, 1, 1, u32::MAX), Ok(2));
    }

    #[test]
    fn test_extreme_stats_saturate_instead_of_failing() {
        let mut stats = BaseStats::uniform(1);
        stats.atk = u32::MAX;
        let attacker = StatProfile::builder()
            .level(100)
            .types(Type::Fire, None)
            .stats(stats)
            .with_move(
                Move::new("Strike", Type::Fire, MoveCategory::Physical, u32::MAX)
                    .unwrap()
                    .with_critical(true),
            )
            .build()
            .unwrap();
        let defender = profile(Type::Grass, Some(Type::Bug), physical(Type::Normal, 80));

        let field = FieldState::new().with_weather(Weather::Sun);
        let result = calculate(&attacker, &defender, &field).unwrap();

        assert!(result.min <= result.max);
        assert_eq!(result.max, u64::MAX);
        assert_eq!(result.effectiveness, 4.0);
    }

    #[test]
    fn test_neutral_hit() {
        let attacker = profile(Type::Normal, None, physical(Type::Water, 80));
        let defender = profile(Type::Normal, None, physical(Type::Water, 80));

        let result = calculate(&attacker, &defender, &FieldState::new()).unwrap();

        assert_eq!(result.max, 37);
        assert_eq!(result.min, 31);
        assert!(!result.stab);
        assert!(!result.crit);
        assert_eq!(result.effectiveness, 1.0);
    }

    #[test]
    fn test_stab_applies_to_either_type_and_any_category() {
        let special = Move::new("Surf", Type::Water, MoveCategory::Special, 80).unwrap();
        let attacker = profile(Type::Normal, Some(Type::Water), special);
        let defender = profile(Type::Normal, None, physical(Type::Normal, 80));

        let result = calculate(&attacker, &defender, &FieldState::new()).unwrap();

        assert!(result.stab);
        // 37 * 1.5 = 55.5
        assert_eq!(result.max, 55);
        assert_eq!(result.min, 47);
    }

    #[test]
    fn test_super_effective_stab_in_sun() {
        let attacker = profile(Type::Fire, None, physical(Type::Fire, 80));
        let defender = profile(Type::Grass, None, physical(Type::Grass, 80));

        let clear = calculate(&attacker, &defender, &FieldState::new()).unwrap();
        let sunny = calculate(
            &attacker,
            &defender,
            &FieldState::new().with_weather(Weather::Sun),
        )
        .unwrap();

        assert_eq!(clear.effectiveness, 2.0);
        assert!(clear.stab);
        // 37 * 1.5 * 2
        assert_eq!(clear.max, 111);
        // 37 * 1.5 * 2 * 1.5
        assert_eq!(sunny.max, 166);
        assert!(sunny.max > clear.max);
    }

    #[test]
    fn test_rain_weakens_fire() {
        let attacker = profile(Type::Fire, None, physical(Type::Fire, 80));
        let defender = profile(Type::Normal, None, physical(Type::Normal, 80));

        let rainy = calculate(
            &attacker,
            &defender,
            &FieldState::new().with_weather(Weather::Rain),
        )
        .unwrap();

        // 37 * 1.5 * 0.5 = 27.75
        assert_eq!(rainy.max, 27);
    }

    #[test]
    fn test_immune_target_takes_zero() {
        let attacker = profile(Type::Normal, None, physical(Type::Normal, 80));
        let defender = profile(Type::Ghost, None, physical(Type::Ghost, 80));

        let result = calculate(&attacker, &defender, &FieldState::new()).unwrap();

        assert!(result.is_immune());
        assert_eq!(result.min, 0);
        assert_eq!(result.max, 0);
    }

    #[test]
    fn test_critical_toggle() {
        let attacker = profile(Type::Normal, None, physical(Type::Water, 80).with_critical(true));
        let defender = profile(Type::Normal, None, physical(Type::Water, 80));

        let result = calculate(&attacker, &defender, &FieldState::new()).unwrap();

        assert!(result.crit);
        // 37 * 1.5 = 55.5
        assert_eq!(result.max, 55);
    }

    #[test]
    fn test_special_uses_special_stats() {
        let mov = Move::new("Psybeam", Type::Psychic, MoveCategory::Special, 65).unwrap();
        let attacker = StatProfile::builder()
            .level(50)
            .types(Type::Normal, None)
            .stats(BaseStats {
                hp: 100,
                atk: 10,
                def: 100,
                spa: 150,
                spd: 100,
                spe: 100,
            })
            .with_move(mov)
            .build()
            .unwrap();
        let defender = StatProfile::builder()
            .level(50)
            .types(Type::Normal, None)
            .stats(BaseStats {
                hp: 100,
                atk: 100,
                def: 10,
                spa: 100,
                spd: 75,
                spe: 100,
            })
            .with_move(physical(Type::Normal, 40))
            .build()
            .unwrap();

        let result = calculate(&attacker, &defender, &FieldState::new()).unwrap();

        // 22 * 65 * 150 / 75 = 2860; / 50 = 57; + 2
        assert_eq!(result.max, 59);
        assert_eq!(result.min, 50);
    }

    #[test]
    fn test_range_invariants_over_types() {
        for attack_type in Type::all() {
            for defend_type in Type::all() {
                let attacker = profile(Type::Dragon, None, physical(*attack_type, 90));
                let defender = profile(*defend_type, None, physical(Type::Normal, 40));
                let result = calculate(&attacker, &defender, &FieldState::new()).unwrap();

                assert!(result.min <= result.max);
                assert_eq!(result.stab, *attack_type == Type::Dragon);
                assert_eq!(result.max == 0, result.effectiveness == 0.0);
            }
        }
    }

    #[test]
    fn test_to_protocol() {
        let result = DamageResult {
            min: 10,
            max: 12,
            stab: true,
            crit: false,
            effectiveness: 0.5,
        };
        let payload = result.to_protocol();
        assert_eq!(payload.min, 10);
        assert_eq!(payload.max, 12);
        assert!(payload.stab);
        assert_eq!(payload.effectiveness, 0.5);
    }
}
