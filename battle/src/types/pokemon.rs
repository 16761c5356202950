//! Combatant profiles

use matchup_protocol::PokemonPayload;

use super::moves::{Move, MoveCategory, positive_power};
use super::pokemon_type::Type;
use super::stats::{BaseStats, Stat, positive_stat};
use crate::error::ValidationError;

/// Everything the engine needs to know about one combatant.
///
/// Only constructible through [`StatProfileBuilder`], so a profile always
/// has a level in 1-100, positive stats, and distinct types. Ability,
/// item and condition are carried as labels and not evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatProfile {
    level: u8,
    primary_type: Type,
    secondary_type: Option<Type>,
    stats: BaseStats,
    mov: Move,
    ability: Option<String>,
    item: Option<String>,
    condition: Option<String>,
}

impl StatProfile {
    pub fn builder() -> StatProfileBuilder {
        StatProfileBuilder::default()
    }

    /// Normalize and validate a form submission
    pub fn from_protocol(payload: &PokemonPayload) -> Result<Self, ValidationError> {
        let level = u8::try_from(payload.level)
            .map_err(|_| ValidationError::LevelOutOfRange(payload.level))?;

        let primary: Type = payload.type1.parse()?;
        let secondary = payload
            .secondary_type()
            .map(str::parse::<Type>)
            .transpose()?;

        let stats = BaseStats {
            hp: positive_stat(Stat::Hp, payload.hp)?,
            atk: positive_stat(Stat::Atk, payload.attack)?,
            def: positive_stat(Stat::Def, payload.defense)?,
            spa: positive_stat(Stat::Spa, payload.sp_atk)?,
            spd: positive_stat(Stat::Spd, payload.sp_def)?,
            spe: positive_stat(Stat::Spe, payload.speed)?,
        };

        let mov = Move::new(
            payload.move_name.as_str(),
            payload.move_type.parse()?,
            MoveCategory::from_protocol(&payload.move_category)?,
            positive_power(payload.move_power)?,
        )?
        .with_critical(payload.crit);

        Self::builder()
            .level(level)
            .types(primary, secondary)
            .stats(stats)
            .with_move(mov)
            .ability(&payload.ability)
            .item(&payload.item)
            .condition(&payload.condition)
            .build()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn primary_type(&self) -> Type {
        self.primary_type
    }

    pub fn secondary_type(&self) -> Option<Type> {
        self.secondary_type
    }

    /// Check whether either of this combatant's types matches
    pub fn has_type(&self, t: Type) -> bool {
        self.primary_type == t || self.secondary_type == Some(t)
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats.get(stat)
    }

    pub fn hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn speed(&self) -> u32 {
        self.stats.spe
    }

    pub fn chosen_move(&self) -> &Move {
        &self.mov
    }

    pub fn ability(&self) -> Option<&str> {
        self.ability.as_deref()
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }
}

/// Builder for [`StatProfile`]; `build` performs all validation
#[derive(Debug, Clone, Default)]
pub struct StatProfileBuilder {
    level: Option<u8>,
    types: Option<(Type, Option<Type>)>,
    stats: Option<BaseStats>,
    mov: Option<Move>,
    ability: Option<String>,
    item: Option<String>,
    condition: Option<String>,
}

impl StatProfileBuilder {
    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn types(mut self, primary: Type, secondary: Option<Type>) -> Self {
        self.types = Some((primary, secondary));
        self
    }

    pub fn stats(mut self, stats: BaseStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_move(mut self, mov: Move) -> Self {
        self.mov = Some(mov);
        self
    }

    /// Empty labels are treated as absent
    pub fn ability(mut self, ability: &str) -> Self {
        self.ability = label(ability);
        self
    }

    pub fn item(mut self, item: &str) -> Self {
        self.item = label(item);
        self
    }

    pub fn condition(mut self, condition: &str) -> Self {
        self.condition = label(condition);
        self
    }

    pub fn build(self) -> Result<StatProfile, ValidationError> {
        let level = self.level.ok_or(ValidationError::MissingField("level"))?;
        if !(1..=100).contains(&level) {
            return Err(ValidationError::LevelOutOfRange(i64::from(level)));
        }

        let (primary_type, secondary_type) =
            self.types.ok_or(ValidationError::MissingField("type1"))?;
        if secondary_type == Some(primary_type) {
            return Err(ValidationError::DuplicateType(primary_type));
        }

        let stats = self.stats.ok_or(ValidationError::MissingField("stats"))?;
        stats.validate()?;

        let mov = self.mov.ok_or(ValidationError::MissingField("move"))?;

        Ok(StatProfile {
            level,
            primary_type,
            secondary_type,
            stats,
            mov,
            ability: self.ability,
            item: self.item,
            condition: self.condition,
        })
    }
}

fn label(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
