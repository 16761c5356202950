//! Request-to-response orchestration

use matchup_protocol::{CalcRequest, CalcResponse};

use crate::calc::{DamageResult, damage, outcome, speed};
use crate::error::{ComputationError, EngineError};
use crate::types::{FieldState, Side, StatProfile};

/// Both combatants and the field, validated and ready to calculate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub pokemon1: StatProfile,
    pub pokemon2: StatProfile,
    pub field: FieldState,
}

impl Matchup {
    pub fn new(pokemon1: StatProfile, pokemon2: StatProfile, field: FieldState) -> Self {
        Self {
            pokemon1,
            pokemon2,
            field,
        }
    }

    /// Validate a request. Fails on the first invalid combatant or field value.
    pub fn from_protocol(request: &CalcRequest) -> Result<Self, EngineError> {
        let pokemon1 = StatProfile::from_protocol(&request.pokemon1).map_err(|source| {
            EngineError::InvalidCombatant {
                side: Side::P1,
                source,
            }
        })?;
        let pokemon2 = StatProfile::from_protocol(&request.pokemon2).map_err(|source| {
            EngineError::InvalidCombatant {
                side: Side::P2,
                source,
            }
        })?;
        let field =
            FieldState::from_protocol(&request.field_conditions).map_err(EngineError::InvalidField)?;

        Ok(Self::new(pokemon1, pokemon2, field))
    }

    pub fn profile(&self, side: Side) -> &StatProfile {
        match side {
            Side::P1 => &self.pokemon1,
            Side::P2 => &self.pokemon2,
        }
    }
}

/// Result of one calculation.
///
/// Damage is indexed by attacker: `pokemon1_damage` is pokemon1's move
/// landing on pokemon2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattleResult {
    pub pokemon1_damage: DamageResult,
    pub pokemon2_damage: DamageResult,
    pub pokemon1_faster: bool,
    pub pokemon1_ohko: bool,
    pub pokemon2_ohko: bool,
    pub pokemon1_win: u8,
    pub pokemon2_win: u8,
}

impl BattleResult {
    pub fn to_protocol(&self) -> CalcResponse {
        CalcResponse {
            pokemon1_damage: self.pokemon1_damage.to_protocol(),
            pokemon2_damage: self.pokemon2_damage.to_protocol(),
            pokemon1_faster: self.pokemon1_faster,
            pokemon1_ohko: self.pokemon1_ohko,
            pokemon2_ohko: self.pokemon2_ohko,
            pokemon1_win: self.pokemon1_win,
            pokemon2_win: self.pokemon2_win,
        }
    }
}

/// Stateless battle outcome engine.
///
/// Holds no data, so one instance can be shared freely across threads and
/// identical inputs always give identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct BattleEngine;

impl BattleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run all three stages on a validated matchup
    pub fn calculate(&self, matchup: &Matchup) -> Result<BattleResult, ComputationError> {
        let Matchup {
            pokemon1,
            pokemon2,
            field,
        } = matchup;

        for side in [Side::P1, Side::P2] {
            log_unevaluated_labels(side, matchup.profile(side));
        }
        if let Some(weather) = field.weather {
            tracing::debug!(weather = %weather, "Weather active");
        }
        if let Some(hazard) = field.hazard {
            tracing::debug!(hazard = %hazard, "Hazard set, no effect on a single exchange");
        }

        let pokemon1_damage = damage_from(matchup, Side::P1)?;
        let pokemon2_damage = damage_from(matchup, Side::P2)?;

        let pokemon1_faster = speed::p1_acts_first(pokemon1, pokemon2, field);
        tracing::debug!(
            p1_speed = speed::effective_speed(pokemon1, Side::P1, field),
            p2_speed = speed::effective_speed(pokemon2, Side::P2, field),
            trick_room = field.trick_room,
            tailwind = ?field.tailwind,
            pokemon1_faster,
            "Move order resolved"
        );

        let result = outcome::evaluate(
            pokemon1,
            pokemon2,
            &pokemon1_damage,
            &pokemon2_damage,
            pokemon1_faster,
        );
        tracing::debug!(
            favoured = %result.favoured(),
            p1_win = result.p1_win,
            p2_win = result.p2_win,
            "Outcome evaluated"
        );

        Ok(BattleResult {
            pokemon1_damage,
            pokemon2_damage,
            pokemon1_faster,
            pokemon1_ohko: result.p1_ohko,
            pokemon2_ohko: result.p2_ohko,
            pokemon1_win: result.p1_win,
            pokemon2_win: result.p2_win,
        })
    }

    /// Validate a wire request and calculate it
    pub fn handle(&self, request: &CalcRequest) -> Result<CalcResponse, EngineError> {
        let matchup = Matchup::from_protocol(request).inspect_err(|e| {
            tracing::debug!(error = %e, "Request rejected");
        })?;
        let result = self.calculate(&matchup)?;
        Ok(result.to_protocol())
    }
}

/// `attacker`'s move landing on the opposing combatant
fn damage_from(matchup: &Matchup, attacker: Side) -> Result<DamageResult, ComputationError> {
    let profile = matchup.profile(attacker);
    let result = damage::calculate(profile, matchup.profile(attacker.opponent()), &matchup.field)
        .inspect_err(|e| log_defect(attacker, e))?;

    tracing::debug!(
        attacker = %attacker,
        move_name = profile.chosen_move().name(),
        min = result.min,
        max = result.max,
        effectiveness = result.effectiveness,
        immune = result.is_immune(),
        "Damage calculated"
    );

    Ok(result)
}

fn log_defect(attacker: Side, error: &ComputationError) {
    tracing::error!(
        attacker = %attacker,
        error = %error,
        "Damage computation failed on validated input"
    );
}

fn log_unevaluated_labels(side: Side, profile: &StatProfile) {
    if profile.ability().is_some() || profile.item().is_some() || profile.condition().is_some() {
        tracing::debug!(
            side = %side,
            ability = profile.ability(),
            item = profile.item(),
            condition = profile.condition(),
            "Labels carried but not evaluated"
        );
    }
}
