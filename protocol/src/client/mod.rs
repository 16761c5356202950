//! Request payloads sent by a calculator client


use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Move power used when a payload omits `move_power`
pub const DEFAULT_MOVE_POWER: i64 = 80;

/// Move name used when a payload omits `move_name`
pub const DEFAULT_MOVE_NAME: &str = "Attack";

/// One calculation request: two combatants and the shared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcRequest {
    pub pokemon1: PokemonPayload,
    pub pokemon2: PokemonPayload,

    #[serde(rename = "fieldConditions", default)]
    pub field_conditions: FieldConditionsPayload,
}

/// Raw combatant values as the form submits them.
///
/// Integers are kept signed and strings unparsed so that out-of-range or
/// unknown values reach validation and are reported by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPayload {
    pub level: i64,

    #[serde(default)]
    pub ability: String,

    pub type1: String,

    /// Absent, `null` and `""` all mean single-typed
    #[serde(default)]
    pub type2: Option<String>,

    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub sp_atk: i64,
    pub sp_def: i64,
    pub speed: i64,

    #[serde(default)]
    pub item: String,

    #[serde(default)]
    pub condition: String,

    #[serde(default = "default_move_name")]
    pub move_name: String,

    pub move_type: String,
    pub move_category: String,

    #[serde(default = "default_move_power")]
    pub move_power: i64,

    /// Force a critical hit for this combatant's attack
    #[serde(default)]
    pub crit: bool,
}

fn default_move_name() -> String {
    DEFAULT_MOVE_NAME.to_string()
}

fn default_move_power() -> i64 {
    DEFAULT_MOVE_POWER
}

/// Shared field conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConditionsPayload {
    #[serde(default)]
    pub weather: String,

    #[serde(default)]
    pub hazards: String,

    #[serde(default, alias = "trick_room")]
    pub trickroom: bool,

    /// `"p1"`, `"p2"` or `null`
    #[serde(default)]
    pub tailwind: Option<String>,
}

impl PokemonPayload {
    /// Second type with the form's empty-string placeholder folded into `None`
    pub fn secondary_type(&self) -> Option<&str> {
        self.type2
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Parse a JSON request document
pub fn parse_request(json: &str) -> Result<CalcRequest> {
    let json = json.trim();
    if json.is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidFormat("request must be a JSON object".to_string()))?;

    for field in ["pokemon1", "pokemon2"] {
        if !object.contains_key(field) {
            return Err(ParseError::MissingField(field.to_string()).into());
        }
    }

    let request =
        serde_json::from_value(value).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    Ok(request)
}
