//! Shared field conditions

use matchup_protocol::FieldConditionsPayload;

use super::conditions::{Hazard, Weather};
use super::side::Side;
use crate::error::ValidationError;

/// Field conditions shared by both combatants.
///
/// Each slot holds at most one value, so "two weathers at once" or
/// "tailwind on both sides" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current weather condition
    pub weather: Option<Weather>,

    /// Entry hazard class in play
    pub hazard: Option<Hazard>,

    /// Trick Room active (slower Pokemon move first)
    pub trick_room: bool,

    /// Side whose speed is doubled by Tailwind
    pub tailwind: Option<Side>,
}

impl FieldState {
    /// Create a new empty field state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_hazard(mut self, hazard: Hazard) -> Self {
        self.hazard = Some(hazard);
        self
    }

    pub fn with_trick_room(mut self, active: bool) -> Self {
        self.trick_room = active;
        self
    }

    pub fn with_tailwind(mut self, side: Side) -> Self {
        self.tailwind = Some(side);
        self
    }

    /// Normalize the form's field conditions
    pub fn from_protocol(payload: &FieldConditionsPayload) -> Result<Self, ValidationError> {
        let tailwind = match payload.tailwind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(side) => Some(
                Side::from_protocol(side)
                    .ok_or_else(|| ValidationError::UnknownTailwind(side.to_string()))?,
            ),
        };

        Ok(Self {
            weather: Weather::from_protocol(&payload.weather)?,
            hazard: Hazard::from_protocol(&payload.hazards)?,
            trick_room: payload.trickroom,
            tailwind,
        })
    }

    /// Check whether Tailwind is boosting the given side
    pub fn has_tailwind(&self, side: Side) -> bool {
        self.tailwind == Some(side)
    }
}
