//! Error taxonomy for the engine

use matchup_protocol::ErrorKind;
use thiserror::Error;

use crate::types::{Side, Stat, Type};

/// Malformed or out-of-range input. Raised before any calculation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("level {0} is outside 1-100")]
    LevelOutOfRange(i64),

    #[error("{stat} must be a positive integer, got {value}")]
    InvalidStat { stat: Stat, value: i64 },

    #[error("move power must be a positive integer, got {0}")]
    InvalidPower(i64),

    #[error("unknown type: {0:?}")]
    UnknownType(String),

    #[error("secondary type {0} must differ from primary type")]
    DuplicateType(Type),

    #[error("unknown move category: {0:?}")]
    UnknownCategory(String),

    #[error("unknown weather: {0:?}")]
    UnknownWeather(String),

    #[error("unknown hazard: {0:?}")]
    UnknownHazard(String),

    #[error("unknown tailwind side: {0:?}")]
    UnknownTailwind(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Arithmetic failure on validated input. Indicates a defect, not bad input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    #[error("{0} overflowed")]
    Overflow(&'static str),

    #[error("damage modifier produced a non-finite value: {0}")]
    NonFinite(f64),
}

/// Anything that stops a request from producing a result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("{side}: {source}")]
    InvalidCombatant {
        side: Side,
        #[source]
        source: ValidationError,
    },

    #[error("fieldConditions: {0}")]
    InvalidField(#[source] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl EngineError {
    /// Category reported on the wire
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidCombatant { .. } | EngineError::InvalidField(_) => {
                ErrorKind::Validation
            }
            EngineError::Computation(_) => ErrorKind::Computation,
        }
    }
}
