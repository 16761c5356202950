//! Response payloads returned to a calculator client


use serde::{Deserialize, Serialize};

/// Damage dealt by one attacker to the opposing defender
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamagePayload {
    pub min: u64,
    pub max: u64,
    pub stab: bool,
    pub crit: bool,
    pub effectiveness: f32,
}

/// Successful calculation.
///
/// Damage fields are indexed by attacker: `pokemon1_damage` is what
/// pokemon1's move does to pokemon2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResponse {
    pub pokemon1_damage: DamagePayload,
    pub pokemon2_damage: DamagePayload,
    pub pokemon1_faster: bool,

    #[serde(rename = "pokemon1_OHKO")]
    pub pokemon1_ohko: bool,

    #[serde(rename = "pokemon2_OHKO")]
    pub pokemon2_ohko: bool,

    pub pokemon1_win: u8,
    pub pokemon2_win: u8,
}

/// Failure category reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The request was not valid JSON or had the wrong shape
    Parse,
    /// A value was out of range or unknown; correct the input and resend
    Validation,
    /// Internal arithmetic failure on otherwise valid input
    Computation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
            ErrorKind::Computation => "computation",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

/// Structured failure; never carries a partial result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorPayload,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error: ErrorPayload {
                kind,
                message: message.into(),
            },
        }
    }
}
