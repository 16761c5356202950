//! Deterministic battle outcome engine.
//!
//! Given two combatant profiles and the shared field, computes each side's
//! damage range, who moves first, whether either side can knock the other
//! out in one hit, and a win-probability split.
//!
//! # Overview
//!
//! ```text
//! matchup-protocol (wire format)
//!        │
//!        ▼
//! matchup-battle (validation + calculation) ← THIS CRATE
//!        │
//!        └─> matchup-cli (batch runner)
//! ```
//!
//! A request flows through three stages, all pure functions:
//!
//! 1. [`calc::damage`] runs twice, pokemon1 → pokemon2 and pokemon2 → pokemon1
//! 2. [`calc::speed`] decides who acts first
//! 3. [`calc::outcome`] derives OHKO flags and the win split
//!
//! [`BattleEngine`] strings them together.
//!
//! # Main Types
//!
//! - [`Type`] and [`TYPE_CHART`] - the 18 types and their effectiveness chart
//! - [`StatProfile`] - one validated combatant, built via [`StatProfileBuilder`]
//! - [`FieldState`] - weather, hazard, Trick Room and Tailwind
//! - [`DamageResult`], [`BattleResult`] - calculation output
//! - [`ValidationError`], [`ComputationError`], [`EngineError`] - failures
//!
//! # Example Usage
//!
//! ```
//! use matchup_battle::{
//!     BaseStats, BattleEngine, FieldState, Matchup, Move, MoveCategory, StatProfile, Type,
//!     Weather,
//! };
//!
//! let charizard = StatProfile::builder()
//!     .level(50)
//!     .types(Type::Fire, Some(Type::Flying))
//!     .stats(BaseStats::uniform(100))
//!     .with_move(Move::new("Flamethrower", Type::Fire, MoveCategory::Special, 90).unwrap())
//!     .build()
//!     .unwrap();
//! let venusaur = StatProfile::builder()
//!     .level(50)
//!     .types(Type::Grass, Some(Type::Poison))
//!     .stats(BaseStats::uniform(100))
//!     .with_move(Move::new("Energy Ball", Type::Grass, MoveCategory::Special, 90).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let field = FieldState::new().with_weather(Weather::Sun);
//! let result = BattleEngine::new()
//!     .calculate(&Matchup::new(charizard, venusaur, field))
//!     .unwrap();
//!
//! assert_eq!(result.pokemon1_damage.effectiveness, 2.0);
//! assert_eq!(result.pokemon1_win + result.pokemon2_win, 100);
//! ```

pub mod calc;
pub mod engine;
pub mod error;
pub mod types;

// Re-export main types at crate root for convenience
pub use calc::{DamageResult, Outcome};
pub use engine::{BattleEngine, BattleResult, Matchup};
pub use error::{ComputationError, EngineError, ValidationError};
pub use types::{
    BaseStats, FieldState, Hazard, Move, MoveCategory, Side, Stat, StatProfile,
    StatProfileBuilder, TYPE_CHART, Type, Weather,
};

// Re-export the wire types the engine consumes and produces
pub use matchup_protocol::{CalcRequest, CalcResponse, ErrorKind, ErrorResponse};
