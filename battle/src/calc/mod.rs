//! The three calculation stages: damage, move order, and outcome.
//!
//! Each stage is a pure function over validated [`StatProfile`](crate::StatProfile)
//! and [`FieldState`](crate::FieldState) values.

pub mod damage;
pub mod outcome;
pub mod speed;

pub use damage::DamageResult;
pub use outcome::Outcome;
