//! Domain types for the battle engine

mod conditions;
mod field;
mod moves;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;

pub use conditions::{Hazard, Weather};
pub use field::FieldState;
pub use moves::{Move, MoveCategory};
pub use pokemon::{StatProfile, StatProfileBuilder};
pub use pokemon_type::{TYPE_CHART, Type};
pub use side::Side;
pub use stats::{BaseStats, Stat};
