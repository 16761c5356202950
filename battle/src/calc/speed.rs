//! Move order

use crate::types::{FieldState, Side, StatProfile};

/// Speed multiplier for the side under Tailwind
pub const TAILWIND_MULTIPLIER: u64 = 2;

/// Speed used for ordering, after Tailwind
pub fn effective_speed(profile: &StatProfile, side: Side, field: &FieldState) -> u64 {
    let speed = u64::from(profile.speed());
    if field.has_tailwind(side) {
        speed * TAILWIND_MULTIPLIER
    } else {
        speed
    }
}

/// Decide whether pokemon1 acts first.
///
/// Higher effective speed moves first, lower under Trick Room. An exact tie
/// always goes to pokemon1, with or without Trick Room.
pub fn p1_acts_first(p1: &StatProfile, p2: &StatProfile, field: &FieldState) -> bool {
    let p1_speed = effective_speed(p1, Side::P1, field);
    let p2_speed = effective_speed(p2, Side::P2, field);

    if p1_speed == p2_speed {
        return true;
    }

    if field.trick_room {
        p1_speed < p2_speed
    } else {
        p1_speed > p2_speed
    }
}
