//! OHKO flags and win estimates

use super::damage::DamageResult;
use crate::types::{Side, StatProfile};

/// Share for a side that can OHKO and acts first
pub const LETHAL_FIRST_WIN: u8 = 95;

/// Share for a side that can OHKO, cannot be OHKO'd, but acts second
pub const LETHAL_SECOND_WIN: u8 = 90;

/// OHKO flags and win split for one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub p1_ohko: bool,
    pub p2_ohko: bool,
    pub p1_win: u8,
    pub p2_win: u8,
}

impl Outcome {
    /// Side with the larger share; pokemon1 on an even split
    pub fn favoured(&self) -> Side {
        if self.p2_win > self.p1_win {
            Side::P2
        } else {
            Side::P1
        }
    }
}

/// True when the attacker's best roll meets or exceeds the defender's HP
pub fn is_ohko(damage: &DamageResult, defender: &StatProfile) -> bool {
    damage.max >= u64::from(defender.hp())
}

/// Combine both damage ranges and move order into OHKO flags and a win split.
///
/// `p1_damage` is pokemon1's attack on pokemon2, `p2_damage` the reverse.
/// The split always sums to exactly 100:
/// - exactly one side OHKOs: it gets 95 if it also acts first, else 90
/// - both OHKO: whoever acts first gets 95
/// - neither: proportional to each side's max damage as a fraction of the
///   opponent's HP, rounding the residual point to pokemon1
pub fn evaluate(
    p1: &StatProfile,
    p2: &StatProfile,
    p1_damage: &DamageResult,
    p2_damage: &DamageResult,
    p1_first: bool,
) -> Outcome {
    let p1_ohko = is_ohko(p1_damage, p2);
    let p2_ohko = is_ohko(p2_damage, p1);

    let p1_win = match (p1_ohko, p2_ohko) {
        (true, false) if p1_first => LETHAL_FIRST_WIN,
        (true, false) => LETHAL_SECOND_WIN,
        (false, true) if p1_first => 100 - LETHAL_SECOND_WIN,
        (false, true) => 100 - LETHAL_FIRST_WIN,
        (true, true) if p1_first => LETHAL_FIRST_WIN,
        (true, true) => 100 - LETHAL_FIRST_WIN,
        (false, false) => 100 - proportional_share(p2_damage.max, p2.hp(), p1_damage.max, p1.hp()),
    };

    Outcome {
        p1_ohko,
        p2_ohko,
        p1_win,
        p2_win: 100 - p1_win,
    }
}

/// `floor(100 * r_own / (r_own + r_other))` where `r = damage / target hp`.
///
/// Cross-multiplied by both HP values so it stays in integers:
/// `r_own / (r_own + r_other) = own_max * own_hp / (own_max * own_hp + other_max * other_hp)`.
/// Returns 50 when neither side can deal damage.
fn proportional_share(own_max: u64, own_hp: u32, other_max: u64, other_hp: u32) -> u8 {
    let own = u128::from(own_max) * u128::from(own_hp);
    let other = u128::from(other_max) * u128::from(other_hp);
    let total = own + other;

    if total == 0 {
        return 50;
    }

    // own <= total, so the quotient is at most 100
    (own * 100 / total) as u8
}
