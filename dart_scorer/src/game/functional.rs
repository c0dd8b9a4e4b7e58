//! Pure scoring rules. Nothing in here touches match state.

use super::{
    constants::{BULL, MAX_SEGMENT},
    entities::{Multiplier, Points, Round, Throw},
};

#[must_use]
pub const fn calculate_throw_score(value: u8, multiplier: Multiplier) -> Points {
    value as Points * multiplier.factor()
}

/// Build a throw without checking it. Callers that make game decisions
/// with the result should run it through [`validate_throw`] first.
#[must_use]
pub const fn create_throw(value: u8, multiplier: Multiplier) -> Throw {
    Throw::new(value, multiplier)
}

/// Whether a dart could physically land where the throw says it did.
///
/// Numbered segments run 1 through 20 in any ring. The bull (25) has a
/// single and a double ring but no triple.
#[must_use]
pub fn validate_throw(throw: &Throw) -> bool {
    let value = throw.value();
    if value < 1 || (value > MAX_SEGMENT && value != BULL) {
        return false;
    }
    !(value == BULL && throw.multiplier() == Multiplier::Triple)
}

#[must_use]
pub fn calculate_round_score(round: &Round) -> Points {
    round.throws().iter().map(Throw::score).sum()
}

/// A player can't go below zero; a round that would is a bust.
#[must_use]
pub const fn can_subtract_score(current_score: Points, round_score: Points) -> bool {
    current_score.checked_sub(round_score).is_some()
}

/// Checking out just means hitting exactly zero. The last dart is taken so
/// a double-out rule can hook in here, but it's ignored for now.
#[must_use]
pub fn check_win_condition(current_score: Points, _last_throw: Option<&Throw>) -> bool {
    current_score == 0
}
