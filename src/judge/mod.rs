//! The round judge: compares two values under the configured objective.

use serde::{Deserialize, Serialize};

use crate::core::Objective;
use crate::value::PlaceValue;

/// Outcome of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Student,
    Ai,
    Tie,
}

/// Result of a revealed round. Derived from the two completed hands,
/// recomputed each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub student_value: PlaceValue,
    pub ai_value: PlaceValue,
    pub winner: Winner,
}

/// Decide the round winner.
///
/// `Largest`: strictly greater value wins. `Smallest`: strictly lesser
/// value wins. Equal values tie. Comparison is exact - values are
/// fixed-point, so no epsilon is needed or allowed.
#[must_use]
pub fn decide_winner(student: PlaceValue, ai: PlaceValue, objective: Objective) -> Winner {
    use std::cmp::Ordering;

    let ordering = match objective {
        Objective::Largest => student.cmp(&ai),
        Objective::Smallest => ai.cmp(&student),
    };

    match ordering {
        Ordering::Greater => Winner::Student,
        Ordering::Less => Winner::Ai,
        Ordering::Equal => Winner::Tie,
    }
}
