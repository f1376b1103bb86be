//! Status message text.
//!
//! The engine computes display text; the host renders it. All strings
//! live here so the wording stays in one place.

use crate::core::{BoardConfig, Objective};
use crate::judge::{RoundResult, Winner};

pub fn welcome(config: &BoardConfig) -> String {
    format!(
        "Welcome to Place Value Showdown, {}! First to {} points wins.",
        config.student_name, config.winning_score
    )
}

pub fn shuffling(round: u32) -> String {
    format!("Round {round}: shuffling the cards...")
}

pub fn instruction(config: &BoardConfig) -> String {
    let goal = match config.objective {
        Objective::Largest => "LARGEST",
        Objective::Smallest => "SMALLEST",
    };
    format!("Place your cards to build the {goal} number you can!")
}

pub fn reveal(config: &BoardConfig, result: &RoundResult) -> String {
    let places = config.decimal_slots();
    let student = result.student_value.format(places);
    let ai = result.ai_value.format(places);
    match result.winner {
        Winner::Student => format!(
            "{} wins the round! {} beats {}.",
            config.student_name, student, ai
        ),
        Winner::Ai => format!("{} wins the round! {} beats {}.", config.ai_name, ai, student),
        Winner::Tie => format!("It's a tie! Both built {student}."),
    }
}

pub fn match_over(config: &BoardConfig, winner: Winner) -> String {
    let name = match winner {
        Winner::Student => &config.student_name,
        Winner::Ai => &config.ai_name,
        Winner::Tie => unreachable!("a match never ends on a tie"),
    };
    format!("{name} wins the match!")
}
