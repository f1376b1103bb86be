//! Error taxonomy for the round engine.
//!
//! Two classes exist:
//!
//! - `ConfigError`: an invalid `BoardConfig`, rejected at match creation
//!   before any round begins.
//! - `ActionError`: an illegal player action, rejected synchronously with
//!   no state change (fail closed).
//!
//! Arithmetic, dealing, and AI strategy are total over well-formed hands
//! and have no error path.

use thiserror::Error;

use crate::cards::CardId;

/// Invalid board configuration, surfaced to the host at match creation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("whole digit count must be in 1..={max}, got {got}")]
    WholeDigitCountOutOfRange { got: usize, max: usize },

    #[error("decimal place count must be in 1..={max} when decimals are enabled, got {got}")]
    DecimalPlaceCountOutOfRange { got: usize, max: usize },

    #[error("winning score must be at least 1")]
    WinningScoreZero,

    #[error("player display name must not be empty")]
    EmptyPlayerName,
}

/// Illegal player action, rejected with no state change.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action is not valid in phase {phase}")]
    WrongPhase { phase: &'static str },

    #[error("card {0} is not in the student hand")]
    UnknownCard(CardId),

    #[error("card {0} is already placed in a slot")]
    CardAlreadyPlaced(CardId),

    #[error("slot {0} is already occupied")]
    SlotOccupied(usize),

    #[error("slot {got} is out of range for a board with {total} slots")]
    SlotOutOfRange { got: usize, total: usize },

    #[error("no card is selected")]
    NoCardSelected,
}
