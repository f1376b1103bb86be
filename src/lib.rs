//! # place-value-showdown
//!
//! Deterministic round engine for Place Value Showdown: a turn-based
//! number-construction game pitting a student against a scripted AI
//! opponent, used to teach place-value concepts for whole numbers and
//! decimals.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine is a library. The host UI invokes
//!    student actions synchronously and schedules the one-shot
//!    [`TimerRequest`]s the engine hands back; no runtime is assumed.
//!
//! 2. **Deterministic**: All randomness (dealing, AI strategy, AI
//!    thinking delay) flows through a seeded [`GameRng`] with separate
//!    context streams, so every match is reproducible from its seed.
//!
//! 3. **Exact Arithmetic**: Values are fixed-point ([`PlaceValue`],
//!    i64 thousandths). Decimal hands compare exactly; the judge never
//!    needs an epsilon.
//!
//! 4. **Fail Closed**: Invalid configuration is rejected at match
//!    creation; illegal actions are rejected synchronously with no
//!    state change.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, board configuration, errors
//! - `cards`: Digit cards, hands, the dealer
//! - `value`: Place-value arithmetic, expanded notation, number words
//! - `ai`: The opponent strategist (Easy/Medium/Hard)
//! - `judge`: Round winner decision
//! - `engine`: Phase machine, match state, timer requests, status text
//!
//! ## Example
//!
//! ```
//! use place_value_showdown::{BoardConfig, Difficulty, MatchState, Phase, Side};
//!
//! let config = BoardConfig::new(3)
//!     .with_winning_score(1)
//!     .with_difficulty(Difficulty::Hard);
//! let (mut state, mut pending) = MatchState::new(config, 42).unwrap();
//!
//! // The host would schedule these; tests fire them immediately.
//! while let Some(request) = pending.pop() {
//!     pending.extend(state.fire_timer(&request).requests);
//! }
//! assert_eq!(state.phase(), Phase::Arranging);
//!
//! // Place the student's cards left to right.
//! let ids: Vec<_> = state.hand(Side::Student).cards().iter().map(|c| c.id).collect();
//! for (slot, id) in ids.into_iter().enumerate() {
//!     state.select_card(id).unwrap();
//!     state.select_slot(slot).unwrap();
//! }
//! assert_eq!(state.phase(), Phase::Revealing);
//! ```

pub mod ai;
pub mod cards;
pub mod core;
pub mod engine;
pub mod judge;
pub mod value;

// Re-export commonly used types
pub use crate::core::{
    ActionError, BoardConfig, ConfigError, Difficulty, GameRng, GameRngState, Objective, Side,
    SideMap,
};

pub use crate::cards::{CardId, CardLocation, DigitCard, Hand};

pub use crate::value::{expanded_notation, hand_value, number_words, slot_labels, PlaceValue};

pub use crate::judge::{decide_winner, RoundResult, Winner};

pub use crate::engine::{
    EngineEvent, MatchSnapshot, MatchState, Phase, TimerEvent, TimerOutcome, TimerRequest,
};
