//! Core types: sides, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{BoardConfig, Difficulty, Objective, MAX_DECIMAL_PLACES, MAX_WHOLE_DIGITS};
pub use error::{ActionError, ConfigError};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
