//! The game state machine: phases, match state, timers, status text.

pub mod match_state;
pub mod messages;
pub mod phase;
pub mod timer;

pub use match_state::{MatchSnapshot, MatchState};
pub use phase::Phase;
pub use timer::{
    EngineEvent, TimerEvent, TimerOutcome, TimerRequest, AI_MOVE_DELAY_MS, COMPLETION_DELAY,
    INTRO_DELAY, NEXT_ROUND_DELAY, SHUFFLE_DELAY,
};
