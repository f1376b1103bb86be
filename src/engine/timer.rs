//! Timer requests: the engine's only asynchronous primitive.
//!
//! The engine never schedules anything itself. Operations that need a
//! delayed follow-up return `TimerRequest` values; the host schedules
//! each one (with whatever runtime it has) and calls
//! [`MatchState::fire_timer`](super::MatchState::fire_timer) when it is
//! due. Every request carries the round it was issued for, and firing
//! guards on round and phase, so a stale callback from a superseded
//! round is a no-op rather than cross-round state corruption. Navigating
//! away is equally simple: the host drops its timer handles.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pause before round 1 while the welcome message is on screen.
pub const INTRO_DELAY: Duration = Duration::from_millis(2000);

/// Shuffle-message time between dealing and arranging.
pub const SHUFFLE_DELAY: Duration = Duration::from_millis(1500);

/// Pause between "next round" and the next deal.
pub const NEXT_ROUND_DELAY: Duration = Duration::from_millis(1200);

/// Pause on the final message before the completion report.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(2000);

/// AI "thinking" time is drawn uniformly from this range (ms).
pub const AI_MOVE_DELAY_MS: std::ops::Range<u64> = 1500..4000;

/// What a timer should do when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Deal fresh hands and start the next round.
    BeginRound,
    /// Leave the shuffle message and open the arranging phase.
    StartArranging,
    /// The AI finishes "thinking" and arranges its hand.
    AiMove,
    /// Emit the completion report for the host to persist.
    ReportCompletion,
}

/// A one-shot timer for the host to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRequest {
    /// How long to wait before firing.
    pub delay: Duration,
    /// What to do on fire.
    pub event: TimerEvent,
    /// Round this request belongs to; stale rounds are ignored on fire.
    pub round: u32,
}

/// Outbound notification for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The match is over; persist the student's final score.
    ReportCompletion { final_student_score: u32 },
}

/// What firing a timer (or advancing a round) produced: follow-up timers
/// to schedule and at most one outbound event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerOutcome {
    /// New one-shot timers the host should schedule.
    pub requests: Vec<TimerRequest>,
    /// Outbound notification, if any.
    pub event: Option<EngineEvent>,
}

impl TimerOutcome {
    /// An ignored firing: nothing to schedule, nothing to report.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub(crate) fn requesting(request: TimerRequest) -> Self {
        Self {
            requests: vec![request],
            event: None,
        }
    }
}
