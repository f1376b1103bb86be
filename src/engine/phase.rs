//! Match phases.

use serde::{Deserialize, Serialize};

/// The four mutually exclusive phases of a match.
///
/// `Dealing` and the AI's move inside `Arranging` are entered via
/// timer-fired transitions; everything else exits on explicit conditions.
/// `GameComplete` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh hands are being dealt (shuffle animation time for the host).
    Dealing,
    /// Both sides place cards into slots; the AI hand stays hidden.
    Arranging,
    /// Both hands complete: values computed, round winner shown.
    Revealing,
    /// A side reached the winning score. Terminal.
    GameComplete,
}

impl Phase {
    /// Stable name for logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Dealing => "dealing",
            Phase::Arranging => "arranging",
            Phase::Revealing => "revealing",
            Phase::GameComplete => "gameComplete",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
