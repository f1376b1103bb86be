//! Board configuration types.
//!
//! The host configures a match at creation by providing a `BoardConfig`:
//! board shape (whole-number slots, optional decimal slots), the round
//! objective, the AI difficulty tier, the score needed to win the match,
//! and the display names the engine weaves into status messages.
//!
//! Configuration is immutable for the lifetime of a match and validated
//! once, at match creation.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Maximum whole-number slots (ones through ten-thousands).
pub const MAX_WHOLE_DIGITS: usize = 5;

/// Maximum decimal slots (tenths through thousandths).
pub const MAX_DECIMAL_PLACES: usize = 3;

/// Whether a round rewards building the largest or the smallest number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    Largest,
    Smallest,
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Largest => write!(f, "largest"),
            Objective::Smallest => write!(f, "smallest"),
        }
    }
}

/// AI strategist difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Random permutation, no attempt at the objective.
    Easy,
    /// Sorted placement 70% of rounds, random otherwise.
    Medium,
    /// Always sorted optimally for the objective.
    Hard,
}

/// Immutable per-match board configuration.
///
/// Built with the builder methods and validated by [`BoardConfig::validate`],
/// which the engine calls at match creation.
///
/// ```
/// use place_value_showdown::core::{BoardConfig, Difficulty, Objective};
///
/// let config = BoardConfig::new(3)
///     .with_decimal_places(2)
///     .with_objective(Objective::Largest)
///     .with_winning_score(5)
///     .with_difficulty(Difficulty::Medium);
///
/// assert_eq!(config.total_slots(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of whole-number slots (leftmost slot is the highest place).
    pub whole_digit_count: usize,

    /// Whether decimal slots are in play.
    pub include_decimal: bool,

    /// Number of decimal slots when enabled (tenths, hundredths, thousandths).
    pub decimal_place_count: usize,

    /// Round objective.
    pub objective: Objective,

    /// First side to reach this score wins the match.
    pub winning_score: u32,

    /// AI strategist tier.
    pub difficulty: Difficulty,

    /// Student display name, used in status messages.
    pub student_name: String,

    /// AI display name, used in status messages.
    pub ai_name: String,
}

impl BoardConfig {
    /// Create a whole-number board with the given digit count.
    ///
    /// Defaults: no decimals, objective `Largest`, winning score 3,
    /// difficulty `Medium`, generic display names.
    pub fn new(whole_digit_count: usize) -> Self {
        Self {
            whole_digit_count,
            include_decimal: false,
            decimal_place_count: 0,
            objective: Objective::Largest,
            winning_score: 3,
            difficulty: Difficulty::Medium,
            student_name: "Student".to_string(),
            ai_name: "Professor Digit".to_string(),
        }
    }

    /// Enable decimal slots.
    #[must_use]
    pub fn with_decimal_places(mut self, count: usize) -> Self {
        self.include_decimal = true;
        self.decimal_place_count = count;
        self
    }

    /// Set the round objective.
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Set the match-winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the AI difficulty tier.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the display names used in status messages.
    #[must_use]
    pub fn with_names(mut self, student: impl Into<String>, ai: impl Into<String>) -> Self {
        self.student_name = student.into();
        self.ai_name = ai.into();
        self
    }

    /// Total slot count: whole slots plus decimal slots when enabled.
    ///
    /// A hand always contains exactly this many cards.
    #[must_use]
    pub fn total_slots(&self) -> usize {
        let decimal = if self.include_decimal {
            self.decimal_place_count
        } else {
            0
        };
        self.whole_digit_count + decimal
    }

    /// Number of decimal slots actually in play.
    #[must_use]
    pub fn decimal_slots(&self) -> usize {
        self.total_slots() - self.whole_digit_count
    }

    /// Validate the configuration.
    ///
    /// Called by the engine at match creation; configuration errors never
    /// survive past this point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whole_digit_count == 0 || self.whole_digit_count > MAX_WHOLE_DIGITS {
            return Err(ConfigError::WholeDigitCountOutOfRange {
                got: self.whole_digit_count,
                max: MAX_WHOLE_DIGITS,
            });
        }
        if self.include_decimal
            && (self.decimal_place_count == 0 || self.decimal_place_count > MAX_DECIMAL_PLACES)
        {
            return Err(ConfigError::DecimalPlaceCountOutOfRange {
                got: self.decimal_place_count,
                max: MAX_DECIMAL_PLACES,
            });
        }
        if self.winning_score == 0 {
            return Err(ConfigError::WinningScoreZero);
        }
        if self.student_name.is_empty() || self.ai_name.is_empty() {
            return Err(ConfigError::EmptyPlayerName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_board_slots() {
        let config = BoardConfig::new(3);
        assert_eq!(config.total_slots(), 3);
        assert_eq!(config.decimal_slots(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_decimal_board_slots() {
        let config = BoardConfig::new(2).with_decimal_places(2);
        assert_eq!(config.total_slots(), 4);
        assert_eq!(config.decimal_slots(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_whole_digits_rejected() {
        let config = BoardConfig::new(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::WholeDigitCountOutOfRange { got: 0, max: 5 })
        );
    }

    #[test]
    fn test_too_many_whole_digits_rejected() {
        let config = BoardConfig::new(6);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_decimal_enabled_with_zero_places_rejected() {
        let config = BoardConfig::new(2).with_decimal_places(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DecimalPlaceCountOutOfRange { got: 0, max: 3 })
        );
    }

    #[test]
    fn test_too_many_decimal_places_rejected() {
        let config = BoardConfig::new(2).with_decimal_places(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_winning_score_rejected() {
        let config = BoardConfig::new(3).with_winning_score(0);
        assert_eq!(config.validate(), Err(ConfigError::WinningScoreZero));
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = BoardConfig::new(3).with_names("", "Opponent");
        assert_eq!(config.validate(), Err(ConfigError::EmptyPlayerName));
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(4)
            .with_objective(Objective::Smallest)
            .with_winning_score(5)
            .with_difficulty(Difficulty::Hard)
            .with_names("Ada", "Robo");

        assert_eq!(config.objective, Objective::Smallest);
        assert_eq!(config.winning_score, 5);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.student_name, "Ada");
        assert_eq!(config.ai_name, "Robo");
    }

    #[test]
    fn test_serde_round_trip() {
        let config = BoardConfig::new(3).with_decimal_places(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
