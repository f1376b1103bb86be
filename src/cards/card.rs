//! Digit cards - the value objects a round is played with.
//!
//! A `DigitCard` carries a single digit 0-9 and tracks where it currently
//! sits: the unplaced pool, or a positional slot on the board. Cards are
//! owned by exactly one hand, destroyed and regenerated every round.

use serde::{Deserialize, Serialize};

/// Opaque card identifier, unique within one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    /// In the side's pool, not yet placed.
    Unplaced,
    /// Occupying the slot at this index (0-based, left-to-right).
    Slotted(usize),
}

impl CardLocation {
    /// The occupied slot index, if any.
    #[must_use]
    pub fn slot(self) -> Option<usize> {
        match self {
            CardLocation::Unplaced => None,
            CardLocation::Slotted(slot) => Some(slot),
        }
    }
}

/// A single digit card in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitCard {
    /// Unique ID for this round.
    pub id: CardId,

    /// The digit, 0-9.
    pub digit: u8,

    /// Current location.
    pub location: CardLocation,
}

impl DigitCard {
    /// Create a fresh unplaced card.
    #[must_use]
    pub fn new(id: CardId, digit: u8) -> Self {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        Self {
            id,
            digit,
            location: CardLocation::Unplaced,
        }
    }

    /// Is this card still in the pool?
    #[must_use]
    pub fn is_unplaced(&self) -> bool {
        self.location == CardLocation::Unplaced
    }
}
