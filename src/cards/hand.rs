//! A hand: the ordered set of digit cards belonging to one side.
//!
//! Cards stay in generation order for the lifetime of the round; slot
//! assignment is tracked per card via `CardLocation`. Invariant: no two
//! cards occupy the same slot index. A hand is *complete* when every slot
//! in `[0, total_slots)` holds exactly one card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{CardId, CardLocation, DigitCard};

/// Upper bound on cards per hand: 5 whole digits + 3 decimal places.
pub const MAX_HAND_SIZE: usize = 8;

/// Ordered collection of digit cards for one side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[DigitCard; MAX_HAND_SIZE]>,
}

impl Hand {
    /// Create a hand from freshly dealt cards.
    #[must_use]
    pub fn new(cards: SmallVec<[DigitCard; MAX_HAND_SIZE]>) -> Self {
        Self { cards }
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the hand empty? (Only before the first deal.)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in generation order.
    #[must_use]
    pub fn cards(&self) -> &[DigitCard] {
        &self.cards
    }

    /// Mutable access to all cards, generation order preserved.
    pub fn cards_mut(&mut self) -> &mut [DigitCard] {
        &mut self.cards
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&DigitCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// The card occupying a slot, if any.
    #[must_use]
    pub fn card_in_slot(&self, slot: usize) -> Option<&DigitCard> {
        self.cards
            .iter()
            .find(|c| c.location == CardLocation::Slotted(slot))
    }

    /// Place a card into a slot.
    ///
    /// Returns false (and changes nothing) if the card is unknown, the
    /// card is already slotted, or the slot is occupied.
    pub fn place(&mut self, id: CardId, slot: usize) -> bool {
        if self.card_in_slot(slot).is_some() {
            return false;
        }
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) if card.is_unplaced() => {
                card.location = CardLocation::Slotted(slot);
                true
            }
            _ => false,
        }
    }

    /// Return a slotted card to the pool.
    ///
    /// Returns false if the card is unknown. Returning a card already in
    /// the pool is an accepted no-op and returns true.
    pub fn unplace(&mut self, id: CardId) -> bool {
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => {
                card.location = CardLocation::Unplaced;
                true
            }
            None => false,
        }
    }

    /// Return every card to the pool.
    pub fn clear_slots(&mut self) {
        for card in &mut self.cards {
            card.location = CardLocation::Unplaced;
        }
    }

    /// Is every slot in `[0, total_slots)` occupied?
    #[must_use]
    pub fn is_complete(&self, total_slots: usize) -> bool {
        (0..total_slots).all(|slot| self.card_in_slot(slot).is_some())
    }

    /// Digits read off the slots left-to-right; `None` for an empty slot.
    #[must_use]
    pub fn slot_digits(&self, total_slots: usize) -> Vec<Option<u8>> {
        (0..total_slots)
            .map(|slot| self.card_in_slot(slot).map(|c| c.digit))
            .collect()
    }

    /// Cards still in the pool, generation order.
    pub fn unplaced(&self) -> impl Iterator<Item = &DigitCard> {
        self.cards.iter().filter(|c| c.is_unplaced())
    }
}
