//! Dealing fresh hands at the start of each round.

use smallvec::SmallVec;

use super::card::{CardId, DigitCard};
use super::hand::Hand;
use crate::core::{BoardConfig, GameRng};

/// Allocates card IDs for a round's deal.
///
/// Reset at the start of every round so IDs restart from zero; IDs are
/// unique across both hands within the round.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Fresh allocator for a new round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next card ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId::new(self.next);
        self.next += 1;
        id
    }
}

/// Deal a fresh hand for one side.
///
/// Produces exactly `total_slots` cards, each with an independently and
/// uniformly random digit in 0..=9 (repeats allowed), all unplaced, with
/// fresh IDs from the allocator. Total: always succeeds for any valid
/// `BoardConfig`.
#[must_use]
pub fn deal_hand(config: &BoardConfig, ids: &mut CardIdAllocator, rng: &mut GameRng) -> Hand {
    let cards: SmallVec<_> = (0..config.total_slots())
        .map(|_| DigitCard::new(ids.alloc(), rng.gen_digit()))
        .collect();
    Hand::new(cards)
}
