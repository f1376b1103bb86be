//! The AI strategist: arranges the opponent's hand into slots.
//!
//! Strategy is selected by the configured difficulty tier:
//!
//! - **Easy**: uniformly random permutation, no attempt at the objective.
//! - **Medium**: sorted placement with probability 0.7 each round,
//!   otherwise the Easy permutation. The split is drawn fresh every round.
//! - **Hard**: always sorted optimally for the objective.
//!
//! Sorting is stable on generation order, so equal digits keep the order
//! they were dealt in. Pure apart from consuming randomness.

use log::debug;

use crate::cards::{CardId, Hand};
use crate::core::{BoardConfig, Difficulty, GameRng, Objective};

/// Arrange every card of `hand` into a slot according to the configured
/// difficulty and objective. Any prior slot assignment is discarded.
pub fn arrange(hand: &mut Hand, config: &BoardConfig, rng: &mut GameRng) {
    hand.clear_slots();

    let sorted = match config.difficulty {
        Difficulty::Easy => false,
        Difficulty::Medium => rng.gen_bool(0.7),
        Difficulty::Hard => true,
    };

    debug!(
        "ai arranging: difficulty {:?}, objective {}, sorted {}",
        config.difficulty, config.objective, sorted
    );

    if sorted {
        arrange_sorted(hand, config.objective);
    } else {
        arrange_random(hand, rng);
    }

    debug_assert!(hand.is_complete(config.total_slots()));
}

/// Place cards sorted by digit: descending for `Largest` (biggest digit
/// in the highest place), ascending for `Smallest`.
fn arrange_sorted(hand: &mut Hand, objective: Objective) {
    let mut order: Vec<(CardId, u8)> = hand.cards().iter().map(|c| (c.id, c.digit)).collect();

    // Stable sort: equal digits keep generation order.
    match objective {
        Objective::Largest => order.sort_by_key(|&(_, digit)| std::cmp::Reverse(digit)),
        Objective::Smallest => order.sort_by_key(|&(_, digit)| digit),
    }

    for (slot, (id, _)) in order.into_iter().enumerate() {
        let placed = hand.place(id, slot);
        debug_assert!(placed);
    }
}

/// Place cards into a uniformly random permutation of the slots.
fn arrange_random(hand: &mut Hand, rng: &mut GameRng) {
    let ids: Vec<CardId> = hand.cards().iter().map(|c| c.id).collect();
    let mut slots: Vec<usize> = (0..ids.len()).collect();
    rng.shuffle(&mut slots);

    for (id, slot) in ids.into_iter().zip(slots) {
        let placed = hand.place(id, slot);
        debug_assert!(placed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, DigitCard};

    fn hand_of(digits: &[u8]) -> Hand {
        let cards = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| DigitCard::new(CardId::new(i as u32), d))
            .collect();
        Hand::new(cards)
    }

    fn digits_in_slots(hand: &Hand, slots: usize) -> Vec<u8> {
        hand.slot_digits(slots)
            .into_iter()
            .map(|d| d.expect("hand complete"))
            .collect()
    }

    #[test]
    fn test_hard_largest_sorts_descending() {
        let config = BoardConfig::new(4).with_difficulty(Difficulty::Hard);
        let mut rng = GameRng::new(1);
        let mut hand = hand_of(&[3, 9, 1, 7]);

        arrange(&mut hand, &config, &mut rng);

        assert_eq!(digits_in_slots(&hand, 4), vec![9, 7, 3, 1]);
    }

    #[test]
    fn test_hard_smallest_sorts_ascending() {
        let config = BoardConfig::new(4)
            .with_difficulty(Difficulty::Hard)
            .with_objective(Objective::Smallest);
        let mut rng = GameRng::new(1);
        let mut hand = hand_of(&[3, 9, 1, 7]);

        arrange(&mut hand, &config, &mut rng);

        assert_eq!(digits_in_slots(&hand, 4), vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_equal_digits_keep_generation_order() {
        let config = BoardConfig::new(3).with_difficulty(Difficulty::Hard);
        let mut rng = GameRng::new(1);
        let mut hand = hand_of(&[5, 5, 5]);

        arrange(&mut hand, &config, &mut rng);

        let ids: Vec<_> = (0..3)
            .map(|slot| hand.card_in_slot(slot).unwrap().id)
            .collect();
        assert_eq!(ids, vec![CardId::new(0), CardId::new(1), CardId::new(2)]);
    }

    #[test]
    fn test_easy_is_a_permutation() {
        let config = BoardConfig::new(5).with_difficulty(Difficulty::Easy);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let mut hand = hand_of(&[0, 2, 4, 6, 8]);
            arrange(&mut hand, &config, &mut rng);

            assert!(hand.is_complete(5));
            let mut digits = digits_in_slots(&hand, 5);
            digits.sort();
            assert_eq!(digits, vec![0, 2, 4, 6, 8]);
        }
    }

    #[test]
    fn test_easy_varies_between_rounds() {
        let config = BoardConfig::new(5).with_difficulty(Difficulty::Easy);
        let mut rng = GameRng::new(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            let mut hand = hand_of(&[1, 2, 3, 4, 5]);
            arrange(&mut hand, &config, &mut rng);
            seen.insert(digits_in_slots(&hand, 5));
        }

        assert!(seen.len() > 1, "50 random permutations never varied");
    }

    #[test]
    fn test_medium_mixes_sorted_and_random() {
        let config = BoardConfig::new(5).with_difficulty(Difficulty::Medium);
        let mut rng = GameRng::new(42);

        let mut sorted_rounds = 0;
        let rounds = 200;
        for _ in 0..rounds {
            let mut hand = hand_of(&[3, 9, 1, 7, 5]);
            arrange(&mut hand, &config, &mut rng);
            if digits_in_slots(&hand, 5) == vec![9, 7, 5, 3, 1] {
                sorted_rounds += 1;
            }
        }

        // 0.7 split: expect roughly 140/200 sorted, and at least one of
        // each outcome. (A random permutation can also land sorted, so
        // the count skews slightly high.)
        assert!(sorted_rounds > rounds / 2);
        assert!(sorted_rounds < rounds);
    }

    #[test]
    fn test_rearranging_discards_previous_slots() {
        let config = BoardConfig::new(3).with_difficulty(Difficulty::Hard);
        let mut rng = GameRng::new(1);
        let mut hand = hand_of(&[2, 8, 4]);

        hand.place(CardId::new(0), 2);
        arrange(&mut hand, &config, &mut rng);

        assert_eq!(digits_in_slots(&hand, 3), vec![8, 4, 2]);
    }
}
