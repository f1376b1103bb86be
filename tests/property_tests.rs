//! Property-based tests for the arithmetic, dealer, and judge.

use place_value_showdown::{
    decide_winner, hand_value, number_words, BoardConfig, CardId, DigitCard, GameRng, Hand,
    Objective, PlaceValue, Winner,
};
use proptest::prelude::*;
use smallvec::SmallVec;

fn arb_config() -> impl Strategy<Value = BoardConfig> {
    (1usize..=5, 0usize..=3).prop_map(|(whole, decimal)| {
        if decimal == 0 {
            BoardConfig::new(whole)
        } else {
            BoardConfig::new(whole).with_decimal_places(decimal)
        }
    })
}

fn slotted_hand(digits: &[u8]) -> Hand {
    let cards: SmallVec<[DigitCard; 8]> = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| DigitCard::new(CardId::new(i as u32), d))
        .collect();
    let mut hand = Hand::new(cards);
    for i in 0..digits.len() {
        assert!(hand.place(CardId::new(i as u32), i));
    }
    hand
}

proptest! {
    #[test]
    fn dealt_hand_matches_board_shape(config in arb_config(), seed in any::<u64>()) {
        use place_value_showdown::cards::{deal_hand, CardIdAllocator};

        let mut rng = GameRng::new(seed);
        let hand = deal_hand(&config, &mut CardIdAllocator::new(), &mut rng);

        prop_assert_eq!(hand.len(), config.total_slots());
        for card in hand.cards() {
            prop_assert!(card.digit <= 9);
            prop_assert!(card.is_unplaced());
        }
    }

    #[test]
    fn value_bounded_by_board_shape(
        config in arb_config(),
        digits in proptest::collection::vec(0u8..=9, 8),
    ) {
        let digits = &digits[..config.total_slots()];
        let value = hand_value(&slotted_hand(digits), &config);

        let upper = 10i64.pow(config.whole_digit_count as u32) * 1000;
        prop_assert!(value.millis() >= 0);
        prop_assert!(value.millis() < upper);
    }

    #[test]
    fn swapping_unequal_digits_changes_value(
        config in arb_config(),
        digits in proptest::collection::vec(0u8..=9, 8),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let total = config.total_slots();
        let (a, b) = (a % total, b % total);
        let digits = digits[..total].to_vec();

        let mut swapped = digits.clone();
        swapped.swap(a, b);

        let original = hand_value(&slotted_hand(&digits), &config);
        let after = hand_value(&slotted_hand(&swapped), &config);

        if digits[a] == digits[b] {
            prop_assert_eq!(original, after);
        } else if a != b {
            prop_assert_ne!(original, after);
        }
    }

    #[test]
    fn judge_is_complementary(x in any::<i64>(), y in any::<i64>()) {
        let (x, y) = (PlaceValue::from_millis(x), PlaceValue::from_millis(y));

        for objective in [Objective::Largest, Objective::Smallest] {
            let forward = decide_winner(x, y, objective);
            let backward = decide_winner(y, x, objective);

            if x == y {
                prop_assert_eq!(forward, Winner::Tie);
                prop_assert_eq!(backward, Winner::Tie);
            } else {
                let flipped = match forward {
                    Winner::Student => Winner::Ai,
                    Winner::Ai => Winner::Student,
                    Winner::Tie => Winner::Tie,
                };
                prop_assert_eq!(backward, flipped);
            }
        }
    }

    #[test]
    fn largest_and_smallest_disagree_on_strict_order(x in any::<i64>(), y in any::<i64>()) {
        let (x, y) = (PlaceValue::from_millis(x), PlaceValue::from_millis(y));
        prop_assume!(x != y);

        let largest = decide_winner(x, y, Objective::Largest);
        let smallest = decide_winner(x, y, Objective::Smallest);
        prop_assert_ne!(largest, smallest);
    }

    #[test]
    fn number_words_never_empty(
        config in arb_config(),
        digits in proptest::collection::vec(0u8..=9, 8),
    ) {
        let digits = &digits[..config.total_slots()];
        let value = hand_value(&slotted_hand(digits), &config);
        let words = number_words(value, &config);

        prop_assert!(!words.is_empty());
        if config.include_decimal {
            prop_assert!(words.contains(" and "));
        }
    }
}
