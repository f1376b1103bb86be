//! Deterministic random number generation for dealing and AI strategy.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Independent sequences for different purposes
//!
//! Dealing and the AI strategist draw from separate context streams, so a
//! test can pin one sequence without disturbing the other:
//!
//! ```
//! use place_value_showdown::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut deal = rng.for_context("deal");
//! let mut ai = rng.for_context("ai");
//!
//! // Streams are independent but each is reproducible from the seed.
//! assert_ne!(
//!     (0..10).map(|_| deal.gen_digit()).collect::<Vec<_>>(),
//!     (0..10).map(|_| ai.gen_digit()).collect::<Vec<_>>(),
//! );
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG for card dealing and AI arrangement.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Supports context-based independent streams and snapshot/restore.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Useful for separating randomness domains (e.g., dealing vs AI
    /// strategy). The same context always produces the same stream from
    /// the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a uniformly random digit in `0..=9`.
    pub fn gen_digit(&mut self) -> u8 {
        self.inner.gen_range(0..10)
    }

    /// Generate a random u64 in the given range.
    pub fn gen_range_u64(&mut self, range: std::ops::Range<u64>) -> u64 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing a match mid-round.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_digit(), rng2.gen_digit());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_digit()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_digit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_digit_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.gen_digit() <= 9);
        }
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut deal = rng.for_context("deal");
        let mut ai = rng.for_context("ai");

        let seq1: Vec<_> = (0..10).map(|_| deal.gen_digit()).collect();
        let seq2: Vec<_> = (0..10).map(|_| ai.gen_digit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let rng1 = GameRng::new(42);
        let rng2 = GameRng::new(42);

        let mut ctx1 = rng1.for_context("deal");
        let mut ctx2 = rng2.for_context("deal");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_digit(), ctx2.gen_digit());
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_digit();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_digit()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_digit()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
