//! Injectable randomness for dice and deck shuffles.
//!
//! ## Key Features
//!
//! - **Substitutable**: Everything random goes through [`RandomSource`]
//! - **Deterministic**: Same seed produces identical sequence
//! - **Scripted**: [`ScriptedRng`] replays exact values for tests
//!
//! ## Usage
//!
//! ```
//! use wretched_engine::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.next_in_range(1, 6), rng2.next_in_range(1, 6));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform integer source.
///
/// The only capability the engine needs from randomness. Production code
/// uses [`GameRng`]; tests plug in [`ScriptedRng`].
pub trait RandomSource {
    /// Next integer in `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }
}

/// Test-only source that replays a fixed list of values, ignoring the
/// requested range.
///
/// Values are returned verbatim so a test can feed out-of-domain rolls.
///
/// # Panics
///
/// `next_in_range` panics once the script runs dry. Use [`GameRng`] for
/// real play.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    /// Create a scripted source from the values to return, in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_in_range(&mut self, _low: u32, _high: u32) -> u32 {
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("ScriptedRng exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_in_range(0, 999), rng2.next_in_range(0, 999));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_in_range(0, 999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_in_range(0, 999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            let v = rng.next_in_range(1, 6);
            assert!((1..=6).contains(&v));
            seen[(v - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_replays_verbatim() {
        let mut rng = ScriptedRng::new([3, 0, 9]);

        assert_eq!(rng.next_in_range(1, 6), 3);
        assert_eq!(rng.next_in_range(1, 6), 0);
        assert_eq!(rng.next_in_range(1, 6), 9);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_panics_when_empty() {
        let mut rng = ScriptedRng::default();
        rng.next_in_range(1, 6);
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ScriptedRng::new([4]));
        assert_eq!(boxed.next_in_range(1, 6), 4);
    }
}
