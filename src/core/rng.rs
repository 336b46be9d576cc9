//! Seedable random number generation.
//!
//! Every random draw in a match goes through a `GameRng`. Matches started
//! from the same seed roll the same dice, which makes sessions replayable
//! with `--seed`.
//!
//! ```
//! use rust_pig::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll(6), b.roll(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so the sequence can still be reported and
    /// replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a fair die with `faces` sides, returning a value in `1..=faces`.
    pub fn roll(&mut self, faces: u8) -> u8 {
        debug_assert!(faces > 0);
        self.inner.gen_range(1..=faces)
    }
}
