//! The die abstraction.
//!
//! The turn state machine only ever sees `&mut dyn Die`, so a match can be
//! driven by a fair RNG-backed die or by a fixed script of faces in tests.

use std::collections::VecDeque;

use super::error::{PigError, PigResult};
use super::rng::GameRng;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// The face that busts a turn.
pub const BUST_FACE: u8 = 1;

/// A source of die rolls.
pub trait Die {
    /// Roll once, returning a value in `1..=DIE_FACES`.
    fn roll(&mut self) -> u8;
}

/// Fair six-sided die backed by a `GameRng`.
#[derive(Clone, Debug)]
pub struct SixSidedDie {
    rng: GameRng,
}

impl SixSidedDie {
    /// Create a die from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a die seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Die for SixSidedDie {
    fn roll(&mut self) -> u8 {
        self.rng.roll(DIE_FACES)
    }
}

/// Die that replays a fixed sequence of faces, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    faces: VecDeque<u8>,
    rolled: usize,
}

impl ScriptedDie {
    /// Create a scripted die.
    ///
    /// Fails with `InvalidArgument` if the script is empty or holds a face
    /// outside `1..=DIE_FACES`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> PigResult<Self> {
        let faces: VecDeque<u8> = faces.into_iter().collect();

        if faces.is_empty() {
            return Err(PigError::InvalidArgument(
                "scripted die needs at least one face".to_string(),
            ));
        }
        if let Some(bad) = faces.iter().find(|f| !(1..=DIE_FACES).contains(f)) {
            return Err(PigError::InvalidArgument(format!(
                "die face {bad} is outside 1..={DIE_FACES}"
            )));
        }

        Ok(Self { faces, rolled: 0 })
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        // Non-empty by construction
        let face = self.faces[0];
        self.faces.rotate_left(1);
        self.rolled += 1;
        face
    }
}

impl<D: Die + ?Sized> Die for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}
