//! Match configuration.
//!
//! Only the timing mode and the RNG seed are configurable. The win target,
//! the automated hold cap and the die size are fixed rules of the game.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::PigError;

/// Score at or above which a contestant wins.
pub const WIN_TARGET: i64 = 100;

/// Default time limit of a timed match, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 60;

/// Kind of contestant occupying a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestantKind {
    /// Decisions come from the external prompt.
    Human,
    /// Decisions come from the built-in hold policy.
    Computer,
}

impl FromStr for ContestantKind {
    type Err = PigError;

    /// Accepts `human`, `h`, `computer` and `c`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(ContestantKind::Human),
            "computer" | "c" => Ok(ContestantKind::Computer),
            _ => Err(PigError::InvalidConfiguration(format!(
                "not a valid player type: {s:?} (expected human, h, computer or c)"
            ))),
        }
    }
}

impl std::fmt::Display for ContestantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContestantKind::Human => write!(f, "human"),
            ContestantKind::Computer => write!(f, "computer"),
        }
    }
}

/// Interpret a `--timed` value. Only `true` (any case) enables timing.
#[must_use]
pub fn parse_timed(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Per-session match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Play the timed variant.
    pub timed: bool,

    /// Time limit of a timed match, in seconds.
    pub time_limit_secs: u64,

    /// Seed for the die. `None` draws one from OS entropy per match.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            timed: false,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a new untimed config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the timed variant.
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Set the die seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The time limit as a `Duration`.
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Seed for the `game_index`-th match of a session, if seeded.
    pub fn seed_for_game(&self, game_index: u64) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(game_index))
    }
}
