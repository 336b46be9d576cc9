//! Core building blocks: seats, RNG, the die, configuration and errors.

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{parse_timed, ContestantKind, MatchConfig, DEFAULT_TIME_LIMIT_SECS, WIN_TARGET};
pub use die::{Die, ScriptedDie, SixSidedDie, BUST_FACE, DIE_FACES};
pub use error::{PigError, PigResult};
pub use player::PlayerId;
pub use rng::GameRng;
