//! # rust-pig
//!
//! The dice game Pig for two contestants.
//!
//! On each turn a contestant rolls a six-sided die as often as they like,
//! adding every roll to a turn total. Rolling a 1 loses the turn total;
//! holding banks it. The first contestant to reach 100 wins, and wins the
//! moment a roll gets them there.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, the `Die` trait, configuration, errors
//! - `players`: contestants, the `Decider` trait, human and automated deciders
//! - `rules`: the win rule and `GameResult`
//! - `game`: turn state machine, match controller, timed wrapper, events
//! - `cli`: argument parsing, console frontend, play-again session
//!
//! ## Example
//!
//! ```
//! use rust_pig::{Contestant, Match, ScriptedFrontend, SixSidedDie};
//!
//! let first = Contestant::automated("HAL").unwrap();
//! let second = Contestant::automated("Deep Thought").unwrap();
//! let mut game = Match::new(first, second, SixSidedDie::new(42));
//!
//! let result = game.play(&mut ScriptedFrontend::silent()).unwrap();
//! let winner = result.winner().unwrap();
//! assert!(game.contestant(winner).score() >= 100);
//! ```

pub mod cli;
pub mod core;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ContestantKind, Die, GameRng, MatchConfig, PigError, PigResult, PlayerId,
    ScriptedDie, SixSidedDie, WIN_TARGET,
};

pub use crate::players::{Contestant, Decider, Decision, DecisionContext, HoldAtTarget, HumanDecider};

pub use crate::rules::{check_win, GameResult};

pub use crate::game::{
    Clock, Frontend, Match, MatchEvent, MatchObserver, Prompt, ScriptedFrontend,
    SystemClock, TimedMatch, Turn, TurnOutcome, TurnState,
};
