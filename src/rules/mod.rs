//! Rules of Pig that are independent of turn flow.

pub mod engine;

pub use engine::{check_win, GameResult};
