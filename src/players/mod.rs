//! Contestants and the ways they decide.
//!
//! - `Decider`: hold-or-roll capability
//! - `HumanDecider`: asks the frontend, re-asking on bad input
//! - `HoldAtTarget`: the automated policy
//! - `Contestant`: name, score and a boxed decider

pub mod contestant;
pub mod decider;
pub mod human;
pub mod policy;

pub use contestant::Contestant;
pub use decider::{Decider, Decision, DecisionContext};
pub use human::{ask_name, HumanDecider};
pub use policy::{hold_target, should_hold, HoldAtTarget, HOLD_CAP};
