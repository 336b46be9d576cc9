//! The hold-or-roll capability.
//!
//! Turn and match logic only ever talk to a `Decider`; whether the answer
//! comes from a person at a prompt or from a policy is the decider's
//! business.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{PigError, PigResult, PlayerId};
use crate::game::Frontend;

/// What to do after a scoring roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Bank the turn accumulation and end the turn.
    Hold,
    /// Roll again.
    Roll,
}

impl FromStr for Decision {
    type Err = PigError;

    /// Accepts `h`, `hold`, `r` and `roll`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hold" => Ok(Decision::Hold),
            "r" | "roll" => Ok(Decision::Roll),
            _ => Err(PigError::InvalidInput(s.to_string())),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Hold => write!(f, "hold"),
            Decision::Roll => write!(f, "roll"),
        }
    }
}

/// What a decider gets to see when asked to hold or roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecisionContext {
    /// Seat of the deciding contestant.
    pub player: PlayerId,
    /// Banked score before this turn.
    pub score: i64,
    /// Points accumulated so far this turn.
    pub turn_accumulation: i64,
    /// Score needed to win.
    pub win_target: i64,
}

impl DecisionContext {
    /// Score the contestant would have if they held now.
    #[must_use]
    pub fn prospective_total(&self) -> i64 {
        self.score + self.turn_accumulation
    }
}

/// Capability to choose between holding and rolling.
pub trait Decider {
    /// Choose for the given situation.
    ///
    /// Interactive deciders may ask the frontend; they must keep asking
    /// until they get a usable answer.
    fn decide(&mut self, ctx: &DecisionContext, frontend: &mut dyn Frontend) -> PigResult<Decision>;

    /// `true` if decisions are computed rather than asked for.
    fn is_automated(&self) -> bool;

    /// Accumulation this decider holds at, if it follows a fixed target.
    fn hold_target(&self, _ctx: &DecisionContext) -> Option<i64> {
        None
    }
}
