//! Interactive contestants.

use crate::core::{PigError, PigResult};
use crate::game::{Frontend, Prompt};

use super::decider::{Decider, Decision, DecisionContext};

pub const HOLD_OR_ROLL_QUESTION: &str = "Do you want to Hold or Roll the die again? Enter 'h' or 'r': ";
pub const HOLD_OR_ROLL_REJECTION: &str =
    "Your input is invalid. Enter \"h\", \"hold\" to hold or \"r\", \"roll\" to roll the die again.";
pub const NAME_QUESTION: &str = "Enter name of player: ";
pub const NAME_REJECTION: &str = "Enter a valid name";

/// Decider that asks the frontend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HumanDecider;

impl Decider for HumanDecider {
    fn decide(&mut self, _ctx: &DecisionContext, frontend: &mut dyn Frontend) -> PigResult<Decision> {
        loop {
            let answer = frontend.ask(HOLD_OR_ROLL_QUESTION)?;
            match answer.parse::<Decision>() {
                Ok(decision) => return Ok(decision),
                Err(PigError::InvalidInput(_)) => frontend.reject(HOLD_OR_ROLL_REJECTION)?,
                Err(other) => return Err(other),
            }
        }
    }

    fn is_automated(&self) -> bool {
        false
    }
}

/// Ask for a contestant name until a non-blank one is given.
pub fn ask_name(prompt: &mut dyn Prompt) -> PigResult<String> {
    loop {
        let name = prompt.ask(NAME_QUESTION)?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        prompt.reject(NAME_REJECTION)?;
    }
}
