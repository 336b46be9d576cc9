//! Hold policy of the automated contestant.
//!
//! The computer holds once its turn accumulation reaches
//! `min(HOLD_CAP, win_target - score)`: at most 25 points are risked in a
//! turn, and once within 25 of winning it holds as soon as holding would
//! win.

use crate::core::PigResult;
use crate::game::Frontend;

use super::decider::{Decider, Decision, DecisionContext};

/// Largest turn accumulation the automated contestant plays for.
pub const HOLD_CAP: i64 = 25;

/// Accumulation at which a contestant with `score` should hold.
#[must_use]
pub fn hold_target(score: i64, win_target: i64) -> i64 {
    HOLD_CAP.min(win_target - score)
}

/// `true` if the policy holds at this accumulation.
#[must_use]
pub fn should_hold(score: i64, turn_accumulation: i64, win_target: i64) -> bool {
    turn_accumulation >= hold_target(score, win_target)
}

/// Decider implementing the hold-at-target policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoldAtTarget;

impl Decider for HoldAtTarget {
    fn decide(&mut self, ctx: &DecisionContext, _frontend: &mut dyn Frontend) -> PigResult<Decision> {
        if should_hold(ctx.score, ctx.turn_accumulation, ctx.win_target) {
            Ok(Decision::Hold)
        } else {
            Ok(Decision::Roll)
        }
    }

    fn is_automated(&self) -> bool {
        true
    }

    fn hold_target(&self, ctx: &DecisionContext) -> Option<i64> {
        Some(hold_target(ctx.score, ctx.win_target))
    }
}
