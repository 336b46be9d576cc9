//! Contestants: a name, a banked score and a decider.

use crate::core::{ContestantKind, PigError, PigResult};
use crate::game::Frontend;

use super::decider::{Decider, Decision, DecisionContext};
use super::human::HumanDecider;
use super::policy::HoldAtTarget;

/// A participant in a match.
///
/// The score only ever grows between resets.
pub struct Contestant {
    name: String,
    score: i64,
    decider: Box<dyn Decider>,
}

impl Contestant {
    /// Create a contestant with a zero score.
    ///
    /// Fails with `InvalidArgument` if `name` is blank.
    pub fn new(name: impl Into<String>, decider: Box<dyn Decider>) -> PigResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PigError::InvalidArgument(
                "contestant name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            score: 0,
            decider,
        })
    }

    /// Human contestant deciding through the frontend.
    pub fn human(name: impl Into<String>) -> PigResult<Self> {
        Self::new(name, Box::new(HumanDecider))
    }

    /// Automated contestant using the hold-at-target policy.
    pub fn automated(name: impl Into<String>) -> PigResult<Self> {
        Self::new(name, Box::new(HoldAtTarget))
    }

    /// Create a contestant of the given kind.
    pub fn of_kind(kind: ContestantKind, name: impl Into<String>) -> PigResult<Self> {
        match kind {
            ContestantKind::Human => Self::human(name),
            ContestantKind::Computer => Self::automated(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Set the score back to zero before a new match.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Bank `points`. Negative points are rejected with `InvalidArgument`.
    pub fn add_to_score(&mut self, points: i64) -> PigResult<()> {
        if points < 0 {
            return Err(PigError::InvalidArgument(format!(
                "cannot add {points} points to {}: scores never decrease",
                self.name
            )));
        }
        self.score += points;
        Ok(())
    }

    pub fn is_automated(&self) -> bool {
        self.decider.is_automated()
    }

    /// Ask this contestant's decider whether to hold or roll.
    pub fn decide(&mut self, ctx: &DecisionContext, frontend: &mut dyn Frontend) -> PigResult<Decision> {
        self.decider.decide(ctx, frontend)
    }

    /// Hold target reported by the decider, if any.
    pub fn hold_target(&self, ctx: &DecisionContext) -> Option<i64> {
        self.decider.hold_target(ctx)
    }
}

impl std::fmt::Debug for Contestant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contestant")
            .field("name", &self.name)
            .field("score", &self.score)
            .field("automated", &self.is_automated())
            .finish()
    }
}
