//! Turn state machine.
//!
//! ```text
//! Rolling --1--> Busted
//! Rolling --2..6--> Deciding --reached target--> Won
//!                   Deciding --hold--> Held
//!                   Deciding --roll--> Rolling
//! ```
//!
//! The win check on entering `Deciding` happens before the contestant is
//! asked anything, so a roll that reaches the target wins on the spot.

use crate::core::{Die, PigResult, PlayerId, BUST_FACE};
use crate::players::{Contestant, Decision, DecisionContext};
use crate::rules::check_win;

use super::events::MatchEvent;
use super::frontend::Frontend;

/// Where a turn currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// About to roll.
    Rolling,
    /// A scoring roll landed; check for a win, then hold or roll.
    Deciding,
    /// A one was rolled. Terminal.
    Busted,
    /// The accumulation was banked. Terminal.
    Held,
    /// The contestant reached the win target. Terminal.
    Won,
}

impl TurnState {
    /// `true` for states that end the turn.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Busted | TurnState::Held | TurnState::Won)
    }
}

/// How a finished turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No points gained; `forfeited` were lost.
    Busted { forfeited: i64 },
    /// `banked` points were added to the score.
    Held { banked: i64 },
    /// The contestant won with `score`.
    Won { score: i64 },
}

/// One contestant's turn.
#[derive(Clone, Debug)]
pub struct Turn {
    player: PlayerId,
    win_target: i64,
    state: TurnState,
    accumulation: i64,
    forfeited: i64,
    banked: i64,
    final_score: i64,
}

impl Turn {
    /// Start a turn for `player` with nothing accumulated.
    #[must_use]
    pub fn new(player: PlayerId, win_target: i64) -> Self {
        Self {
            player,
            win_target,
            state: TurnState::Rolling,
            accumulation: 0,
            forfeited: 0,
            banked: 0,
            final_score: 0,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Points accumulated and not yet banked.
    pub fn accumulation(&self) -> i64 {
        self.accumulation
    }

    /// How the turn ended, once it has.
    pub fn outcome(&self) -> Option<TurnOutcome> {
        match self.state {
            TurnState::Rolling | TurnState::Deciding => None,
            TurnState::Busted => Some(TurnOutcome::Busted {
                forfeited: self.forfeited,
            }),
            TurnState::Held => Some(TurnOutcome::Held {
                banked: self.banked,
            }),
            TurnState::Won => Some(TurnOutcome::Won {
                score: self.final_score,
            }),
        }
    }

    /// Advance by one transition and return the new state.
    ///
    /// Stepping a finished turn is a no-op.
    pub fn step(
        &mut self,
        contestant: &mut Contestant,
        die: &mut dyn Die,
        frontend: &mut dyn Frontend,
    ) -> PigResult<TurnState> {
        match self.state {
            TurnState::Rolling => self.roll(contestant, die, frontend)?,
            TurnState::Deciding => self.decide(contestant, frontend)?,
            TurnState::Busted | TurnState::Held | TurnState::Won => {}
        }
        Ok(self.state)
    }

    /// Step until the turn ends.
    pub fn run(
        &mut self,
        contestant: &mut Contestant,
        die: &mut dyn Die,
        frontend: &mut dyn Frontend,
    ) -> PigResult<TurnOutcome> {
        loop {
            self.step(contestant, die, frontend)?;
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
        }
    }

    fn roll(&mut self, contestant: &Contestant, die: &mut dyn Die, frontend: &mut dyn Frontend) -> PigResult<()> {
        let face = die.roll();

        if face == BUST_FACE {
            self.forfeited = self.accumulation;
            self.accumulation = 0;
            self.state = TurnState::Busted;
        } else {
            self.accumulation += i64::from(face);
            self.state = TurnState::Deciding;
        }

        frontend.on_event(&MatchEvent::Rolled {
            player: self.player,
            face,
            accumulation: self.accumulation,
            prospective_total: contestant.score() + self.accumulation,
        })?;

        if self.state == TurnState::Busted {
            frontend.on_event(&MatchEvent::Busted {
                player: self.player,
                forfeited: self.forfeited,
            })?;
        }
        Ok(())
    }

    fn decide(&mut self, contestant: &mut Contestant, frontend: &mut dyn Frontend) -> PigResult<()> {
        if check_win(contestant, self.accumulation, self.win_target)? {
            self.final_score = contestant.score();
            self.state = TurnState::Won;
            return Ok(());
        }

        let ctx = DecisionContext {
            player: self.player,
            score: contestant.score(),
            turn_accumulation: self.accumulation,
            win_target: self.win_target,
        };
        let decision = contestant.decide(&ctx, frontend)?;

        frontend.on_event(&MatchEvent::Decided {
            player: self.player,
            decision,
            target: contestant.hold_target(&ctx),
        })?;

        match decision {
            Decision::Hold => {
                contestant.add_to_score(self.accumulation)?;
                self.banked = self.accumulation;
                self.accumulation = 0;
                self.state = TurnState::Held;

                frontend.on_event(&MatchEvent::Held {
                    player: self.player,
                    name: contestant.name().to_string(),
                    banked: self.banked,
                    score: contestant.score(),
                })?;
            }
            Decision::Roll => self.state = TurnState::Rolling,
        }
        Ok(())
    }
}
