//! Match controller.
//!
//! A match seats exactly two contestants and lets them take turns,
//! round-robin, until one of them reaches the win target. After every turn
//! the active contestant is checked for a win again with nothing
//! accumulated, the score card is reported, and only then does play pass
//! to the other seat.

use crate::core::{Die, PigError, PigResult, PlayerId, WIN_TARGET};
use crate::players::Contestant;
use crate::rules::{check_win, GameResult};

use super::events::{MatchEvent, ScoreLine};
use super::frontend::Frontend;
use super::turn::{Turn, TurnOutcome};

/// Seats per match.
pub const SEATS: usize = 2;

/// A two-contestant game of Pig.
pub struct Match<D: Die> {
    contestants: [Contestant; SEATS],
    active: PlayerId,
    win_target: i64,
    die: D,
    result: Option<GameResult>,
}

impl<D: Die> Match<D> {
    /// Seat two contestants. Both scores are reset; `first` plays first.
    pub fn new(mut first: Contestant, mut second: Contestant, die: D) -> Self {
        first.reset_score();
        second.reset_score();
        Self {
            contestants: [first, second],
            active: PlayerId::new(0),
            win_target: WIN_TARGET,
            die,
            result: None,
        }
    }

    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    /// The contestant in `player`'s seat.
    pub fn contestant(&self, player: PlayerId) -> &Contestant {
        &self.contestants[player.index()]
    }

    /// Seat whose turn is next (or who just won).
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn win_target(&self) -> i64 {
        self.win_target
    }

    /// Result of the match, once decided.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Give the turn to the next seat.
    pub fn switch_player(&mut self) {
        self.active = self.active.next(SEATS);
    }

    /// Current scores, in seat order.
    pub fn score_card(&self) -> Vec<ScoreLine> {
        PlayerId::all(SEATS)
            .zip(&self.contestants)
            .map(|(player, c)| ScoreLine {
                player,
                name: c.name().to_string(),
                score: c.score(),
            })
            .collect()
    }

    /// Play exactly one turn for the active contestant.
    ///
    /// Fails with `MatchOver` once a result is in.
    pub fn play_turn(&mut self, frontend: &mut dyn Frontend) -> PigResult<TurnOutcome> {
        if self.is_over() {
            return Err(PigError::MatchOver);
        }

        let player = self.active;
        let contestant = &mut self.contestants[player.index()];

        frontend.on_event(&MatchEvent::TurnStarted {
            player,
            name: contestant.name().to_string(),
        })?;

        let outcome = Turn::new(player, self.win_target).run(contestant, &mut self.die, frontend)?;
        let won = check_win(contestant, 0, self.win_target)?;

        if won {
            self.result = Some(GameResult::Winner(player));
            frontend.on_event(&MatchEvent::Won {
                player,
                name: contestant.name().to_string(),
                score: contestant.score(),
            })?;
        }

        frontend.on_event(&MatchEvent::ScoreCard {
            scores: self.score_card(),
        })?;

        if !won {
            self.switch_player();
        }
        Ok(outcome)
    }

    /// Play turns until someone wins.
    pub fn play(&mut self, frontend: &mut dyn Frontend) -> PigResult<GameResult> {
        frontend.on_event(&MatchEvent::MatchStarted {
            timed: false,
            time_limit_secs: None,
        })?;

        let result = loop {
            if let Some(result) = self.result {
                break result;
            }
            self.play_turn(frontend)?;
        };

        frontend.on_event(&MatchEvent::MatchEnded { result })?;
        Ok(result)
    }

    /// Record a result decided outside the turn loop.
    pub(crate) fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
    }
}

impl<D: Die> std::fmt::Debug for Match<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("contestants", &self.contestants)
            .field("active", &self.active)
            .field("win_target", &self.win_target)
            .field("result", &self.result)
            .finish()
    }
}
