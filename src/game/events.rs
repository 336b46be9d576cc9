//! Match events.
//!
//! The core never prints. Everything a frontend may want to narrate is
//! reported as a `MatchEvent`, in the order it happens. Events serialize
//! to one JSON object each, tagged by `event`.

use serde::{Deserialize, Serialize};

use crate::core::{PigResult, PlayerId};
use crate::players::Decision;
use crate::rules::GameResult;

/// One line of a score card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A match loop started. `time_limit_secs` is set for timed matches.
    MatchStarted {
        timed: bool,
        time_limit_secs: Option<u64>,
    },

    /// A contestant's turn began.
    TurnStarted { player: PlayerId, name: String },

    /// The die was rolled. After a bust `accumulation` is back to zero.
    Rolled {
        player: PlayerId,
        face: u8,
        accumulation: i64,
        prospective_total: i64,
    },

    /// A one was rolled and the turn accumulation was lost.
    Busted { player: PlayerId, forfeited: i64 },

    /// The contestant chose to hold or roll. Automated contestants report
    /// the accumulation they were holding out for.
    Decided {
        player: PlayerId,
        decision: Decision,
        target: Option<i64>,
    },

    /// The turn accumulation was banked.
    Held {
        player: PlayerId,
        name: String,
        banked: i64,
        score: i64,
    },

    /// Scores after a turn.
    ScoreCard { scores: Vec<ScoreLine> },

    /// A contestant reached the win target.
    Won {
        player: PlayerId,
        name: String,
        score: i64,
    },

    /// The deadline of a timed match passed before the next turn.
    TimeExpired,

    /// The match loop finished.
    MatchEnded { result: GameResult },
}

/// Receives match events.
pub trait MatchObserver {
    /// Handle one event. Errors abort the match.
    fn on_event(&mut self, event: &MatchEvent) -> PigResult<()>;
}

/// Collects every event.
impl MatchObserver for Vec<MatchEvent> {
    fn on_event(&mut self, event: &MatchEvent) -> PigResult<()> {
        self.push(event.clone());
        Ok(())
    }
}
