//! Turn flow: the turn state machine, the match controller and its timed
//! wrapper, plus the events and frontend traits they talk through.

pub mod controller;
pub mod events;
pub mod frontend;
pub mod timed;
pub mod turn;

pub use controller::{Match, SEATS};
pub use events::{MatchEvent, MatchObserver, ScoreLine};
pub use frontend::{Frontend, Prompt, ScriptedFrontend};
pub use timed::{Clock, SystemClock, TimedMatch};
pub use turn::{Turn, TurnOutcome, TurnState};
