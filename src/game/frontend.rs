//! The boundary between the game core and whoever is playing it.
//!
//! A `Frontend` answers questions (`Prompt`) and renders events
//! (`MatchObserver`). The console in `crate::cli` is one frontend;
//! `ScriptedFrontend` is a headless one that replays canned answers and
//! records what happened.

use std::collections::VecDeque;

use crate::core::{PigError, PigResult};

use super::events::{MatchEvent, MatchObserver};

/// Line-oriented question/answer channel.
pub trait Prompt {
    /// Ask a question and return the raw answer line.
    ///
    /// Returns `PigError::InputClosed` when no more input will arrive.
    fn ask(&mut self, question: &str) -> PigResult<String>;

    /// Tell the user their last answer was not accepted.
    fn reject(&mut self, message: &str) -> PigResult<()>;
}

/// Everything a match needs from the outside world.
pub trait Frontend: Prompt + MatchObserver {}

impl<T: Prompt + MatchObserver + ?Sized> Frontend for T {}

/// Frontend with a fixed queue of answers.
///
/// Records every question, rejection and event for later inspection.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrontend {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub rejections: Vec<String>,
    pub events: Vec<MatchEvent>,
}

impl ScriptedFrontend {
    /// Create a frontend that will answer with `answers`, in order.
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Frontend with no answers, for matches between automated contestants.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedFrontend {
    fn ask(&mut self, question: &str) -> PigResult<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(PigError::InputClosed)
    }

    fn reject(&mut self, message: &str) -> PigResult<()> {
        self.rejections.push(message.to_string());
        Ok(())
    }
}

impl MatchObserver for ScriptedFrontend {
    fn on_event(&mut self, event: &MatchEvent) -> PigResult<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
