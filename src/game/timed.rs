//! Timed matches.
//!
//! `TimedMatch` wraps a `Match` and checks a deadline before each turn.
//! The deadline is fixed when the wrapper is built. A turn that is already
//! underway always finishes; only the next one is cancelled.

use std::time::{Duration, Instant};

use crate::core::{Die, PigError, PigResult};
use crate::rules::GameResult;

use super::controller::Match;
use super::events::MatchEvent;
use super::frontend::Frontend;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A match that ends without a winner once its time limit passes.
pub struct TimedMatch<'a, D: Die, C: Clock = SystemClock> {
    inner: &'a mut Match<D>,
    clock: C,
    time_limit: Duration,
    deadline: Instant,
}

impl<D: Die, C: Clock> std::fmt::Debug for TimedMatch<'_, D, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedMatch")
            .field("time_limit", &self.time_limit)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl<'a, D: Die> TimedMatch<'a, D, SystemClock> {
    /// Wrap `inner` with a deadline `time_limit` from now.
    pub fn new(inner: &'a mut Match<D>, time_limit: Duration) -> PigResult<Self> {
        Self::with_clock(inner, time_limit, SystemClock)
    }
}

impl<'a, D: Die, C: Clock> TimedMatch<'a, D, C> {
    /// Wrap `inner` with a deadline `time_limit` from `clock.now()`.
    ///
    /// Fails with `InvalidConfiguration` if the deadline cannot be
    /// represented as an `Instant`.
    pub fn with_clock(inner: &'a mut Match<D>, time_limit: Duration, clock: C) -> PigResult<Self> {
        let deadline = clock.now().checked_add(time_limit).ok_or_else(|| {
            PigError::InvalidConfiguration(format!(
                "time limit of {} seconds is too large",
                time_limit.as_secs()
            ))
        })?;
        Ok(Self {
            inner,
            clock,
            time_limit,
            deadline,
        })
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// `true` once the deadline has been reached.
    pub fn has_time_elapsed(&self) -> bool {
        self.clock.now() >= self.deadline
    }

    /// Time left before the deadline.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(self.clock.now())
    }

    /// Play turns until someone wins or time runs out.
    pub fn play(&mut self, frontend: &mut dyn Frontend) -> PigResult<GameResult> {
        frontend.on_event(&MatchEvent::MatchStarted {
            timed: true,
            time_limit_secs: Some(self.time_limit.as_secs()),
        })?;

        let result = loop {
            if let Some(result) = self.inner.result() {
                break result;
            }
            if self.has_time_elapsed() {
                frontend.on_event(&MatchEvent::TimeExpired)?;
                self.inner.finish(GameResult::TimeExpired);
                break GameResult::TimeExpired;
            }
            self.inner.play_turn(frontend)?;
        };

        frontend.on_event(&MatchEvent::MatchEnded { result })?;
        Ok(result)
    }
}
