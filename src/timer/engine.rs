//! Timer engine: lifecycle transitions driven by caller-supplied timestamps
//!
//! The engine never reads a clock. Every operation takes `now` in epoch
//! milliseconds, so time travel is whatever the caller says it is.

use tracing::debug;

use super::{
    error::TimerError,
    state::{Cycle, TimerSnapshot, TimerState, TimerStatus},
};

/// A single Pomodoro timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerEngine {
    state: TimerState,
}

impl TimerEngine {
    /// Create an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        self.state.status()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.state.snapshot()
    }

    /// Start a fresh cycle, discarding any previous one.
    ///
    /// Allowed from Idle and from any terminal status.
    pub fn start(&mut self, duration_ms: i64, now: i64) -> Result<(), TimerError> {
        if self.status().is_active() {
            return Err(TimerError::invalid_state(
                "start",
                self.status(),
                "Timer already running or paused",
            ));
        }
        if duration_ms <= 0 {
            return Err(TimerError::invalid_argument("duration_ms must be positive"));
        }

        self.state = TimerState::Running(Cycle::new(now, duration_ms));
        debug!("Timer started at {} for {}ms", now, duration_ms);
        Ok(())
    }

    pub fn pause(&mut self, now: i64) -> Result<(), TimerError> {
        match self.state {
            TimerState::Running(cycle) => {
                self.state = TimerState::Paused {
                    cycle,
                    paused_since: now,
                };
                debug!("Timer paused at {}", now);
                Ok(())
            }
            _ => Err(TimerError::invalid_state(
                "pause",
                self.status(),
                "Can only pause when running",
            )),
        }
    }

    /// Close the open pause. A `now` before the pause instant is rejected
    /// and the state is left untouched.
    pub fn resume(&mut self, now: i64) -> Result<(), TimerError> {
        let TimerState::Paused {
            cycle,
            paused_since,
        } = self.state
        else {
            return Err(TimerError::invalid_state(
                "resume",
                self.status(),
                "Can only resume when paused",
            ));
        };

        let interval = now.saturating_sub(paused_since);
        if interval < 0 {
            return Err(TimerError::invalid_argument(
                "now_ms earlier than paused_since",
            ));
        }

        self.state = TimerState::Running(cycle.with_pause(interval));
        debug!("Timer resumed at {} after {}ms paused", now, interval);
        Ok(())
    }

    /// End the cycle: Completed if no time remains, Canceled otherwise.
    ///
    /// No-op while idle. An open pause is folded in as-is, even when `now`
    /// precedes the pause instant.
    pub fn stop(&mut self, now: i64) {
        let cycle = match self.state {
            TimerState::Idle => return,
            TimerState::Paused {
                cycle,
                paused_since,
            } => cycle.with_pause(now.saturating_sub(paused_since)),
            TimerState::Running(cycle)
            | TimerState::Completed { cycle, .. }
            | TimerState::Canceled { cycle, .. }
            | TimerState::Skipped { cycle, .. } => cycle,
        };

        if TimerState::Running(cycle).remaining(now) <= 0 {
            self.state = TimerState::Completed {
                cycle,
                ended_at: cycle.nominal_end(),
            };
            debug!("Timer stopped at {} with no time left, completed", now);
        } else {
            self.state = TimerState::Canceled {
                cycle,
                ended_at: now,
            };
            debug!("Timer canceled at {}", now);
        }
    }

    /// Jump to the end and mark the cycle skipped.
    ///
    /// No-op while idle or completed. An open pause is dropped without being
    /// added to the accumulated pause time.
    pub fn skip(&mut self, now: i64) {
        let cycle = match self.state {
            TimerState::Idle | TimerState::Completed { .. } => return,
            TimerState::Running(cycle)
            | TimerState::Paused { cycle, .. }
            | TimerState::Canceled { cycle, .. }
            | TimerState::Skipped { cycle, .. } => cycle,
        };

        self.state = TimerState::Skipped {
            cycle,
            ended_at: now,
        };
        debug!("Timer skipped at {}", now);
    }

    pub fn elapsed(&self, now: i64) -> i64 {
        self.state.elapsed(now)
    }

    pub fn remaining(&self, now: i64) -> i64 {
        self.state.remaining(now)
    }

    /// Lazily detect completion. Returns whether the timer is completed.
    ///
    /// This is the only implicit transition: nothing completes a timer
    /// unless someone polls it.
    pub fn check_complete(&mut self, now: i64) -> bool {
        let cycle = match self.state {
            TimerState::Idle => return false,
            TimerState::Completed { .. } => return true,
            TimerState::Running(cycle)
            | TimerState::Paused { cycle, .. }
            | TimerState::Canceled { cycle, .. }
            | TimerState::Skipped { cycle, .. } => cycle,
        };

        if self.remaining(now) > 0 {
            return false;
        }

        self.state = TimerState::Completed {
            cycle,
            ended_at: cycle.nominal_end(),
        };
        debug!("Timer completed, detected at {}", now);
        true
    }
}
