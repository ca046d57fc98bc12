//! Timer state structure
//!
//! The lifecycle is an enum whose variants only carry the data that is valid
//! for them: a pause instant exists only while `Paused`, an end instant only
//! once the cycle reached a terminal status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data fixed when a cycle starts, plus its accumulated pause time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Epoch milliseconds of the `start` call
    pub started_at: i64,
    /// Nominal run length, always positive
    pub duration_ms: i64,
    /// Sum of all closed pause intervals
    pub paused_accum_ms: i64,
}

impl Cycle {
    pub(crate) fn new(started_at: i64, duration_ms: i64) -> Self {
        Self {
            started_at,
            duration_ms,
            paused_accum_ms: 0,
        }
    }

    /// Nominal end instant, ignoring pauses
    pub fn nominal_end(&self) -> i64 {
        self.started_at.saturating_add(self.duration_ms)
    }

    /// Fold a pause interval into the accumulator.
    pub(crate) fn with_pause(self, interval_ms: i64) -> Self {
        Self {
            paused_accum_ms: self.paused_accum_ms.saturating_add(interval_ms),
            ..self
        }
    }

    fn elapsed(&self, now: i64, open_pause_ms: i64) -> i64 {
        let paused = self.paused_accum_ms.saturating_add(open_pause_ms);
        now.saturating_sub(self.started_at)
            .saturating_sub(paused)
            .max(0)
    }
}

/// Lifecycle of a single timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TimerState {
    #[default]
    Idle,
    Running(Cycle),
    Paused { cycle: Cycle, paused_since: i64 },
    Completed { cycle: Cycle, ended_at: i64 },
    Canceled { cycle: Cycle, ended_at: i64 },
    Skipped { cycle: Cycle, ended_at: i64 },
}

impl TimerState {
    pub fn status(&self) -> TimerStatus {
        match self {
            Self::Idle => TimerStatus::Idle,
            Self::Running(_) => TimerStatus::Running,
            Self::Paused { .. } => TimerStatus::Paused,
            Self::Completed { .. } => TimerStatus::Completed,
            Self::Canceled { .. } => TimerStatus::Canceled,
            Self::Skipped { .. } => TimerStatus::Skipped,
        }
    }

    /// The current cycle, if the timer was ever started
    pub fn cycle(&self) -> Option<&Cycle> {
        match self {
            Self::Idle => None,
            Self::Running(cycle)
            | Self::Paused { cycle, .. }
            | Self::Completed { cycle, .. }
            | Self::Canceled { cycle, .. }
            | Self::Skipped { cycle, .. } => Some(cycle),
        }
    }

    pub fn paused_since(&self) -> Option<i64> {
        match self {
            Self::Paused { paused_since, .. } => Some(*paused_since),
            _ => None,
        }
    }

    pub fn ended_at(&self) -> Option<i64> {
        match self {
            Self::Completed { ended_at, .. }
            | Self::Canceled { ended_at, .. }
            | Self::Skipped { ended_at, .. } => Some(*ended_at),
            _ => None,
        }
    }

    /// Running time since start minus every pause, including an open one.
    /// Never negative.
    pub fn elapsed(&self, now: i64) -> i64 {
        match self {
            Self::Idle => 0,
            Self::Paused {
                cycle,
                paused_since,
            } => cycle.elapsed(now, now.saturating_sub(*paused_since)),
            Self::Running(cycle)
            | Self::Completed { cycle, .. }
            | Self::Canceled { cycle, .. }
            | Self::Skipped { cycle, .. } => cycle.elapsed(now, 0),
        }
    }

    /// Duration minus elapsed, floored at zero. Zero while idle.
    pub fn remaining(&self, now: i64) -> i64 {
        match self.cycle() {
            None => 0,
            Some(cycle) => cycle.duration_ms.saturating_sub(self.elapsed(now)).max(0),
        }
    }

    /// Flatten into the serializable record shape
    pub fn snapshot(&self) -> TimerSnapshot {
        let cycle = self.cycle();
        TimerSnapshot {
            status: self.status(),
            start_ts: cycle.map(|c| c.started_at),
            duration_ms: cycle.map_or(0, |c| c.duration_ms),
            paused_since: self.paused_since(),
            paused_accum_ms: cycle.map_or(0, |c| c.paused_accum_ms),
            end_ts: self.ended_at(),
        }
    }
}

/// Status without associated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
    Canceled,
    Skipped,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
            Self::Skipped => "skipped",
        }
    }

    /// Completed, Canceled and Skipped end a cycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled | Self::Skipped)
    }

    /// Running or Paused
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat view of a timer, one optional field per instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub start_ts: Option<i64>,
    pub duration_ms: i64,
    pub paused_since: Option<i64>,
    pub paused_accum_ms: i64,
    pub end_ts: Option<i64>,
}
