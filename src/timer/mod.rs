//! Pomodoro timer core
//!
//! A pure state machine over a timer's lifecycle. It owns no clock, spawns
//! no task and does no I/O; callers pass `now` on every call and serialize
//! access per timer.

pub mod clock;
pub mod engine;
pub mod error;
pub mod state;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::TimerEngine;
pub use error::TimerError;
pub use state::{Cycle, TimerSnapshot, TimerState, TimerStatus};
