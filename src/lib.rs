//! Pomodoro Server - Timer sessions driven by caller-supplied timestamps
//!
//! The `timer` module is a pure state machine over a timer's lifecycle.
//! Everything else is the HTTP service around it: a session registry,
//! the axum router and the static frontend.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use timer::{TimerEngine, TimerError, TimerState, TimerStatus};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
