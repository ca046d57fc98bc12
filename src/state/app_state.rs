//! Main application state management

use std::{sync::Arc, time::Instant};

use super::SessionRegistry;
use crate::timer::{Clock, SystemClock};

/// Shared server state handed to every handler
#[derive(Debug)]
pub struct AppState {
    /// Live timer sessions
    pub sessions: SessionRegistry,
    /// Fills in `now` when a request omits it
    pub clock: Arc<dyn Clock>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState backed by the wall clock
    pub fn new(port: u16, host: String) -> Self {
        Self::with_clock(port, host, Arc::new(SystemClock))
    }

    pub fn with_clock(port: u16, host: String, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            clock,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// The caller's timestamp, or the clock's when none was given
    pub fn now_or(&self, now_ms: Option<i64>) -> i64 {
        now_ms.unwrap_or_else(|| self.clock.now_ms())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    #[test]
    fn now_or_prefers_caller_time() {
        let clock = Arc::new(ManualClock::new(42));
        let state = AppState::with_clock(0, "127.0.0.1".to_string(), clock.clone());

        assert_eq!(state.now_or(Some(7)), 7);
        assert_eq!(state.now_or(None), 42);

        clock.advance(8);
        assert_eq!(state.now_or(None), 50);
    }

    #[test]
    fn fresh_state_has_short_uptime() {
        let state = AppState::new(8000, "0.0.0.0".to_string());
        assert!(state.get_uptime().ends_with('s'));
        assert!(state.sessions.is_empty());
    }
}
