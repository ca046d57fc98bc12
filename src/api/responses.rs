//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::{TimerEngine, TimerStatus};

/// A session as seen by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub status: TimerStatus,
    pub duration_ms: i64,
    pub remaining_ms: i64,
    pub start_ts: Option<i64>,
    pub paused_accum_ms: i64,
    pub paused_since: Option<i64>,
    pub end_ts: Option<i64>,
}

impl SessionInfo {
    /// Build from a timer; `remaining_ms` is computed by the caller so it
    /// can be sampled before a lazy completion check.
    pub fn new(id: Uuid, timer: &TimerEngine, remaining_ms: i64) -> Self {
        let snapshot = timer.snapshot();
        Self {
            id,
            status: snapshot.status,
            duration_ms: snapshot.duration_ms,
            remaining_ms,
            start_ts: snapshot.start_ts,
            paused_accum_ms: snapshot.paused_accum_ms,
            paused_since: snapshot.paused_since,
            end_ts: snapshot.end_ts,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
    pub sessions: usize,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String, sessions: usize) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
            sessions,
        }
    }
}
