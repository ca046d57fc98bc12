//! API request structures

use std::str::FromStr;

use serde::Deserialize;

use super::error::ApiError;

/// Body of POST /sessions
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCreate {
    pub duration_ms: i64,
    pub now_ms: Option<i64>,
}

/// Body of PATCH /sessions/:sid
#[derive(Debug, Clone, Deserialize)]
pub struct SessionAction {
    /// One of pause, resume, stop, skip (case-insensitive)
    pub action: String,
    pub now_ms: Option<i64>,
}

/// Query string of GET /sessions/:sid
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NowQuery {
    pub now_ms: Option<i64>,
}

/// Timer operation requested through PATCH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Stop,
    Skip,
}

impl FromStr for Action {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "stop" => Ok(Self::Stop),
            "skip" => Ok(Self::Skip),
            _ => Err(ApiError::UnknownAction(s.to_string())),
        }
    }
}
