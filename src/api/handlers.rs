//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    state::{AppState, SharedTimer},
    timer::{TimerEngine, TimerStatus},
};
use super::{
    error::ApiError,
    requests::{Action, NowQuery, SessionAction, SessionCreate},
    responses::{HealthResponse, SessionInfo},
};

/// Resolve a path id to its timer. Malformed ids are reported as not found.
fn lookup(state: &AppState, sid: &str) -> Result<(Uuid, SharedTimer), ApiError> {
    let id = Uuid::parse_str(sid).map_err(|_| ApiError::SessionNotFound)?;
    let timer = state.sessions.get(&id)
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::SessionNotFound)?;
    Ok((id, timer))
}

/// Sample remaining time, then let the timer notice its own completion.
fn observe(id: Uuid, timer: &mut TimerEngine, now: i64) -> SessionInfo {
    let remaining = timer.remaining(now);
    let was_completed = timer.status() == TimerStatus::Completed;
    if timer.check_complete(now) && !was_completed {
        info!("Session {} completed", id);
    }
    SessionInfo::new(id, timer, remaining)
}

/// Handle POST /sessions - Create and start a timer session
pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SessionCreate>, JsonRejection>,
) -> Result<Json<SessionInfo>, ApiError> {
    let Json(body) = payload?;
    let now = state.now_or(body.now_ms);

    let mut timer = TimerEngine::new();
    timer.start(body.duration_ms, now)?;
    let remaining = timer.remaining(now);

    let started = timer.clone();
    let id = state.sessions.insert(timer).map_err(ApiError::Internal)?;
    let info = SessionInfo::new(id, &started, remaining);

    info!("Session {} started for {}ms at {}", info.id, body.duration_ms, now);
    Ok(Json(info))
}

/// Handle GET /sessions/:sid - Report a session, completing it if due
pub async fn get_session_handler(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
    query: Result<Query<NowQuery>, QueryRejection>,
) -> Result<Json<SessionInfo>, ApiError> {
    let Query(query) = query?;
    let (id, shared) = lookup(&state, &sid)?;
    let now = state.now_or(query.now_ms);

    let mut timer = shared.lock()
        .map_err(|e| ApiError::Internal(format!("Failed to lock session {}: {}", id, e)))?;
    Ok(Json(observe(id, &mut timer, now)))
}

/// Handle PATCH /sessions/:sid - Apply pause, resume, stop or skip
pub async fn action_session_handler(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
    payload: Result<Json<SessionAction>, JsonRejection>,
) -> Result<Json<SessionInfo>, ApiError> {
    let Json(body) = payload?;
    let (id, shared) = lookup(&state, &sid)?;
    let now = state.now_or(body.now_ms);
    let action: Action = body.action.parse()?;

    let mut timer = shared.lock()
        .map_err(|e| ApiError::Internal(format!("Failed to lock session {}: {}", id, e)))?;

    match action {
        Action::Pause => timer.pause(now)?,
        Action::Resume => timer.resume(now)?,
        Action::Stop => timer.stop(now),
        Action::Skip => timer.skip(now),
    }
    info!("Session {} {:?} at {} -> {}", id, action, now, timer.status());

    Ok(Json(observe(id, &mut timer, now)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime(), state.sessions.len()))
}

