//! HTTP API module
//!
//! This module contains the session endpoints, their request and response
//! structures, and the static frontend fallback.

pub mod error;
pub mod handlers;
pub mod requests;
pub mod responses;

use std::{path::Path, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints.
///
/// Session endpoints live under `/api/v1`; every other path is served from
/// `frontend_dir`.
pub fn create_router(state: Arc<AppState>, frontend_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/:sid",
            get(get_session_handler).patch(action_session_handler),
        )
        .route("/health", get(health_handler));

    Router::new()
        .nest("/api/v1", api)
        .fallback_service(ServeDir::new(frontend_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
