//! Mapping of failures to HTTP responses

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::timer::TimerError;

/// Every way a session request can fail
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session not found")]
    SessionNotFound,

    #[error("unknown action")]
    UnknownAction(String),

    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SessionNotFound => StatusCode::NOT_FOUND,
            Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
            Self::Timer(TimerError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            Self::Timer(TimerError::InvalidState { .. }) => StatusCode::CONFLICT,
            Self::Body(rejection) => rejection.status(),
            Self::Query(rejection) => rejection.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected ({}): {}", status, self);
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerStatus;

    #[test]
    fn timer_errors_map_to_client_errors() {
        let err: ApiError =
            TimerError::InvalidArgument("duration_ms must be positive".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "duration_ms must be positive");

        let err: ApiError = TimerError::InvalidState {
            operation: "resume",
            status: TimerStatus::Running,
            message: "Can only resume when paused",
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn registry_errors_are_internal() {
        assert_eq!(ApiError::SessionNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UnknownAction("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("poisoned".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
