//! Timer engine error types

use thiserror::Error;

use super::state::TimerStatus;

/// Errors returned by [`TimerEngine`](super::TimerEngine) operations.
///
/// Every variant is a precondition violation: the caller has to change the
/// arguments or call a different operation. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// An argument was out of range (non-positive duration, clock regression)
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the current status
    #[error("{message} (operation: {operation}, status: {status})")]
    InvalidState {
        operation: &'static str,
        status: TimerStatus,
        message: &'static str,
    },
}

impl TimerError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(
        operation: &'static str,
        status: TimerStatus,
        message: &'static str,
    ) -> Self {
        Self::InvalidState {
            operation,
            status,
            message,
        }
    }

    /// True for `InvalidArgument`
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// True for `InvalidState`
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
