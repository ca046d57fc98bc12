//! State management module
//!
//! Shared server state and the registry of live timer sessions.

pub mod app_state;
pub mod session_registry;

// Re-export main types
pub use app_state::AppState;
pub use session_registry::{SessionRegistry, SharedTimer};
