//! Application Error Types
//!
//! The client-side failure taxonomy. Nothing in here is retried
//! automatically anywhere in the system: a failure either blocks the
//! action that caused it or is logged by the caller and swallowed.

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing required input, checked before any network call is issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential rejection by the backend, surfaced as a blocking notice.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Network or parse failure on an HTTP fetch. Non-fatal to the session.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Real-time channel failure or close. Leaves the conversation dead
    /// until the user re-selects one.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The view generation changed while a request was in flight; the
    /// result was discarded without touching any state.
    #[error("Stale response discarded")]
    Stale,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(err.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ChatError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        ChatError::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Transport(format!("malformed payload: {err}"))
    }
}
