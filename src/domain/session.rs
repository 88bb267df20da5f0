//! Session entity.
//!
//! The authenticated identity of the current process. A `Session` value
//! exists if and only if authentication succeeded; it is never persisted
//! and dies with the process.

use serde::{Deserialize, Serialize};

/// Authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Backend user id of the current user
    pub user_id: i64,

    /// Username the credentials were submitted under
    pub username: String,

    /// Opaque bearer token, if the backend issued one
    pub token: Option<String>,
}

impl Session {
    pub fn new(user_id: i64, username: impl Into<String>, token: Option<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            token,
        }
    }

    /// Bearer token for authenticated fetches, if one was issued.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
