//! Backend API boundary.
//!
//! Trait for everything the client fetches over HTTP, implemented by the
//! infrastructure layer. The payload types absorb the variance the
//! backend is known to produce: the user id field may arrive as `id` or
//! `user_id`, the token is optional, and auth responses may be wrapped in
//! a `{ status, data }` envelope (handled by the implementation).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::directory::DirectoryEntry;
use crate::shared::error::ChatError;

/// Successful authentication payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Backend user id (`id` or `user_id` on the wire)
    #[serde(alias = "user_id")]
    pub id: i64,

    /// Opaque bearer token, if the backend issues one
    #[serde(default)]
    pub token: Option<String>,
}

/// One line of persisted chat history for a sender/receiver pair.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    pub sender: HistorySender,
    pub message: String,
}

/// Sender half of a history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySender {
    pub username: String,
}

impl HistoryEntry {
    /// Render the line the way the live socket replays it.
    pub fn render(&self) -> String {
        format!("{}: {}", self.sender.username, self.message)
    }
}

/// Configuration read payload served by the asset host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    #[serde(
        rename = "BOT_USERNAME",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bot_username: Option<String>,
}

/// Backend HTTP API the client calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `POST /api/users/register/`
    async fn register(&self, username: &str, password: &str) -> Result<AuthPayload, ChatError>;

    /// `POST /api/users/login/`
    async fn login(&self, username: &str, password: &str) -> Result<AuthPayload, ChatError>;

    /// `GET /api/users/`, optionally with a bearer token
    async fn list_users(&self, token: Option<String>) -> Result<Vec<DirectoryEntry>, ChatError>;

    /// `GET /api/chat/history/{sender_id}/{receiver_id}`
    async fn chat_history(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<Vec<HistoryEntry>, ChatError>;

    /// `GET /front-api/env` against the asset host
    async fn front_env(&self) -> Result<EnvConfig, ChatError>;
}
