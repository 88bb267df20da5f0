//! HTTP Backend Client
//!
//! `BackendApi` implementation over reqwest. Credential bodies are JSON;
//! that is the fixed external contract. Auth responses arrive either as a
//! bare payload or wrapped in a `{ status, data }` envelope, and a 2xx
//! response can still carry a rejection in its status field.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::domain::api::{AuthPayload, BackendApi, EnvConfig, HistoryEntry};
use crate::domain::directory::DirectoryEntry;
use crate::shared::error::ChatError;

/// Backend client over HTTP.
pub struct HttpBackend {
    http: Client,
    api_base: String,
    assets_base: String,
}

impl HttpBackend {
    /// `api_base` addresses the backend API, `assets_base` the asset host
    /// (for the configuration read endpoint).
    pub fn new(api_base: impl Into<String>, assets_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
            assets_base: assets_base.into(),
        }
    }

    async fn submit_credentials(
        &self,
        endpoint: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthPayload, ChatError> {
        let response = self
            .http
            .post(format!("{}{}", self.api_base, endpoint))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::Auth(format!(
                "credentials rejected ({})",
                response.status()
            )));
        }

        let value: Value = response.json().await?;
        parse_auth_response(value)
    }
}

/// Unwrap the optional `{ status, data }` envelope and deserialize the
/// payload. A 2xx body whose status field signals rejection counts as a
/// credential rejection, not a transport failure.
fn parse_auth_response(value: Value) -> Result<AuthPayload, ChatError> {
    if value.get("status").and_then(Value::as_str) == Some("bad request") {
        return Err(ChatError::Auth("credentials rejected".into()));
    }

    let payload = value.get("data").cloned().unwrap_or(value);
    serde_json::from_value(payload)
        .map_err(|e| ChatError::Transport(format!("malformed auth payload: {e}")))
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn register(&self, username: &str, password: &str) -> Result<AuthPayload, ChatError> {
        self.submit_credentials("/api/users/register/", username, password)
            .await
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthPayload, ChatError> {
        self.submit_credentials("/api/users/login/", username, password)
            .await
    }

    async fn list_users(&self, token: Option<String>) -> Result<Vec<DirectoryEntry>, ChatError> {
        let mut request = self.http.get(format!("{}/api/users/", self.api_base));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn chat_history(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<Vec<HistoryEntry>, ChatError> {
        let response = self
            .http
            .get(format!(
                "{}/api/chat/history/{}/{}",
                self.api_base, sender_id, receiver_id
            ))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn front_env(&self) -> Result<EnvConfig, ChatError> {
        let response = self
            .http
            .get(format!("{}/front-api/env", self.assets_base))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_bare_payload_with_id() {
        let payload = parse_auth_response(json!({ "id": 7, "username": "alice" })).unwrap();
        assert_eq!(payload.id, 7);
        assert_eq!(payload.token, None);
    }

    #[test]
    fn test_bare_payload_with_user_id_alias() {
        let payload = parse_auth_response(json!({ "user_id": 7 })).unwrap();
        assert_eq!(payload.id, 7);
    }

    #[test]
    fn test_enveloped_payload_with_token() {
        let payload = parse_auth_response(json!({
            "status": "ok",
            "data": { "user_id": 7, "token": "opaque" }
        }))
        .unwrap();
        assert_eq!(payload.id, 7);
        assert_eq!(payload.token.as_deref(), Some("opaque"));
    }

    #[test]
    fn test_rejection_status_in_2xx_body() {
        let result = parse_auth_response(json!({ "status": "bad request" }));
        assert!(matches!(result, Err(ChatError::Auth(_))));
    }

    #[test]
    fn test_payload_without_id_is_malformed() {
        let result = parse_auth_response(json!({ "username": "alice" }));
        assert!(matches!(result, Err(ChatError::Transport(_))));
    }

    #[test]
    fn test_env_config_round_trips_missing_value() {
        let env: EnvConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(env.bot_username, None);

        let env: EnvConfig =
            serde_json::from_value(json!({ "BOT_USERNAME": "helper_bot" })).unwrap();
        assert_eq!(env.bot_username.as_deref(), Some("helper_bot"));
    }
}
