//! Asset Host Handlers

use axum::Json;
use serde_json::{json, Value};

use crate::domain::api::EnvConfig;

/// Configuration read endpoint. The value is sourced from the host
/// process environment on every request; nothing is cached.
pub async fn front_env() -> Json<EnvConfig> {
    Json(EnvConfig {
        bot_username: std::env::var("BOT_USERNAME").ok(),
    })
}

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
