//! Route Configuration
//!
//! Configures the asset host routes: the configuration read endpoint, a
//! health check, and the static directory served at the root.

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use super::handlers;
use crate::config::Settings;

/// Create the asset host router
pub fn create_router(settings: &Settings) -> Router {
    Router::new()
        // Configuration read endpoint
        .route("/front-api/env", get(handlers::front_env))
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Everything else is the static directory, index document at "/"
        .fallback_service(
            ServeDir::new(&settings.server.static_dir).append_index_html_on_directories(true),
        )
}
