//! Common Test Utilities
//!
//! Shared helpers and test infrastructure for the asset host tests.

use axum::{body::Body, http::Request, Router};
use tower::ServiceExt;

use pairchat::config::{ClientSettings, ServerSettings, Settings};
use pairchat::presentation::http::routes;

/// Test application wrapping the asset host router
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application serving the given static directory
    pub fn new(static_dir: &std::path::Path) -> Self {
        let settings = test_settings(static_dir);
        Self {
            router: routes::create_router(&settings),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Settings pointing the asset host at a test static directory
pub fn test_settings(static_dir: &std::path::Path) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: static_dir.display().to_string(),
        },
        client: ClientSettings {
            api_base: "http://localhost:8000".into(),
            ws_base: "ws://localhost:8000".into(),
            assets_base: "http://localhost:3000".into(),
            bot_link_base: "https://t.me".into(),
        },
        environment: "test".into(),
    }
}

/// Create a unique per-test static directory under the system temp dir
pub fn unique_static_dir() -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("pairchat-test-{}-{}", std::process::id(), nanos));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Collect a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
