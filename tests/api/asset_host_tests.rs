//! Asset Host Endpoint Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, body_text, unique_static_dir, TestApp};

/// The configuration endpoint echoes the host process environment, read
/// fresh on each request. Set and unset cases live in one test because
/// the process environment is shared across the test binary.
#[tokio::test]
async fn test_front_env_reads_environment_per_request() {
    let app = TestApp::new(&unique_static_dir());

    std::env::set_var("BOT_USERNAME", "helper_bot");
    let response = app.get("/front-api/env").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "BOT_USERNAME": "helper_bot" })
    );

    // No caching: removing the variable changes the next response.
    std::env::remove_var("BOT_USERNAME");
    let response = app.get("/front-api/env").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new(&unique_static_dir());

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_index_document_is_served_at_root() {
    let static_dir = unique_static_dir();
    std::fs::write(static_dir.join("index.html"), "<html>pairchat</html>").unwrap();
    let app = TestApp::new(&static_dir);

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("pairchat"));
}

#[tokio::test]
async fn test_assets_are_served_by_path() {
    let static_dir = unique_static_dir();
    std::fs::write(static_dir.join("app.js"), "console.log('hi');").unwrap();
    let app = TestApp::new(&static_dir);

    let response = app.get("/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "console.log('hi');");
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let app = TestApp::new(&unique_static_dir());

    let response = app.get("/missing.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
