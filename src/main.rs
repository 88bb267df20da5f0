//! # Pairchat
//!
//! One-to-one chat console client.
//!
//! This is the client entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - HTTP backend client and WebSocket transport
//! - The interactive console loop

use anyhow::Result;
use tracing::info;

use pairchat::application::controller::SessionController;
use pairchat::config::Settings;
use pairchat::infrastructure::{HttpBackend, WsTransport};
use pairchat::presentation::console;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    pairchat::telemetry::init_tracing();

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        api_base = %settings.client.api_base,
        ws_base = %settings.client.ws_base,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let backend = HttpBackend::new(
        settings.client.api_base.clone(),
        settings.client.assets_base.clone(),
    );
    let transport = WsTransport::new(settings.client.ws_base.clone());
    let controller = SessionController::new(backend, transport, settings.client.bot_link_base);

    console::run(controller).await
}
