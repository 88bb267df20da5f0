//! # Asset Host
//!
//! Static asset server for the chat client.
//!
//! Serves the static directory at the service root and exposes the
//! configuration read endpoint.

use anyhow::Result;
use tracing::info;

use pairchat::config::Settings;
use pairchat::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    pairchat::telemetry::init_tracing();

    info!("Starting asset host...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
