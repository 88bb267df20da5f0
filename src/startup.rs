//! Asset Host Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::presentation::http::routes;

/// Asset host instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the asset host from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let router = routes::create_router(&settings).layer(TraceLayer::new_for_http());

        let addr = settings.server.socket_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            static_dir = %settings.server.static_dir,
            "Listening on {}",
            addr
        );

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
