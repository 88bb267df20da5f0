//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Asset host configuration (host, port, static directory)
    pub server: ServerSettings,

    /// Chat client configuration (backend endpoints, bot link base)
    pub client: ClientSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Asset host binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Directory served at the service root
    pub static_dir: String,
}

/// Chat client endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the backend HTTP API (register/login/users/history)
    pub api_base: String,

    /// Base URL of the real-time transport endpoint (ws:// or wss://)
    pub ws_base: String,

    /// Base URL of the asset host, for the configuration read endpoint
    pub assets_base: String,

    /// Base URL for the external bot deep link
    pub bot_link_base: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "public")?
            .set_default("client.api_base", "http://localhost:8000")?
            .set_default("client.ws_base", "ws://localhost:8000")?
            .set_default("client.assets_base", "http://localhost:3000")?
            .set_default("client.bot_link_base", "https://t.me")?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("server.static_dir", std::env::var("STATIC_DIR").ok())?
            .set_override_option("client.api_base", std::env::var("API_BASE").ok())?
            .set_override_option("client.ws_base", std::env::var("WS_BASE").ok())?
            .set_override_option("client.assets_base", std::env::var("ASSETS_BASE").ok())?
            .build()?
            .try_deserialize()
    }

    /// Get the full asset host address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid server address configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".into(),
                port: 4000,
                static_dir: "public".into(),
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

    #[test]
    fn test_server_addr_formatting() {
        assert_eq!(settings().server_addr(), "127.0.0.1:4000");
    }

    #[test]
    fn test_socket_addr_parses() {
        let addr = settings().server.socket_addr();
        assert_eq!(addr.port(), 4000);
    }
}
