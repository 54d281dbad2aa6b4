//! Listener settings for the HTTP surface.
//!
//! Resolution order, lowest to highest:
//!
//! ```text
//! built-in defaults
//! config/default.toml
//! config/{RUN_ENV}.toml           RUN_ENV defaults to "development"
//! APP__SERVER__PORT=... etc.
//! HOST / PORT
//! ```

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Run environment used when `RUN_ENV` is unset.
pub const DEFAULT_RUN_ENV: &str = "development";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from `.env`, config files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_RUN_ENV.into());
        tracing::debug!(run_env = %run_env, "Loading listener settings");

        Self::file_layers(&run_env)?
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()
    }

    /// Defaults plus the optional config files for `run_env`.
    fn file_layers(run_env: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_env)).required(false)))
    }

    /// `host:port` for the listener.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
