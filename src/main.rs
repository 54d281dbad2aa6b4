//! # Chat Config Server
//!
//! Entry point that initializes:
//! - Tracing/logging subsystem
//! - Listener settings
//! - Access codes and the server-side configuration
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chat_config_server::config::Settings;
use chat_config_server::startup::{AppState, Application};

#[tokio::main]
async fn main() -> Result<()> {
    chat_config_server::telemetry::init_tracing();

    info!("Starting Chat Config Server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        "Settings loaded"
    );

    // Access codes are hashed exactly once, here
    let state = AppState::from_process_env();

    let application = Application::build(settings, state).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
