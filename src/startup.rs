//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{get_server_side_config, AccessCodeSet, EnvSource, ProcessEnv, Settings};
use crate::presentation::http::routes;
use crate::presentation::middleware::cors;
use crate::shared::error::ServerConfigError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Where per-request configuration is read from
    pub env: Arc<dyn EnvSource>,
    /// Hashed access codes, computed once at startup
    pub access_codes: Arc<AccessCodeSet>,
}

impl AppState {
    /// Hash the access codes in `env` and capture both for request handling.
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        let access_codes = Arc::new(AccessCodeSet::from_env(env.as_ref()));
        Self { env, access_codes }
    }

    /// State backed by the real process environment.
    pub fn from_process_env() -> Self {
        Self::new(Arc::new(ProcessEnv))
    }

    /// Build a fresh server config for the current request.
    pub fn server_config(&self) -> Result<crate::config::ServerConfig, ServerConfigError> {
        get_server_side_config(self.env.as_ref(), &self.access_codes)
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings, state: AppState) -> Result<Self> {
        // Fail fast instead of on the first request
        let config = state.server_config()?;
        tracing::info!(
            need_code = config.need_code,
            access_codes = state.access_codes.len(),
            is_azure = config.is_azure,
            hide_user_api_key = config.hide_user_api_key,
            disable_gpt4 = config.disable_gpt4,
            default_model = %config.default_model,
            "Server config ready"
        );

        let router = routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors::create_cors_layer(&settings.cors));

        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
