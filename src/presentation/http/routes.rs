//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, routing::get, Router};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public: the client needs this before it can ask for a code
        .route(
            "/config",
            get(handlers::config::get_client_config).post(handlers::config::get_client_config),
        )
        .merge(protected_routes(state))
}

/// Routes behind the access gate
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/models", get(handlers::models::list_models))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
