//! Client Config Handler
//!
//! Exposes the part of the server configuration the web client needs to
//! render itself. Credentials and access codes never leave the server.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::{DefaultConfigMap, ServerConfig};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Client-visible configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigResponse {
    pub need_code: bool,
    pub hide_user_api_key: bool,
    #[serde(rename = "disableGPT4")]
    pub disable_gpt4: bool,
    pub hide_balance_query: bool,
    pub disable_fast_link: bool,
    pub custom_models: String,
    pub default_model: String,
    pub default_config_map: DefaultConfigMap,
}

impl From<ServerConfig> for ClientConfigResponse {
    fn from(config: ServerConfig) -> Self {
        Self {
            need_code: config.need_code,
            hide_user_api_key: config.hide_user_api_key,
            disable_gpt4: config.disable_gpt4,
            hide_balance_query: config.hide_balance_query,
            disable_fast_link: config.disable_fast_link,
            custom_models: config.custom_models,
            default_model: config.default_model,
            default_config_map: config.default_config_map,
        }
    }
}

/// `GET|POST /api/config`
pub async fn get_client_config(
    State(state): State<AppState>,
) -> Result<Json<ClientConfigResponse>, AppError> {
    let config = state.server_config()?;
    Ok(Json(config.into()))
}
