//! Model List Handler

use axum::{Extension, Json};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::domain::models::{available_models, collect_model_table, ModelEntry, DEFAULT_MODELS};
use crate::presentation::middleware::UpstreamCredential;

/// Models available to the caller
#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    pub provider: &'static str,
    pub credential: &'static str,
    pub models: Vec<ModelEntry>,
}

/// `GET /api/models` (behind the access gate)
pub async fn list_models(
    Extension(config): Extension<ServerConfig>,
    Extension(credential): Extension<UpstreamCredential>,
) -> Json<ModelListResponse> {
    let table = collect_model_table(DEFAULT_MODELS, &config.custom_models);

    Json(ModelListResponse {
        provider: if config.is_azure { "azure" } else { "openai" },
        credential: credential.source.as_str(),
        models: available_models(&table).cloned().collect(),
    })
}
