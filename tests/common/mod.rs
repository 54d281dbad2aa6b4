//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use chat_config_server::config::MapEnv;
use chat_config_server::presentation::http::routes;
use chat_config_server::startup::AppState;

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application reading from `env`
    pub fn new(env: MapEnv) -> Self {
        let state = AppState::new(Arc::new(env));
        Self {
            router: routes::create_router(state),
        }
    }

    /// Create a test application from key/value pairs
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        Self::new(vars.iter().copied().collect())
    }

    /// Make a request and decode the JSON body
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    /// Make a GET request
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request("GET", uri, None).await
    }

    /// Make a GET request with an `Authorization` header
    pub async fn get_auth(
        &self,
        uri: &str,
        authorization: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.request("GET", uri, Some(authorization)).await
    }
}

/// Names of the models in a `/api/models` response
pub fn model_names(body: &serde_json::Value) -> Vec<String> {
    body["models"]
        .as_array()
        .map(|models| {
            models
                .iter()
                .filter_map(|m| m["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
