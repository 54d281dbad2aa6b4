//! Access Gate API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{model_names, TestApp};

#[tokio::test]
async fn test_open_when_no_codes_configured() {
    let app = TestApp::with_vars(&[("OPENAI_API_KEY", "sk-server")]);

    let (status, body) = app.get("/api/models").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "openai");
    assert_eq!(body["credential"], "server");
}

#[tokio::test]
async fn test_missing_access_code_rejected() {
    let app = TestApp::with_vars(&[("CODE", "abc")]);

    let (status, body) = app.get("/api/models").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "empty access code");
}

#[tokio::test]
async fn test_wrong_access_code_rejected() {
    let app = TestApp::with_vars(&[("CODE", "abc")]);

    let (status, body) = app.get_auth("/api/models", "Bearer nk-ABC").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "wrong access code");
}

#[tokio::test]
async fn test_valid_access_code_accepted() {
    let app = TestApp::with_vars(&[("CODE", "abc, ,ABC"), ("OPENAI_API_KEY", "sk-server")]);

    for token in ["Bearer nk-abc", "Bearer nk-ABC"] {
        let (status, body) = app.get_auth("/api/models", token).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["credential"], "server");
    }
}

#[tokio::test]
async fn test_user_api_key_bypasses_access_code() {
    let app = TestApp::with_vars(&[("CODE", "abc")]);

    let (status, body) = app.get_auth("/api/models", "Bearer sk-user").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["credential"], "user");
}

#[tokio::test]
async fn test_user_api_key_rejected_when_hidden() {
    let app = TestApp::with_vars(&[("HIDE_USER_API_KEY", "1")]);

    let (status, body) = app.get_auth("/api/models", "Bearer sk-user").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "you are not allowed to use your own api key");
}

#[tokio::test]
async fn test_no_credential_when_server_has_no_key() {
    let app = TestApp::with_vars(&[]);

    let (status, body) = app.get("/api/models").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["credential"], "none");
}

#[tokio::test]
async fn test_azure_provider_uses_azure_key() {
    let app = TestApp::with_vars(&[
        ("AZURE_URL", "https://example.openai.azure.com/openai/deployments/chat"),
        ("AZURE_API_KEY", "azure-key"),
    ]);

    let (status, body) = app.get("/api/models").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "azure");
    assert_eq!(body["credential"], "server");
}

#[tokio::test]
async fn test_models_respect_gpt4_denials() {
    let app = TestApp::with_vars(&[("DISABLE_GPT4", "1"), ("CUSTOM_MODELS", "+claude-2")]);

    let (status, body) = app.get("/api/models").await;
    let names = model_names(&body);

    assert_eq!(status, StatusCode::OK);
    assert!(names.iter().all(|n| !n.starts_with("gpt-4")));
    assert!(names.contains(&"gpt-3.5-turbo".to_string()));
    assert!(names.contains(&"claude-2".to_string()));
}
