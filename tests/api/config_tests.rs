//! Client Config API Tests

use axum::http::StatusCode;
use chat_config_server::config::MapEnv;
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_config_defaults() {
    let app = TestApp::with_vars(&[]);

    let (status, body) = app.get("/api/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needCode"], false);
    assert_eq!(body["hideUserApiKey"], false);
    assert_eq!(body["disableGPT4"], false);
    assert_eq!(body["hideBalanceQuery"], true);
    assert_eq!(body["disableFastLink"], false);
    assert_eq!(body["customModels"], "chatglm3-6b");
    assert_eq!(body["defaultModel"], "chatglm3-6b");
    assert_eq!(body["defaultConfigMap"]["modelConfig"]["model"], "chatglm3-6b");
    assert_eq!(body["defaultConfigMap"]["logo"]["title"], "My Chatbot");
}

#[tokio::test]
async fn test_config_accepts_post() {
    let app = TestApp::with_vars(&[("CODE", "abc")]);

    let (status, body) = app.request("POST", "/api/config", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["needCode"], true);
}

#[tokio::test]
async fn test_config_disable_gpt4() {
    let app = TestApp::with_vars(&[
        ("DISABLE_GPT4", "1"),
        ("CUSTOM_MODELS", ""),
        ("DEFAULT_MODEL", "gpt-4"),
    ]);

    let (_, body) = app.get("/api/config").await;

    assert_eq!(body["disableGPT4"], true);
    assert_eq!(body["defaultModel"], "");
    let custom = body["customModels"].as_str().unwrap();
    assert!(custom.starts_with("-gpt-4,-gpt-4-0314"));
    assert!(custom.split(',').all(|t| t.starts_with("-gpt-4")));
}

#[tokio::test]
async fn test_config_never_exposes_credentials() {
    let app = TestApp::with_vars(&[
        ("CODE", "topsecret"),
        ("OPENAI_API_KEY", "sk-server-key"),
        ("AZURE_API_KEY", "azure-server-key"),
        ("PROXY_URL", "http://proxy.internal:7890"),
    ]);

    let (_, body) = app.get("/api/config").await;
    let raw = body.to_string();

    assert!(!raw.contains("topsecret"));
    assert!(!raw.contains("sk-server-key"));
    assert!(!raw.contains("azure-server-key"));
    assert!(!raw.contains("proxy.internal"));
}

#[tokio::test]
async fn test_config_without_environment_is_server_error() {
    let app = TestApp::new(MapEnv::unavailable());

    let (status, body) = app.get("/api/config").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}
