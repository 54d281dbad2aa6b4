//! Access Gate Middleware
//!
//! Authorizes requests with either a shared access code (`nk-` prefixed
//! bearer token) or the user's own provider API key, and resolves which
//! key the backend presents upstream.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// Bearer tokens with this prefix carry an access code, not an API key.
pub const ACCESS_CODE_PREFIX: &str = "nk-";

/// Credentials parsed from the `Authorization` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientToken {
    pub access_code: String,
    pub api_key: String,
}

/// Parse a raw `Authorization` header value.
pub fn parse_client_token(header: &str) -> ClientToken {
    let token = header.trim().replace("Bearer ", "");
    let token = token.trim();

    match token.strip_prefix(ACCESS_CODE_PREFIX) {
        Some(code) => ClientToken {
            access_code: code.to_string(),
            api_key: String::new(),
        },
        None => ClientToken {
            access_code: String::new(),
            api_key: token.to_string(),
        },
    }
}

/// Where the upstream API key for a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    User,
    Server,
    None,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::User => "user",
            CredentialSource::Server => "server",
            CredentialSource::None => "none",
        }
    }
}

/// Upstream credential extension
#[derive(Debug, Clone)]
pub struct UpstreamCredential {
    pub api_key: Option<String>,
    pub source: CredentialSource,
}

/// Access gate middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    let token = parse_client_token(header);

    let config = state.server_config()?;

    if config.need_code && token.api_key.is_empty() && !config.codes.verify(&token.access_code) {
        let msg = if token.access_code.is_empty() {
            "empty access code"
        } else {
            "wrong access code"
        };
        tracing::warn!(reason = msg, "Access denied");
        return Err(AppError::Unauthorized(msg.into()));
    }

    if config.hide_user_api_key && !token.api_key.is_empty() {
        tracing::warn!("Rejected user supplied api key");
        return Err(AppError::Unauthorized(
            "you are not allowed to use your own api key".into(),
        ));
    }

    let credential = if !token.api_key.is_empty() {
        tracing::debug!("Using user api key");
        UpstreamCredential {
            api_key: Some(token.api_key),
            source: CredentialSource::User,
        }
    } else if let Some(key) = config.server_api_key() {
        let value = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| AppError::Internal("server api key is not a valid header value".into()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        UpstreamCredential {
            api_key: Some(key.to_string()),
            source: CredentialSource::Server,
        }
    } else {
        tracing::info!("No server api key configured");
        UpstreamCredential {
            api_key: None,
            source: CredentialSource::None,
        }
    };

    request.extensions_mut().insert(credential);
    request.extensions_mut().insert(config);

    Ok(next.run(request).await)
}
