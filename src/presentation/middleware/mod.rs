//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;

pub use auth::{
    auth_middleware, parse_client_token, ClientToken, CredentialSource, UpstreamCredential,
    ACCESS_CODE_PREFIX,
};
