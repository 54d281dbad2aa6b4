//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod config;
pub mod health;
pub mod models;
