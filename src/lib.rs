//! # Chat Config Server Library
//!
//! Server-side configuration for a chat backend, derived from environment
//! variables:
//! - provider credentials (direct API or Azure deployment)
//! - hashed access codes gating API use
//! - model allow/deny lists and client defaults
//!
//! ## Module Structure
//!
//! ```text
//! chat_config_server/
//! +-- config/        Environment sources, access codes, ServerConfig, listener settings
//! +-- domain/        Built-in models and the model table
//! +-- presentation/  HTTP routes and the access gate
//! +-- shared/        Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - model catalogue
pub mod domain;

// Presentation layer - HTTP handlers and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
