//! # Domain Layer
//!
//! Model catalogue and the rules for turning a custom model list into the
//! set of models a client may use. Independent of HTTP and environment
//! concerns.

pub mod models;

pub use models::*;
