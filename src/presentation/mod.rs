//! Presentation Layer
//!
//! HTTP routes and the access gate.

pub mod http;
pub mod middleware;
