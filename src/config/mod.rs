//! # Configuration Module
//!
//! Two kinds of configuration live here:
//!
//! - [`ServerConfig`]: what request handlers see. Rebuilt from the
//!   environment on every call to [`get_server_side_config`], sharing the
//!   [`AccessCodeSet`] hashed once at startup.
//! - [`Settings`]: where the HTTP listener binds. Loaded once from config
//!   files, `.env` and `APP__`-prefixed variables.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chat_config_server::config::{get_server_side_config, AccessCodeSet, ProcessEnv};
//!
//! let codes = Arc::new(AccessCodeSet::from_env(&ProcessEnv));
//! let config = get_server_side_config(&ProcessEnv, &codes)?;
//! println!("access code required: {}", config.need_code);
//! ```

mod access_codes;
mod env;
mod server;
mod settings;

pub use access_codes::*;
pub use env::*;
pub use server::*;
pub use settings::*;
