//! Server-side configuration.
//!
//! Built from the environment on every call to [`get_server_side_config`].
//! The only piece computed ahead of time is the [`AccessCodeSet`], which is
//! hashed once at startup and shared.

use std::sync::Arc;

use serde::Serialize;

use super::access_codes::AccessCodeSet;
use super::env::EnvSource;
use crate::domain::models::gpt4_models;
use crate::shared::error::ServerConfigError;

/// Model used when `CUSTOM_MODELS` / `DEFAULT_MODEL` are absent.
pub const FALLBACK_MODEL: &str = "chatglm3-6b";

/// Logo title used when `LOGO_TITLE` is absent.
pub const DEFAULT_LOGO_TITLE: &str = "My Chatbot";

/// Configuration consumed by request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub openai_org_id: Option<String>,

    pub is_azure: bool,
    /// `https://{azure-url}/openai/deployments/{deploy-name}`
    pub azure_url: Option<String>,
    pub azure_api_key: Option<String>,
    pub azure_api_version: Option<String>,

    pub need_code: bool,
    /// Raw `CODE` value.
    pub code: Option<String>,
    pub codes: Arc<AccessCodeSet>,

    /// Outbound proxy (docker deployments).
    pub proxy_url: Option<String>,
    pub is_vercel: bool,

    pub hide_user_api_key: bool,
    pub disable_gpt4: bool,
    pub hide_balance_query: bool,
    pub disable_fast_link: bool,
    pub custom_models: String,
    pub default_model: String,
    pub default_config_map: DefaultConfigMap,
}

/// Client defaults pushed down by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfigMap {
    pub enable_auto_generate_title: bool,
    pub send_previous_bubble: bool,
    pub dont_show_mask_splash_screen: bool,
    pub hide_builtin_masks: bool,
    pub model_config: ModelConfig,
    pub logo: LogoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub model: String,
    pub enable_inject_system_prompts: bool,
    pub send_memory: bool,
    pub history_message_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfig {
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub show_logo: bool,
}

/// Build the server-side configuration from `env`.
///
/// # Errors
///
/// Returns [`ServerConfigError::InvalidContext`] when `env` reports that no
/// process environment exists, e.g. in a browser-side build.
pub fn get_server_side_config(
    env: &dyn EnvSource,
    codes: &Arc<AccessCodeSet>,
) -> Result<ServerConfig, ServerConfigError> {
    if !env.is_available() {
        return Err(ServerConfigError::InvalidContext);
    }

    let disable_gpt4 = env.flag("DISABLE_GPT4");
    let mut custom_models = env.var_or("CUSTOM_MODELS", FALLBACK_MODEL);
    let mut default_model = env.var_or("DEFAULT_MODEL", FALLBACK_MODEL);

    if disable_gpt4 {
        deny_gpt4_models(&mut custom_models);
        if default_model == "gpt-4" {
            default_model.clear();
        }
    }

    let default_config_map = DefaultConfigMap {
        enable_auto_generate_title: env.flag("AUTO_GENERATE_TITLE"),
        send_previous_bubble: env.flag("SEND_PREVIOUS_BUBBLE"),
        dont_show_mask_splash_screen: env.flag("DONT_SHOW_MASK_SPLASH_SCREEN"),
        hide_builtin_masks: env.flag("HIDE_BUILTIN_MASKS"),
        model_config: ModelConfig {
            model: default_model.clone(),
            enable_inject_system_prompts: env.flag("SYSTEM_PROMPT"),
            send_memory: env.flag("SEND_MEMORY"),
            history_message_count: parse_leading_int(
                &env.var_or("HISTORY_MESSAGE_COUNT", "0"),
            ),
        },
        logo: LogoConfig {
            url: env.var_or("LOGO_URL", ""),
            title: env.var_or("LOGO_TITLE", DEFAULT_LOGO_TITLE),
            subtitle: env.var_or("LOGO_SUBTITLE", ""),
            show_logo: env.flag("LOGO_URL"),
        },
    };

    let config = ServerConfig {
        base_url: env.var("BASE_URL"),
        api_key: env.var("OPENAI_API_KEY"),
        openai_org_id: env.var("OPENAI_ORG_ID"),

        is_azure: env.flag("AZURE_URL"),
        azure_url: env.var("AZURE_URL"),
        azure_api_key: env.var("AZURE_API_KEY"),
        azure_api_version: env.var("AZURE_API_VERSION"),

        need_code: !codes.is_empty(),
        code: env.var("CODE"),
        codes: Arc::clone(codes),

        proxy_url: env.var("PROXY_URL"),
        is_vercel: env.flag("VERCEL"),

        hide_user_api_key: env.flag("HIDE_USER_API_KEY"),
        disable_gpt4,
        hide_balance_query: !env.flag("ENABLE_BALANCE_QUERY"),
        disable_fast_link: env.flag("DISABLE_FAST_LINK"),
        custom_models,
        default_model,
        default_config_map,
    };

    tracing::debug!(
        is_azure = config.is_azure,
        need_code = config.need_code,
        disable_gpt4 = config.disable_gpt4,
        custom_models = %config.custom_models,
        "Server config built"
    );

    Ok(config)
}

impl ServerConfig {
    /// API key the server presents upstream when the user supplies none.
    pub fn server_api_key(&self) -> Option<&str> {
        let key = if self.is_azure {
            self.azure_api_key.as_deref()
        } else {
            self.api_key.as_deref()
        };
        key.filter(|k| !k.is_empty())
    }
}

/// Append a `-<name>` denial for every built-in GPT-4 model.
fn deny_gpt4_models(custom_models: &mut String) {
    let denials = gpt4_models()
        .map(|m| format!("-{}", m.name))
        .collect::<Vec<_>>()
        .join(",");

    if !custom_models.is_empty() {
        custom_models.push(',');
    }
    custom_models.push_str(&denials);
}

/// Integer prefix of `value`: optional whitespace and sign, then digits.
/// Trailing garbage is ignored; no digits at all yields 0.
fn parse_leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    let magnitude = rest[..digits_end]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
