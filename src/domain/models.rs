//! Built-in models and the effective model table.
//!
//! The table starts from [`DEFAULT_MODELS`] and is then edited by the
//! comma-separated custom model list:
//!
//! ```text
//! -gpt-4            deny a model
//! +my-model         allow (the `+` is optional)
//! my-model=My Model allow with a display name
//! -all / +all       flip every model already in the table
//! ```

use serde::Serialize;

/// A model known to the backend out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinModel {
    pub name: &'static str,
    pub available: bool,
}

const fn model(name: &'static str) -> BuiltinModel {
    BuiltinModel {
        name,
        available: true,
    }
}

pub const DEFAULT_MODELS: &[BuiltinModel] = &[
    model("gpt-4"),
    model("gpt-4-0314"),
    model("gpt-4-0613"),
    model("gpt-4-32k"),
    model("gpt-4-32k-0314"),
    model("gpt-4-32k-0613"),
    model("gpt-4-1106-preview"),
    model("gpt-4-vision-preview"),
    model("gpt-3.5-turbo"),
    model("gpt-3.5-turbo-0301"),
    model("gpt-3.5-turbo-0613"),
    model("gpt-3.5-turbo-1106"),
    model("gpt-3.5-turbo-16k"),
    model("gpt-3.5-turbo-16k-0613"),
    model("chatglm3-6b"),
];

/// Prefix shared by every model in the GPT-4 family.
pub const GPT4_PREFIX: &str = "gpt-4";

/// Built-in models belonging to the GPT-4 family.
pub fn gpt4_models() -> impl Iterator<Item = &'static BuiltinModel> {
    DEFAULT_MODELS
        .iter()
        .filter(|m| m.name.starts_with(GPT4_PREFIX))
}

/// One row of the effective model table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEntry {
    pub name: String,
    pub display_name: String,
    pub available: bool,
}

/// Apply a custom model list to the built-in models.
///
/// Rows keep their first-insertion order. Empty tokens are ignored, so
/// stray separators in `custom_models` are harmless.
pub fn collect_model_table(models: &[BuiltinModel], custom_models: &str) -> Vec<ModelEntry> {
    let mut table: Vec<ModelEntry> = models
        .iter()
        .map(|m| ModelEntry {
            name: m.name.to_string(),
            display_name: m.name.to_string(),
            available: m.available,
        })
        .collect();

    for token in custom_models.split(',').filter(|t| !t.is_empty()) {
        let available = !token.starts_with('-');
        let body = token
            .strip_prefix('+')
            .or_else(|| token.strip_prefix('-'))
            .unwrap_or(token);

        let (name, display_name) = match body.split_once('=') {
            Some((name, display)) if !display.is_empty() => (name, display),
            Some((name, _)) => (name, name),
            None => (body, body),
        };

        if name == "all" {
            table.iter_mut().for_each(|m| m.available = available);
            continue;
        }

        let entry = ModelEntry {
            name: name.to_string(),
            display_name: display_name.to_string(),
            available,
        };
        match table.iter_mut().find(|m| m.name == name) {
            Some(existing) => *existing = entry,
            None => table.push(entry),
        }
    }

    table
}

/// Names of the models a client may pick, in table order.
pub fn available_models(table: &[ModelEntry]) -> impl Iterator<Item = &ModelEntry> {
    table.iter().filter(|m| m.available)
}
