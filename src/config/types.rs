// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

use crate::suggest::debouncer::DEFAULT_DEBOUNCE_MS;

pub const DEFAULT_SCOPE: &str = "negocios";
pub const DEFAULT_MAX_ITEMS: usize = 8;
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_SUGGEST_URL: &str = "/api/negocios/suggest";

/// Display names of the scopes the marketplace knows about
const KNOWN_SCOPES: &[(&str, &str)] = &[
    ("negocios", "Negocios Locales"),
    ("marketplace", "Marketplace"),
];

/// Look up the display name for a scope
pub fn scope_display_name(scope: &str) -> Option<&'static str> {
    KNOWN_SCOPES
        .iter()
        .find(|(id, _)| *id == scope)
        .map(|(_, name)| *name)
}

/// Visual variant of the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Bordered box
    #[default]
    Solid,
    /// No border
    Plain,
}

/// Search box section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub scope: String,
    pub scope_name: Option<String>,
    pub placeholder: Option<String>,
    pub default_value: String,
    pub max_items: usize,
    pub variant: Variant,
    pub debounce_ms: u64,
    pub show_hint: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            scope: DEFAULT_SCOPE.to_string(),
            scope_name: None,
            placeholder: None,
            default_value: String::new(),
            max_items: DEFAULT_MAX_ITEMS,
            variant: Variant::Solid,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            show_hint: false,
        }
    }
}

impl SearchConfig {
    /// Scope name shown to the user: explicit, then known, then the raw scope
    pub fn display_scope_name(&self) -> String {
        match &self.scope_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => scope_display_name(&self.scope)
                .map(str::to_string)
                .unwrap_or_else(|| self.scope.clone()),
        }
    }

    /// Placeholder text, defaulting to "Buscar en {scope name}…"
    pub fn placeholder_text(&self) -> String {
        match &self.placeholder {
            Some(p) if !p.is_empty() => p.clone(),
            _ => format!("Buscar en {}…", self.display_scope_name()),
        }
    }
}

/// Backend section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub suggest_url: String,
    pub request_timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_BASE.to_string(),
            suggest_url: DEFAULT_SUGGEST_URL.to_string(),
            request_timeout_ms: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
