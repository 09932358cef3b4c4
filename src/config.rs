// Configuration module for buscaya
// This module handles loading and parsing configuration from ~/.config/buscaya/config.toml

mod types;

pub use types::{
    ApiConfig, Config, DEFAULT_API_BASE, DEFAULT_SUGGEST_URL, SearchConfig, Variant,
    scope_display_name,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub scope: Option<String>,
    pub scope_name: Option<String>,
    pub placeholder: Option<String>,
    pub default_value: Option<String>,
    pub suggest_url: Option<String>,
    pub api_base: Option<String>,
    pub max_items: Option<usize>,
    pub variant: Option<Variant>,
    pub debounce_ms: Option<u64>,
}

impl Config {
    /// Apply command-line overrides on top of file values
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(scope) = overrides.scope {
            self.search.scope = scope;
        }
        if overrides.scope_name.is_some() {
            self.search.scope_name = overrides.scope_name;
        }
        if overrides.placeholder.is_some() {
            self.search.placeholder = overrides.placeholder;
        }
        if let Some(value) = overrides.default_value {
            self.search.default_value = value;
        }
        if let Some(url) = overrides.suggest_url {
            self.api.suggest_url = url;
        }
        if let Some(base) = overrides.api_base {
            self.api.base_url = base;
        }
        if let Some(max_items) = overrides.max_items {
            self.search.max_items = max_items;
        }
        if let Some(variant) = overrides.variant {
            self.search.variant = variant;
        }
        if let Some(debounce_ms) = overrides.debounce_ms {
            self.search.debounce_ms = debounce_ms;
        }
    }
}

/// Loads configuration from ~/.config/buscaya/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path, with the same fallbacks
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: scope={}", config.search.scope);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/buscaya/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("buscaya")
        .join("config.toml")
}
