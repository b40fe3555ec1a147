//! Configuration System
//!
//! Client settings are compiled in from `glucovision.toml`. Every field has a
//! serde default, so an empty file is a valid configuration. The API base URL
//! can be overridden at runtime from local storage.

use serde::Deserialize;
use thiserror::Error;

/// Local storage key holding an API base URL override
pub const API_URL_KEY: &str = "glucovision_api_url";

const EMBEDDED_CONFIG: &str = include_str!("../glucovision.toml");

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Backend origin; empty means same origin as the page
    #[serde(default)]
    pub api_base: String,

    /// Local storage key used as the "already onboarded" flag
    #[serde(default = "default_user_name_key")]
    pub user_name_key: String,

    /// Sugar limit sent with the onboarding request
    #[serde(default = "default_sugar_limit")]
    pub default_sugar_limit: f64,

    /// Reference line drawn on the sugar chart
    #[serde(default = "default_sugar_limit")]
    pub recommended_sugar_limit: f64,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_user_name_key() -> String {
    "glucovision_user_name".to_string()
}

fn default_sugar_limit() -> f64 {
    25.0
}

fn default_log_filter() -> String {
    "glucovision_ui=info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            user_name_key: default_user_name_key(),
            default_sugar_limit: default_sugar_limit(),
            recommended_sugar_limit: default_sugar_limit(),
            log_filter: default_log_filter(),
        }
    }
}

impl UiConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: UiConfig = toml::from_str(content)?;
        config.api_base = normalize_base(&config.api_base);
        Ok(config)
    }

    /// Load the embedded configuration and apply the local storage override.
    ///
    /// A broken embedded file falls back to defaults rather than leaving the
    /// page blank.
    pub fn load() -> Self {
        let mut config = Self::from_toml(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            Self::default()
        });

        if let Some(url) = stored_api_base() {
            config.api_base = normalize_base(&url);
        }

        config
    }

    /// Build an absolute endpoint URL from a path like `/analyze`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_URL_KEY).ok()?
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
