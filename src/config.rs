//! Application Configuration
//!
//! Compiled defaults (overridable at build time through `PM_*` environment
//! variables) plus an optional runtime override object set by the hosting
//! page as `window.__PM_BOARD_CONFIG__`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Global the hosting page may define to override compiled defaults
pub const CONFIG_GLOBAL: &str = "__PM_BOARD_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// GraphQL endpoint URL
    pub graphql_endpoint: String,
    /// localStorage key holding the selected organization slug
    pub selection_storage_key: String,
    /// Organization selected when nothing was saved yet
    pub default_org_slug: String,
    /// Author identity attached to new comments
    pub author_email: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: option_env!("PM_GRAPHQL_ENDPOINT")
                .unwrap_or("http://localhost:8000/graphql/")
                .to_string(),
            selection_storage_key: "currentOrgSlug".to_string(),
            default_org_slug: option_env!("PM_DEFAULT_ORG").unwrap_or("tech-corp").to_string(),
            author_email: option_env!("PM_AUTHOR_EMAIL").unwrap_or("user@techcorp.com").to_string(),
            log_level: option_env!("PM_LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }
}

impl AppConfig {
    /// Parse an override object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Compiled defaults merged with `window.__PM_BOARD_CONFIG__` if present.
    ///
    /// A malformed override is reported on the console and ignored.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|err| {
            // Logger is not installed yet
            web_sys::console::warn_1(&format!("[config] ignoring {}: {}", CONFIG_GLOBAL, err).into());
            Self::default()
        })
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "graphqlEndpoint": "https://pm.example.com/graphql/" }"#).unwrap();
        assert_eq!(config.graphql_endpoint, "https://pm.example.com/graphql/");
        assert_eq!(config.selection_storage_key, AppConfig::default().selection_storage_key);
        assert_eq!(config.default_org_slug, AppConfig::default().default_org_slug);
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(AppConfig::from_json(r#"{ "authorEmail": 42 }"#).is_err());
    }
}
