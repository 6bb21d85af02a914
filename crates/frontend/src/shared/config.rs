//! Catalog configuration.
//!
//! There is no config file on disk: the defaults are embedded and the host
//! page may override the API base with
//! `<meta name="catalog-api-base" content="...">`.

use crate::shared::api_utils::normalize_base;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub const API_BASE_META: &str = "catalog-api-base";

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub api: ApiConfig,
    pub dom: DomConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Ids of the containers the catalog mounts into
#[derive(Debug, Deserialize, Clone)]
pub struct DomConfig {
    pub categories_list: String,
    pub product_grid: String,
    pub category_header: String,
    pub pagination_info: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        log::Level::from_str(self.level.trim()).unwrap_or(log::Level::Debug)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid embedded configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://dummyjson.com"

[dom]
categories_list = "categories-list"
product_grid = "product-grid"
category_header = "category-header"
pagination_info = "pagination-info"

[logging]
level = "debug"
"#;

/// Parse the embedded defaults and apply an optional API base override
pub fn build_config(api_base_override: Option<String>) -> Result<CatalogConfig, ConfigError> {
    let mut config: CatalogConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base) = api_base_override.filter(|b| !b.trim().is_empty()) {
        config.api.base_url = base;
    }
    config.api.base_url = normalize_base(&config.api.base_url);
    Ok(config)
}

/// Load configuration for the running page
///
/// Reads the `catalog-api-base` meta tag when present.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    build_config(read_meta_api_base())
}

fn read_meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = build_config(None).unwrap();
        assert_eq!(config.api.base_url, "https://dummyjson.com");
        assert_eq!(config.dom.categories_list, "categories-list");
        assert_eq!(config.dom.product_grid, "product-grid");
        assert_eq!(config.dom.category_header, "category-header");
        assert_eq!(config.dom.pagination_info, "pagination-info");
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_api_base_override() {
        let config = build_config(Some("http://localhost:8080/".to_string())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");

        let config = build_config(Some("   ".to_string())).unwrap();
        assert_eq!(config.api.base_url, "https://dummyjson.com");
    }

    #[test]
    fn test_logging_level_fallback() {
        let logging = LoggingConfig {
            level: "warn".to_string(),
        };
        assert_eq!(logging.level(), log::Level::Warn);

        let logging = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(logging.level(), log::Level::Debug);
    }
}
