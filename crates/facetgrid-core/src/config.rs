//! Directory configuration.
//!
//! Optional TOML file controlling pagination and landing-page routing.
//! Every field has a default, so an absent file or an empty document
//! yields the stock behavior (page size 12, step 12).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub pagination: PaginationConfig,
    pub routing: RoutingConfig,
}

impl DirectoryConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DirectoryConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Pagination window sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size on first render
    pub initial_page_size: usize,
    /// Growth per "load more"
    pub step: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page_size: crate::window::DEFAULT_INITIAL_PAGE_SIZE,
            step: crate::window::DEFAULT_PAGE_STEP,
        }
    }
}

/// Landing-page routing endpoints. Placeholder-empty by default;
/// deployments fill these in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Default regional register server URL
    pub register_server: String,
    /// EU regional register server URL
    pub register_server_eu: String,
    /// OAuth server URL
    pub oauth_server: String,
    /// Registration API endpoint
    pub register_endpoint: String,
    /// Application domain used for SSO redirect hosts
    pub app_domain: String,
    /// Per-country redirect path overrides (ISO code -> path)
    pub localized_paths: BTreeMap<String, String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            register_server: String::new(),
            register_server_eu: String::new(),
            oauth_server: String::new(),
            register_endpoint: String::new(),
            app_domain: "example.com".to_string(),
            localized_paths: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_stock_pagination() {
        let config = DirectoryConfig::default();
        assert_eq!(config.pagination.initial_page_size, 12);
        assert_eq!(config.pagination.step, 12);
        assert_eq!(config.routing.app_domain, "example.com");
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: DirectoryConfig = toml::from_str("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config: DirectoryConfig = toml::from_str(
            r#"
            [pagination]
            initial_page_size = 6

            [routing]
            register_server_eu = "https://eu.example.com"

            [routing.localized_paths]
            FR = "/step2-fr/"
            "#,
        )
        .unwrap();

        assert_eq!(config.pagination.initial_page_size, 6);
        assert_eq!(config.pagination.step, 12);
        assert_eq!(config.routing.register_server_eu, "https://eu.example.com");
        assert_eq!(
            config.routing.localized_paths.get("FR").map(String::as_str),
            Some("/step2-fr/")
        );
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facetgrid.toml");
        std::fs::write(&path, "[pagination]\nstep = 24\n").unwrap();
        let config = DirectoryConfig::load(&path).unwrap();
        assert_eq!(config.pagination.step, 24);
    }
}
