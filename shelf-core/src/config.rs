//! Catalog configuration
//!
//! Read once from `SHELF_*` environment variables at startup, or built directly.

use crate::error::{ConfigError, Result};
use url::Url;

/// Default catalog API root
pub const DEFAULT_CATALOG_URL: &str = "https://openlibrary.org/";

/// Default cover image host
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where catalog data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogMode {
    /// Query the remote catalog over HTTP
    #[default]
    Live,

    /// Serve bundled fixtures, no network access
    Mock,
}

/// Settings for building a [`crate::Catalog`]
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root; search and item paths are joined onto it
    pub catalog_url: Url,

    /// Cover image host
    pub covers_url: String,

    /// Live or mock data
    pub mode: CatalogMode,

    /// Per-request timeout for the live source
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid"),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            mode: CatalogMode::Live,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    /// Configuration that serves fixtures instead of hitting the network
    pub fn mock() -> Self {
        Self {
            mode: CatalogMode::Mock,
            ..Self::default()
        }
    }

    /// Point the live source at a different API root
    pub fn with_catalog_url(mut self, url: Url) -> Self {
        self.catalog_url = url;
        self
    }

    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SHELF_CATALOG_URL") {
            config.catalog_url = parse_catalog_url(&raw)?;
        }

        if let Some(raw) = lookup("SHELF_COVERS_URL") {
            config.covers_url = raw.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup("SHELF_USE_MOCK") {
            if parse_flag("SHELF_USE_MOCK", &raw)? {
                config.mode = CatalogMode::Mock;
            }
        }

        if let Some(raw) = lookup("SHELF_TIMEOUT_SECS") {
            config.timeout_secs = raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "SHELF_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}

/// Parse the catalog root, forcing a trailing slash so relative joins keep the path
fn parse_catalog_url(raw: &str) -> std::result::Result<Url, ConfigError> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
        name: "SHELF_CATALOG_URL",
        source,
    })
}

fn parse_flag(name: &'static str, raw: &str) -> std::result::Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.covers_url, DEFAULT_COVERS_URL);
        assert_eq!(config.mode, CatalogMode::Live);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            ("SHELF_CATALOG_URL", "http://localhost:9000/api"),
            ("SHELF_COVERS_URL", "http://covers.local/"),
            ("SHELF_USE_MOCK", "yes"),
            ("SHELF_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_url.as_str(), "http://localhost:9000/api/");
        assert_eq!(config.covers_url, "http://covers.local");
        assert_eq!(config.mode, CatalogMode::Mock);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = CatalogConfig::from_lookup(lookup_from(&[("SHELF_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Config(ConfigError::InvalidValue {
                name: "SHELF_TIMEOUT_SECS",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(CatalogConfig::from_lookup(lookup_from(&[("SHELF_USE_MOCK", "maybe")])).is_err());
        assert!(CatalogConfig::from_lookup(lookup_from(&[("SHELF_TIMEOUT_SECS", "0")])).is_err());
        assert!(
            CatalogConfig::from_lookup(lookup_from(&[("SHELF_CATALOG_URL", "not a url")])).is_err()
        );
    }
}
