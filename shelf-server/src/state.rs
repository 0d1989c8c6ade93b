//! Application state

use anyhow::{Context, Result};
use shelf_core::{Catalog, CatalogConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Normalizing catalog client shared by every request
    pub catalog: Catalog,

    /// Public base URL, when configured; otherwise derived per request
    pub base_url: Option<String>,
}

impl AppState {
    /// Create state around an existing catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            base_url: None,
        }
    }

    /// Create state from `SHELF_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = CatalogConfig::from_env().context("Invalid catalog configuration")?;
        let catalog = Catalog::from_config(&config).context("Failed to build catalog client")?;

        let base_url = std::env::var("SHELF_BASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Self { catalog, base_url })
    }

    /// Set the public base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Absolute URL the pages are served from
    ///
    /// The configured base URL wins; otherwise it is built from the request's
    /// `Host`, using plain http only for loopback hosts.
    pub fn public_url(&self, host: Option<&str>) -> String {
        if let Some(ref base_url) = self.base_url {
            return base_url.clone();
        }

        match host {
            Some(host) if is_loopback(host) => format!("http://{}", host),
            Some(host) => format!("https://{}", host),
            None => "http://localhost:3000".to_string(),
        }
    }
}

fn is_loopback(host: &str) -> bool {
    host.starts_with("localhost") || host.starts_with("127.0.0.1")
}
