//! Catalog access layer
//!
//! A [`CatalogSource`] fetches raw upstream responses; [`Catalog`] wraps a source,
//! normalizes what it returns and collapses every failure into an empty result.

mod mock;
mod openlibrary;
pub mod upstream;

pub use mock::MockCatalog;
pub use openlibrary::OpenLibrary;
pub use upstream::{normalize_search, normalize_work, SearchDoc, SearchResponse, WorkResponse};

use crate::config::{CatalogConfig, CatalogMode};
use crate::error::CatalogError;
use crate::types::{BookDetail, SearchResultItem};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Maximum number of upstream documents a search inspects
pub const MAX_RESULTS: usize = 30;

/// Result type for catalog source operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Abstract source of upstream catalog data
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Run a free-text search
    async fn fetch_search(&self, query: &str) -> CatalogResult<SearchResponse>;

    /// Fetch a single work by catalog key
    async fn fetch_work(&self, id: &str) -> CatalogResult<WorkResponse>;

    /// Short name used in log output
    fn name(&self) -> &'static str;
}

/// Normalizing front for a catalog source
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
    covers_url: String,
}

impl Catalog {
    /// Wrap a source, deriving cover URLs from `covers_url`
    pub fn new(source: impl CatalogSource + 'static, covers_url: impl Into<String>) -> Self {
        Self {
            source: Arc::new(source),
            covers_url: covers_url.into(),
        }
    }

    /// Build the catalog described by `config`
    pub fn from_config(config: &CatalogConfig) -> crate::Result<Self> {
        let catalog = match config.mode {
            CatalogMode::Live => {
                let source = OpenLibrary::new(
                    config.catalog_url.clone(),
                    Duration::from_secs(config.timeout_secs),
                )?;
                Self::new(source, config.covers_url.clone())
            }
            CatalogMode::Mock => Self::new(MockCatalog::default(), config.covers_url.clone()),
        };
        tracing::info!(source = catalog.source_name(), "Catalog ready");
        Ok(catalog)
    }

    /// Name of the underlying source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Search the catalog, returning at most [`MAX_RESULTS`] items
    ///
    /// Failures of any kind yield an empty list.
    pub async fn search_books(&self, query: &str) -> Vec<SearchResultItem> {
        match self.source.fetch_search(query).await {
            Ok(response) => normalize_search(response),
            Err(e) => {
                tracing::warn!(source = self.source_name(), query, "unable to query catalog: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch one work by catalog key
    ///
    /// Failures of any kind, including a malformed key, yield `None`.
    pub async fn get_book(&self, id: &str) -> Option<BookDetail> {
        let result = match validate_key(id) {
            Ok(()) => self.source.fetch_work(id).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => Some(normalize_work(response, id, &self.covers_url)),
            Err(e) => {
                tracing::warn!(source = self.source_name(), id, "unable to query catalog: {}", e);
                None
            }
        }
    }
}

/// Check that a catalog key is a plain path before it is joined into a URL
pub fn validate_key(id: &str) -> CatalogResult<()> {
    let safe_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-'));
    let has_traversal = id.split('/').any(|segment| segment == "..");

    if id.trim_matches('/').is_empty() || !safe_chars || has_traversal {
        return Err(CatalogError::InvalidKey(id.to_string()));
    }
    Ok(())
}
