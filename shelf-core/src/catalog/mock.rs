//! Fixture-backed catalog source

use super::{CatalogResult, CatalogSource, SearchResponse, WorkResponse};
use crate::error::CatalogError;
use async_trait::async_trait;

const SEARCH_FIXTURE: &str = include_str!("../../fixtures/search.json");
const WORK_FIXTURE: &str = include_str!("../../fixtures/work.json");

/// Catalog source that answers from canned JSON bodies
///
/// The work response is returned for every key. A missing body behaves like
/// an unreachable catalog.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    search: Option<String>,
    work: Option<String>,
}

impl MockCatalog {
    /// Answer with the given raw JSON bodies
    pub fn with_responses(search: impl Into<String>, work: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            work: Some(work.into()),
        }
    }

    /// A source on which every request fails
    pub fn unavailable() -> Self {
        Self {
            search: None,
            work: None,
        }
    }
}

impl Default for MockCatalog {
    /// The bundled fixtures
    fn default() -> Self {
        Self::with_responses(SEARCH_FIXTURE, WORK_FIXTURE)
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_search(&self, _query: &str) -> CatalogResult<SearchResponse> {
        let body = self
            .search
            .as_deref()
            .ok_or_else(|| CatalogError::Unavailable("no search response".to_string()))?;
        Ok(serde_json::from_str(body)?)
    }

    async fn fetch_work(&self, _id: &str) -> CatalogResult<WorkResponse> {
        let body = self
            .work
            .as_deref()
            .ok_or_else(|| CatalogError::Unavailable("no work response".to_string()))?;
        Ok(serde_json::from_str(body)?)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
