//! Live catalog source backed by the Open Library HTTP API

use super::{CatalogResult, CatalogSource, SearchResponse, WorkResponse};
use crate::error::CatalogError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP client for the remote catalog
pub struct OpenLibrary {
    client: Client,
    base_url: Url,
}

impl OpenLibrary {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: Url, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shelf/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the search endpoint for `query`
    pub fn search_url(&self, query: &str) -> CatalogResult<Url> {
        let mut url = self.base_url.join("search.json")?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// URL of the item endpoint for a catalog key
    pub fn work_url(&self, id: &str) -> CatalogResult<Url> {
        // Relative join keeps any path prefix on the base URL
        let path = format!("{}.json", id.trim_start_matches('/'));
        Ok(self.base_url.join(&path)?)
    }

    /// GET a URL and decode its JSON body, treating non-2xx as an error
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CatalogResult<T> {
        tracing::debug!(%url, "Querying catalog");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogSource for OpenLibrary {
    async fn fetch_search(&self, query: &str) -> CatalogResult<SearchResponse> {
        let url = self.search_url(query)?;
        self.get_json(url).await
    }

    async fn fetch_work(&self, id: &str) -> CatalogResult<WorkResponse> {
        let url = self.work_url(id)?;
        self.get_json(url).await
    }

    fn name(&self) -> &'static str {
        "openlibrary"
    }
}
