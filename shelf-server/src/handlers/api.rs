//! JSON endpoints over the same catalog operations the pages use

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use shelf_core::{BookDetail, SearchResultItem};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchApiResponse {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub total: usize,
}

/// Search the catalog
pub async fn search_api(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchApiResponse> {
    let query = params.q.trim().to_string();

    // Blank queries never reach the catalog
    let results = if query.is_empty() {
        Vec::new()
    } else {
        state.catalog.search_books(&query).await
    };

    Json(SearchApiResponse {
        total: results.len(),
        query,
        results,
    })
}

/// Query parameters for a single book
#[derive(Debug, Deserialize)]
pub struct BookParams {
    #[serde(default)]
    pub id: String,
}

/// Get one book's details, 404 when the catalog yields nothing
pub async fn book_api(
    State(state): State<AppState>,
    Query(params): Query<BookParams>,
) -> Result<Json<BookDetail>, StatusCode> {
    state
        .catalog
        .get_book(params.id.trim())
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
