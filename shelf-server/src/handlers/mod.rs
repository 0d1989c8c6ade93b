//! Request handlers

mod api;
mod pages;

pub use api::*;
pub use pages::*;

use crate::state::AppState;
use crate::view::opensearch::render_opensearch;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
};

/// OpenSearch descriptor MIME type
const OPENSEARCH_MIME: &str = "application/opensearchdescription+xml";

/// OpenSearch descriptor linked from every page's head
pub async fn opensearch(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    (
        [(header::CONTENT_TYPE, OPENSEARCH_MIME)],
        render_opensearch(&state.public_url(host)),
    )
}
