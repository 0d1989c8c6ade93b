//! HTML page handler
//!
//! The single page routes on its `id` and `query` parameters. Browser
//! back/forward navigation re-requests the URL, so the same routing applies.

use crate::state::AppState;
use crate::view::{self, html, Route};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

/// Page query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Catalog key of the book to show
    pub id: Option<String>,

    /// Search string
    pub query: Option<String>,
}

/// Render the page for the current URL
pub async fn index(State(state): State<AppState>, Query(params): Query<PageParams>) -> Response {
    let route = Route::from_params(params.id.as_deref(), params.query.as_deref());
    tracing::debug!(?route, "Rendering page");

    let view = view::resolve(&state.catalog, &route).await;

    match html::render_page(&view, route.query()) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
