//! Catalog tests against a local stub of the upstream API
//!
//! Each test spins up a tiny axum server on an ephemeral port and points the
//! live source at it, so the full HTTP path (status handling, body decoding)
//! is exercised without touching the real catalog.

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use shelf_core::{Catalog, CatalogConfig, MAX_RESULTS};
use std::collections::HashMap;
use url::Url;

const COVERS_URL: &str = "https://covers.openlibrary.org";

// =============================================================================
// Helpers
// =============================================================================

/// Serve `app` on an ephemeral port and return its root URL
async fn spawn_stub(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{}/", addr)).unwrap()
}

fn live_catalog(base: Url) -> Catalog {
    let config = CatalogConfig {
        timeout_secs: 2,
        ..CatalogConfig::default()
    }
    .with_catalog_url(base);
    Catalog::from_config(&config).expect("Failed to build catalog")
}

async fn search_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let query = params.get("q").cloned().unwrap_or_default();
    Json(json!({
        "docs": [
            { "key": "/works/OL1W", "title": query, "author_name": ["A. Author"], "first_publish_year": 2001 },
            { "title": "No key" }
        ]
    }))
}

async fn many_results() -> Json<Value> {
    let docs: Vec<Value> = (0..50)
        .map(|i| json!({ "key": format!("/works/OL{}W", i), "title": format!("Book {}", i) }))
        .collect();
    Json(json!({ "docs": docs }))
}

async fn work_handler() -> Json<Value> {
    Json(json!({
        "key": "/works/OL1W",
        "title": "Stub Work",
        "covers": [12345],
        "subjects": ["Testing"],
        "subject_places": ["Localhost"]
    }))
}

async fn bare_work() -> Json<Value> {
    Json(json!({ "key": "/works/OL2W", "title": "Bare", "covers": [] }))
}

async fn server_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn garbage() -> &'static str {
    "<html>definitely not json</html>"
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_success_passes_query_and_normalizes() {
    let base = spawn_stub(Router::new().route("/search.json", get(search_handler))).await;
    let catalog = live_catalog(base);

    let results = catalog.search_books("dune messiah").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "/works/OL1W");
    assert_eq!(results[0].title, "dune messiah");
    assert_eq!(results[0].authors, vec!["A. Author"]);
    assert_eq!(results[0].published.to_string(), "2001");
}

#[tokio::test]
async fn test_search_caps_results() {
    let base = spawn_stub(Router::new().route("/search.json", get(many_results))).await;
    let catalog = live_catalog(base);

    let results = catalog.search_books("anything").await;

    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results[0].id, "/works/OL0W");
}

#[tokio::test]
async fn test_search_non_success_status_is_empty() {
    let base = spawn_stub(Router::new().route("/search.json", get(server_error))).await;
    let catalog = live_catalog(base);

    assert!(catalog.search_books("anything").await.is_empty());
}

#[tokio::test]
async fn test_search_malformed_body_is_empty() {
    let base = spawn_stub(Router::new().route("/search.json", get(garbage))).await;
    let catalog = live_catalog(base);

    assert!(catalog.search_books("anything").await.is_empty());
}

#[tokio::test]
async fn test_search_network_error_is_empty() {
    // Bind then drop a listener to get a port nobody is serving
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = live_catalog(Url::parse(&format!("http://{}/", addr)).unwrap());

    assert!(catalog.search_books("anything").await.is_empty());
    assert!(catalog.get_book("/works/OL1W").await.is_none());
}

// =============================================================================
// Detail
// =============================================================================

#[tokio::test]
async fn test_get_book_success() {
    let base = spawn_stub(Router::new().route("/works/OL1W.json", get(work_handler))).await;
    let catalog = live_catalog(base);

    let book = catalog.get_book("/works/OL1W").await.expect("book");

    assert_eq!(book.id, "/works/OL1W");
    assert_eq!(book.title, "Stub Work");
    assert_eq!(
        book.cover.as_deref(),
        Some(format!("{}/b/id/12345-L.jpg", COVERS_URL).as_str())
    );
    assert_eq!(book.subjects, vec!["Testing"]);
    assert_eq!(book.places, vec!["Localhost"]);
    assert!(book.people.is_empty());
}

#[tokio::test]
async fn test_get_book_empty_covers_has_no_cover() {
    let base = spawn_stub(Router::new().route("/works/OL2W.json", get(bare_work))).await;
    let catalog = live_catalog(base);

    let book = catalog.get_book("/works/OL2W").await.expect("book");

    assert!(book.cover.is_none());
    assert!(book.subjects.is_empty());
}

#[tokio::test]
async fn test_get_book_not_found_is_none() {
    let base = spawn_stub(Router::new().route("/works/OL3W.json", get(not_found))).await;
    let catalog = live_catalog(base);

    assert!(catalog.get_book("/works/OL3W").await.is_none());
}

#[tokio::test]
async fn test_get_book_malformed_body_is_none() {
    let base = spawn_stub(Router::new().route("/works/OL4W.json", get(garbage))).await;
    let catalog = live_catalog(base);

    assert!(catalog.get_book("/works/OL4W").await.is_none());
}

// =============================================================================
// Mock mode
// =============================================================================

#[tokio::test]
async fn test_mock_mode_serves_fixtures() {
    let catalog = Catalog::from_config(&CatalogConfig::mock()).unwrap();
    assert_eq!(catalog.source_name(), "mock");

    let results = catalog.search_books("tolkien").await;
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|item| !item.id.is_empty()));
    assert!(results[2].published.is_unknown());

    let book = catalog.get_book("/works/OL27448W").await.expect("book");
    assert_eq!(book.title, "The Lord of the Rings");
    assert_eq!(
        book.cover.as_deref(),
        Some("https://covers.openlibrary.org/b/id/14625765-L.jpg")
    );
}
