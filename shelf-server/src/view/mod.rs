//! View states and page routing
//!
//! A [`Route`] is decided from the URL parameters, then [`resolve`] runs the
//! matching fetch and yields the [`View`] to render.

pub mod html;
pub mod opensearch;

use shelf_core::{BookDetail, Catalog, SearchResultItem};

/// Which flow the current URL asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Show one book (`?id=`)
    Book(String),

    /// Show search results (`?query=`)
    Search(String),

    /// Nothing requested
    Frontpage,
}

impl Route {
    /// Decide the route; a non-empty `id` wins over `query`
    pub fn from_params(id: Option<&str>, query: Option<&str>) -> Self {
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        if let Some(id) = non_empty(id) {
            Route::Book(id)
        } else if let Some(query) = non_empty(query) {
            Route::Search(query)
        } else {
            Route::Frontpage
        }
    }

    /// Search string to prefill the search form with
    pub fn query(&self) -> &str {
        match self {
            Route::Search(query) => query,
            _ => "",
        }
    }
}

/// What the main area of the page shows
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Frontpage,
    Results {
        query: String,
        books: Vec<SearchResultItem>,
    },
    Book(BookDetail),
    BookNotFound,
}

impl View {
    /// JSON API URL serving the same data, for the page's alternate link
    pub fn api_href(&self) -> Option<String> {
        match self {
            View::Results { query, .. } => Some(format!(
                "/api/v1/search?q={}",
                urlencoding::encode(query)
            )),
            View::Book(book) => Some(format!("/api/v1/book?id={}", urlencoding::encode(&book.id))),
            View::Frontpage | View::BookNotFound => None,
        }
    }
}

/// Run the fetch a route needs and produce the view to render
pub async fn resolve(catalog: &Catalog, route: &Route) -> View {
    match route {
        Route::Book(id) => fetch_book(catalog, id).await,
        Route::Search(query) => search(catalog, query).await,
        Route::Frontpage => View::Frontpage,
    }
}

/// Detail flow: a missing book becomes the not-found view
pub async fn fetch_book(catalog: &Catalog, id: &str) -> View {
    match catalog.get_book(id).await {
        Some(book) => View::Book(book),
        None => View::BookNotFound,
    }
}

/// Search flow: an empty list still renders as results
pub async fn search(catalog: &Catalog, query: &str) -> View {
    let books = catalog.search_books(query).await;
    tracing::debug!(query, count = books.len(), "Search finished");
    View::Results {
        query: query.to_string(),
        books,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{CatalogConfig, MockCatalog};

    #[test]
    fn test_route_prefers_id() {
        assert_eq!(
            Route::from_params(Some("/works/OL1W"), Some("dune")),
            Route::Book("/works/OL1W".to_string())
        );
        assert_eq!(
            Route::from_params(None, Some(" dune ")),
            Route::Search("dune".to_string())
        );
        assert_eq!(Route::from_params(Some(""), Some("  ")), Route::Frontpage);
        assert_eq!(Route::from_params(None, None), Route::Frontpage);
    }

    #[test]
    fn test_api_href() {
        let results = View::Results {
            query: "lord of the rings".to_string(),
            books: Vec::new(),
        };
        assert_eq!(
            results.api_href().as_deref(),
            Some("/api/v1/search?q=lord%20of%20the%20rings")
        );

        let book = View::Book(BookDetail::new("/works/OL1W", "Dune"));
        assert_eq!(
            book.api_href().as_deref(),
            Some("/api/v1/book?id=%2Fworks%2FOL1W")
        );

        assert!(View::Frontpage.api_href().is_none());
        assert!(View::BookNotFound.api_href().is_none());
    }

    #[tokio::test]
    async fn test_resolve_flows() {
        let catalog = Catalog::from_config(&CatalogConfig::mock()).unwrap();

        let view = resolve(&catalog, &Route::Search("tolkien".to_string())).await;
        assert!(matches!(view, View::Results { ref books, .. } if books.len() == 3));

        let view = resolve(&catalog, &Route::Book("/works/OL27448W".to_string())).await;
        assert!(matches!(view, View::Book(ref book) if book.title == "The Lord of the Rings"));

        assert_eq!(resolve(&catalog, &Route::Frontpage).await, View::Frontpage);
    }

    #[tokio::test]
    async fn test_failed_fetch_views() {
        let catalog = Catalog::new(MockCatalog::unavailable(), "https://covers.openlibrary.org");

        assert_eq!(fetch_book(&catalog, "/works/OL1W").await, View::BookNotFound);
        assert_eq!(
            search(&catalog, "dune").await,
            View::Results {
                query: "dune".to_string(),
                books: Vec::new(),
            }
        );
    }
}
