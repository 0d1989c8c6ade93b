//! Shelf Core Library
//!
//! This crate provides the record types and the catalog access layer for the Shelf
//! book search. Upstream catalog responses are normalized into two fixed record
//! shapes before they reach any presentation code.

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{Catalog, CatalogSource, MockCatalog, OpenLibrary, MAX_RESULTS};
pub use config::{CatalogConfig, CatalogMode};
pub use error::{CatalogError, ConfigError, Result, ShelfError};
pub use types::{BookDetail, Published, SearchResultItem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_creation() {
        let item = SearchResultItem::new("/works/OL1W", "Test Book");
        assert_eq!(item.id, "/works/OL1W");
        assert_eq!(item.title, "Test Book");
        assert!(item.authors.is_empty());
    }
}
