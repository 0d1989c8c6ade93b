//! Search result summary record

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in a search result list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    /// Catalog key, e.g. `/works/OL262758W`
    pub id: String,

    /// Work title, empty when the catalog has none
    pub title: String,

    /// Author names in catalog order
    pub authors: Vec<String>,

    /// First publication year
    pub published: Published,
}

impl SearchResultItem {
    /// Create a new item with empty optional fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            published: Published::default(),
        }
    }

    /// Add an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    /// Set the first publication year
    pub fn with_year(mut self, year: i64) -> Self {
        self.published = Published::Year(year);
        self
    }
}

/// First publication date as the catalog reports it
///
/// Serializes as a bare number or a bare string, so an unknown year becomes `""`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Published {
    Year(i64),
    Text(String),
}

impl Published {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Published::Text(text) if text.is_empty())
    }
}

impl Default for Published {
    fn default() -> Self {
        Published::Text(String::new())
    }
}

impl fmt::Display for Published {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Published::Year(year) => write!(f, "{}", year),
            Published::Text(text) => f.write_str(text),
        }
    }
}
