//! Book detail record

use serde::{Deserialize, Serialize};

/// Everything the detail view shows about a single work
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookDetail {
    /// Catalog key
    pub id: String,

    /// Work title, empty when the catalog has none
    pub title: String,

    /// Large cover image URL, derived from the first cover id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Subjects the work is about
    pub subjects: Vec<String>,

    /// Places the work is about
    pub places: Vec<String>,

    /// People the work is about
    pub people: Vec<String>,
}

impl BookDetail {
    /// Create a detail record with no cover and empty lists
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}
