//! Upstream wire types and normalization
//!
//! Every upstream field is optional; normalization fills in defaults so the
//! records handed to callers always carry every field.

use super::MAX_RESULTS;
use crate::types::{BookDetail, Published, SearchResultItem};
use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /search.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Option<Vec<SearchDoc>>,
}

/// One document in a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDoc {
    pub key: Option<String>,
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<Value>,
}

/// Body of `GET /works/{id}.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkResponse {
    pub key: Option<String>,
    pub title: Option<String>,
    pub covers: Option<Vec<i64>>,
    pub subjects: Option<Vec<String>>,
    pub subject_places: Option<Vec<String>>,
    pub subject_people: Option<Vec<String>>,
}

/// Map a search response into result items
///
/// Only the first [`MAX_RESULTS`] documents are considered; those without a
/// catalog key are dropped.
pub fn normalize_search(response: SearchResponse) -> Vec<SearchResultItem> {
    response
        .docs
        .unwrap_or_default()
        .into_iter()
        .take(MAX_RESULTS)
        .filter_map(normalize_doc)
        .collect()
}

fn normalize_doc(doc: SearchDoc) -> Option<SearchResultItem> {
    let id = doc.key.filter(|key| !key.is_empty())?;

    Some(SearchResultItem {
        id,
        title: doc.title.unwrap_or_default(),
        authors: doc.author_name.unwrap_or_default(),
        published: doc
            .first_publish_year
            .map(published_from_value)
            .unwrap_or_default(),
    })
}

fn published_from_value(value: Value) -> Published {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(year), _) => Published::Year(year),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Published::Year(f as i64)
            }
            _ => Published::Text(n.to_string()),
        },
        Value::String(text) => Published::Text(text),
        _ => Published::default(),
    }
}

/// Map a work response into a detail record
///
/// `requested_id` stands in when the response carries no key.
pub fn normalize_work(response: WorkResponse, requested_id: &str, covers_url: &str) -> BookDetail {
    let cover = response
        .covers
        .as_ref()
        .and_then(|covers| covers.first())
        .map(|cover_id| cover_url(covers_url, *cover_id));

    BookDetail {
        id: response
            .key
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| requested_id.to_string()),
        title: response.title.unwrap_or_default(),
        cover,
        subjects: response.subjects.unwrap_or_default(),
        places: response.subject_places.unwrap_or_default(),
        people: response.subject_people.unwrap_or_default(),
    }
}

/// Large cover image URL for a cover id
pub fn cover_url(covers_url: &str, cover_id: i64) -> String {
    format!("{}/b/id/{}-L.jpg", covers_url.trim_end_matches('/'), cover_id)
}
