//! Search command implementation

use super::loading_spinner;
use anyhow::Result;
use serde::Serialize;
use shelf_core::{Catalog, SearchResultItem};

/// Search output
#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    total: usize,
    results: &'a [SearchResultItem],
}

/// Search the catalog and print the results
pub async fn search(catalog: &Catalog, query: &str, json: bool) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Search string must not be empty");
    }

    let spinner = loading_spinner();
    let results = catalog.search_books(query).await;
    spinner.finish_and_clear();

    tracing::debug!(count = results.len(), "Search finished");

    if json {
        let output = SearchOutput {
            query,
            total: results.len(),
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Search results for: {}", query);
    if results.is_empty() {
        println!("Nothing found");
        return Ok(());
    }

    for book in &results {
        println!();
        println!("{}", book.title);
        if !book.authors.is_empty() {
            println!("  By {}", book.authors.join(", "));
        }
        if !book.published.is_unknown() {
            println!("  First published {}", book.published);
        }
        println!("  Id: {}", book.id);
    }

    Ok(())
}
