//! Show command implementation

use super::loading_spinner;
use anyhow::Result;
use shelf_core::Catalog;

/// Fetch one book and print its details
pub async fn show(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let spinner = loading_spinner();
    let book = catalog.get_book(id.trim()).await;
    spinner.finish_and_clear();

    let Some(book) = book else {
        if json {
            println!("null");
        } else {
            println!("No book found.");
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
        return Ok(());
    }

    println!("Title:    {}", book.title);
    println!("Id:       {}", book.id);
    if let Some(cover) = &book.cover {
        println!("Cover:    {}", cover);
    }

    print_section("People", &book.people);
    print_section("Subjects", &book.subjects);
    print_section("Places", &book.places);

    Ok(())
}

fn print_section(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}:", heading);
    for item in items {
        println!("  - {}", item);
    }
}
