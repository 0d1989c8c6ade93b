//! HTML generation for the search pages
//!
//! Uses quick-xml so every title, author and subject coming from the catalog
//! is escaped on the way out.

use super::View;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use shelf_core::{BookDetail, SearchResultItem};
use std::io::Cursor;
use thiserror::Error;

pub const PAGE_TITLE: &str = "Book search";
pub const FRONTPAGE_TEXT: &str = "This book search uses data from the Open Library API.";
pub const NOTHING_FOUND_TEXT: &str = "Nothing found";
pub const NO_BOOK_TEXT: &str = "No book found.";

type HtmlResult = Result<(), quick_xml::Error>;

/// Errors that occur while rendering a page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendered page is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render a complete page: search form in the header, `view` in the main area
pub fn render_page(view: &View, query: &str) -> Result<String, RenderError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", "en"));
    writer.write_event(Event::Start(html))?;

    // Head
    writer.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    writer.write_event(Event::Empty(meta))?;
    write_text_element(&mut writer, "title", None, PAGE_TITLE)?;
    let mut search_link = BytesStart::new("link");
    search_link.push_attribute(("rel", "search"));
    search_link.push_attribute(("type", "application/opensearchdescription+xml"));
    search_link.push_attribute(("href", "/opensearch.xml"));
    search_link.push_attribute(("title", "Shelf"));
    writer.write_event(Event::Empty(search_link))?;
    if let Some(api_href) = view.api_href() {
        let mut api_link = BytesStart::new("link");
        api_link.push_attribute(("rel", "alternate"));
        api_link.push_attribute(("type", "application/json"));
        api_link.push_attribute(("href", api_href.as_str()));
        writer.write_event(Event::Empty(api_link))?;
    }
    writer.write_event(Event::End(BytesEnd::new("head")))?;

    // Body
    writer.write_event(Event::Start(BytesStart::new("body")))?;
    start_element(&mut writer, "div", "layout")?;

    start_element(&mut writer, "header", "layout__header")?;
    write_search_form(&mut writer, query)?;
    end_element(&mut writer, "header")?;

    start_element(&mut writer, "main", "layout__main")?;
    write_view(&mut writer, view)?;
    end_element(&mut writer, "main")?;

    end_element(&mut writer, "div")?;
    writer.write_event(Event::End(BytesEnd::new("body")))?;
    writer.write_event(Event::End(BytesEnd::new("html")))?;

    into_string(writer)
}

/// Render only the main-area fragment for a view
#[cfg(test)]
fn render_view(view: &View) -> Result<String, RenderError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_view(&mut writer, view)?;
    into_string(writer)
}

fn into_string(writer: Writer<Cursor<Vec<u8>>>) -> Result<String, RenderError> {
    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

fn write_view<W: std::io::Write>(writer: &mut Writer<W>, view: &View) -> HtmlResult {
    match view {
        View::Frontpage => write_text_element(writer, "p", None, FRONTPAGE_TEXT),
        View::Results { query, books } => write_search_results(writer, books, query),
        View::Book(book) => write_book(writer, book),
        View::BookNotFound => write_text_element(writer, "p", None, NO_BOOK_TEXT),
    }
}

/// Search form; submitting it navigates to `/?query=...`
fn write_search_form<W: std::io::Write>(writer: &mut Writer<W>, value: &str) -> HtmlResult {
    let mut form = BytesStart::new("form");
    form.push_attribute(("class", "search"));
    form.push_attribute(("method", "get"));
    form.push_attribute(("action", "/"));
    writer.write_event(Event::Start(form))?;

    let mut input = BytesStart::new("input");
    input.push_attribute(("type", "search"));
    input.push_attribute(("name", "query"));
    input.push_attribute(("placeholder", "Book title"));
    input.push_attribute(("value", value));
    writer.write_event(Event::Empty(input))?;

    write_text_element(writer, "button", None, "Search")?;
    end_element(writer, "form")
}

/// Result list with a heading naming the query, or the empty-state message
fn write_search_results<W: std::io::Write>(
    writer: &mut Writer<W>,
    books: &[SearchResultItem],
    query: &str,
) -> HtmlResult {
    start_element(writer, "div", "results")?;
    write_text_element(
        writer,
        "h1",
        Some("results__title"),
        &format!("Search results for: {}", query),
    )?;

    if books.is_empty() {
        write_text_element(writer, "p", Some("results__empty"), NOTHING_FOUND_TEXT)?;
    } else {
        start_element(writer, "ul", "results__container")?;
        for book in books {
            start_element(writer, "li", "results__result")?;
            write_search_result(writer, book)?;
            end_element(writer, "li")?;
        }
        end_element(writer, "ul")?;
    }

    end_element(writer, "div")
}

/// One result: linked title, authors and first publication year
fn write_search_result<W: std::io::Write>(
    writer: &mut Writer<W>,
    book: &SearchResultItem,
) -> HtmlResult {
    start_element(writer, "div", "result")?;

    start_element(writer, "h2", "result__title")?;
    let href = format!("/?id={}", urlencoding::encode(&book.id));
    let mut link = BytesStart::new("a");
    link.push_attribute(("href", href.as_str()));
    writer.write_event(Event::Start(link))?;
    writer.write_event(Event::Text(BytesText::new(&book.title)))?;
    writer.write_event(Event::End(BytesEnd::new("a")))?;
    end_element(writer, "h2")?;

    if !book.authors.is_empty() {
        write_text_element(
            writer,
            "p",
            Some("result__authors"),
            &format!("By {}", book.authors.join(", ")),
        )?;
    }

    if !book.published.is_unknown() {
        write_text_element(
            writer,
            "p",
            Some("result__published"),
            &format!("First published {}", book.published),
        )?;
    }

    end_element(writer, "div")
}

/// Detail view; each list section only appears when it has entries
fn write_book<W: std::io::Write>(writer: &mut Writer<W>, book: &BookDetail) -> HtmlResult {
    start_element(writer, "div", "book")?;
    write_text_element(writer, "h2", Some("book__title"), &book.title)?;

    if let Some(ref cover) = book.cover {
        let mut img = BytesStart::new("img");
        img.push_attribute(("class", "book__cover"));
        img.push_attribute(("src", cover.as_str()));
        img.push_attribute(("alt", book.title.as_str()));
        writer.write_event(Event::Empty(img))?;
    }

    write_list_section(writer, "book__people", "People", &book.people)?;
    write_list_section(writer, "book__subjects", "Subjects", &book.subjects)?;
    write_list_section(writer, "book__places", "Places", &book.places)?;

    end_element(writer, "div")
}

fn write_list_section<W: std::io::Write>(
    writer: &mut Writer<W>,
    class: &str,
    heading: &str,
    items: &[String],
) -> HtmlResult {
    if items.is_empty() {
        return Ok(());
    }

    start_element(writer, "div", &format!("book__details {}", class))?;
    write_text_element(writer, "h3", None, heading)?;
    writer.write_event(Event::Start(BytesStart::new("ul")))?;
    for item in items {
        write_text_element(writer, "li", None, item)?;
    }
    writer.write_event(Event::End(BytesEnd::new("ul")))?;
    end_element(writer, "div")
}

/// Open an element carrying a class attribute
fn start_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, class: &str) -> HtmlResult {
    let mut elem = BytesStart::new(name);
    elem.push_attribute(("class", class));
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

fn end_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str) -> HtmlResult {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write a simple text element, optionally with a class
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    class: Option<&str>,
    content: &str,
) -> HtmlResult {
    let mut elem = BytesStart::new(name);
    if let Some(class) = class {
        elem.push_attribute(("class", class));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
