//! Record types produced by the catalog layer

mod detail;
mod search;

pub use detail::BookDetail;
pub use search::{Published, SearchResultItem};
