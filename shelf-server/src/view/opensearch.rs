//! OpenSearch descriptor for browser search discovery

/// Generate OpenSearch descriptor XML
///
/// This lets browsers add the search page as a search engine.
pub fn render_opensearch(base_url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<OpenSearchDescription xmlns="http://a9.com/-/spec/opensearch/1.1/">
  <ShortName>Shelf</ShortName>
  <Description>Search books in the Open Library catalog</Description>
  <InputEncoding>UTF-8</InputEncoding>
  <OutputEncoding>UTF-8</OutputEncoding>
  <Url type="text/html" template="{base_url}/?query={{searchTerms}}"/>
  <Url type="application/json" template="{base_url}/api/v1/search?q={{searchTerms}}"/>
</OpenSearchDescription>"#,
        base_url = base_url
    )
}
