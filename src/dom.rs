//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the selector and
//! extraction layers. Everything that touches raw nodes goes through here so
//! the rest of the crate reads in terms of tags, class tokens and text.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Characters stripped from both ends of extracted text.
pub const TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection holding the document node itself.
///
/// Queries run from here see every element of the page.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Whitespace-separated tokens of the class attribute.
///
/// Returns an empty vector when the attribute is missing.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    class_name(sel)
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding spaces, tabs, newlines and carriage
/// returns removed. Inner whitespace is kept as found.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim_matches(TRIM_CHARS.as_slice()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_class_tokens() {
        let doc = parse(r#"<div class="Box-row  d-flex">content</div>"#);
        let div = doc.select("div");

        assert_eq!(class_name(&div), Some("Box-row  d-flex".to_string()));
        assert_eq!(class_tokens(&div), vec!["Box-row", "d-flex"]);
    }

    #[test]
    fn test_missing_attributes() {
        let doc = parse("<div>no attributes</div>");
        let div = doc.select("div");

        assert_eq!(class_name(&div), None);
        assert!(class_tokens(&div).is_empty());
        assert_eq!(get_attribute(&div, "itemprop"), None);
    }

    #[test]
    fn test_tag_name() {
        let doc = parse("<article><H2>title</H2></article>");

        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("h2")), Some("h2".to_string()));
    }

    #[test]
    fn test_trimmed_text_strips_only_outer_whitespace() {
        let doc = parse("<p>\n\t  facebook /\n   react \r\n</p>");
        let p = doc.select("p");

        assert_eq!(trimmed_text(&p), "facebook /\n   react");
    }

    #[test]
    fn test_trimmed_text_of_nested_nodes() {
        let doc = parse(r#"<a> <svg></svg> <span>1,234</span> </a>"#);

        assert_eq!(trimmed_text(&doc.select("a")), "1,234");
    }

    #[test]
    fn test_root_sees_whole_document() {
        let doc = parse("<main><div class=\"Box\"></div></main>");
        let all = root(&doc).select("div");

        assert_eq!(all.length(), 1);
    }

    #[test]
    fn test_text_of_empty_selection() {
        let doc = parse("<div>content</div>");
        let empty = doc.select("span");

        assert_eq!(trimmed_text(&empty), "");
    }
}
