//! Field extraction.
//!
//! Every field comes from the same primitive: find the first descendant
//! matching a selector and take its trimmed text. A missing node yields the
//! field's fallback, never an error. Only nodes the record cannot exist
//! without (the repository heading, the developer's name) are required.

mod developer;
mod repository;

use dom_query::Selection;

use crate::dom;
use crate::error::{Error, Result};
use crate::result::TrendingRecord;
use crate::selector::rules::FieldRules;
use crate::selector::{self, NodeSelector};

pub use repository::split_full_name;

/// Trimmed text of the first descendant of `node` matching `selector`.
///
/// Returns `None` if nothing matches.
#[must_use]
pub fn extract_text(node: &Selection, selector: &NodeSelector) -> Option<String> {
    selector::query(node, selector).map(|found| dom::trimmed_text(&found))
}

/// Like [`extract_text`] but substitutes `fallback` when nothing matches.
#[must_use]
pub fn extract_field(node: &Selection, selector: &NodeSelector, fallback: &str) -> String {
    extract_text(node, selector).unwrap_or_else(|| fallback.to_string())
}

/// Build the record for one item node.
///
/// The shape of the record follows the shape of `fields`.
///
/// # Errors
///
/// [`Error::FieldExtraction`] when a required node is missing or malformed.
pub fn extract_record(item: &Selection, rank: usize, fields: &FieldRules) -> Result<TrendingRecord> {
    match fields {
        FieldRules::Repository(f) => repository::extract(item, rank, f).map(TrendingRecord::Repository),
        FieldRules::Developer(f) => developer::extract(item, rank, f).map(TrendingRecord::Developer),
    }
}

/// Text of a node the record cannot be built without.
fn required(
    node: &Selection,
    selector: &NodeSelector,
    rank: usize,
    field: &'static str,
) -> Result<String> {
    extract_text(node, selector).ok_or_else(|| Error::FieldExtraction {
        rank,
        field,
        reason: format!("no node matches {selector}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESC: NodeSelector = NodeSelector::tag(&["p"]).with_classes(&["col-9"]);

    #[test]
    fn test_extract_text_trims_whitespace() {
        let doc = dom::parse("<article><p class=\"col-9 my-1\">\n   A library\t\r\n</p></article>");
        let item = doc.select("article");

        assert_eq!(extract_text(&item, &DESC), Some("A library".to_string()));
    }

    #[test]
    fn test_extract_text_first_match_wins() {
        let doc = dom::parse(
            r#"<article><p class="col-9">first</p><p class="col-9">second</p></article>"#,
        );

        assert_eq!(extract_text(&doc.select("article"), &DESC), Some("first".to_string()));
    }

    #[test]
    fn test_missing_node_uses_fallback() {
        let doc = dom::parse("<article><span>other</span></article>");
        let item = doc.select("article");

        assert_eq!(extract_text(&item, &DESC), None);
        assert_eq!(extract_field(&item, &DESC, ""), "");
        assert_eq!(extract_field(&item, &DESC, "n/a"), "n/a");
    }

    #[test]
    fn test_present_but_empty_is_not_fallback() {
        let doc = dom::parse(r#"<article><p class="col-9">   </p></article>"#);

        assert_eq!(extract_text(&doc.select("article"), &DESC), Some(String::new()));
    }

    #[test]
    fn test_required_reports_rank_and_field() {
        let doc = dom::parse("<article></article>");

        let err = required(&doc.select("article"), &DESC, 4, "description");
        match err {
            Err(Error::FieldExtraction { rank, field, reason }) => {
                assert_eq!(rank, 4);
                assert_eq!(field, "description");
                assert!(reason.contains("p.col-9"));
            }
            other => panic!("expected FieldExtraction, got {other:?}"),
        }
    }
}
