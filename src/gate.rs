//! Validity gate.
//!
//! Before any record is built the page must have exactly one result
//! container. Once that holds, an empty item list is either a genuine "no
//! results" page (GitHub renders a blank-slate placeholder) or a sign that the
//! row selector no longer matches the live markup.

use dom_query::{Document, Selection};
use tracing::{debug, warn};

use crate::content_type::ContentType;
use crate::dom;
use crate::error::{Error, Result};
use crate::selector::{self, rules};

/// Outcome of a page that passed the structural check.
#[derive(Debug)]
pub enum Validity<'a> {
    /// Item nodes in document order. Never empty.
    Items(Vec<Selection<'a>>),
    /// The container says there are no results for this selection.
    Empty,
}

impl Validity<'_> {
    /// Number of item nodes found.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Empty => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Locate the single result container of a trending page.
///
/// # Errors
///
/// [`Error::MissingMain`] when the page has no `<main>`, and
/// [`Error::Structural`] when `<main>` does not hold exactly one container.
pub fn locate_container(document: &Document) -> Result<Selection<'_>> {
    let root = dom::root(document);
    let main = selector::query(&root, &rules::MAIN).ok_or(Error::MissingMain)?;

    let mut containers = selector::query_all(&main, &rules::CONTAINER);
    if containers.len() != 1 {
        return Err(Error::Structural {
            found: containers.len(),
        });
    }

    Ok(containers.remove(0))
}

/// Check a page and collect its item nodes for `content_type`.
///
/// # Errors
///
/// Structural errors from [`locate_container`], and
/// [`Error::UnexpectedEmpty`] when the container has neither items nor an
/// empty-state placeholder.
pub fn validate(document: &Document, content_type: ContentType) -> Result<Validity<'_>> {
    let container = locate_container(document)?;
    let items = selector::query_all(&container, &content_type.rules().item);
    debug!(
        content_type = %content_type,
        items = items.len(),
        "result container located"
    );

    if !items.is_empty() {
        return Ok(Validity::Items(items));
    }

    if selector::query(&container, &rules::EMPTY_STATE).is_some() {
        debug!(content_type = %content_type, "empty-state placeholder present");
        return Ok(Validity::Empty);
    }

    warn!(
        content_type = %content_type,
        selector = %content_type.rules().item,
        "container holds no items and no empty-state placeholder; item selector may be stale"
    );
    Err(Error::UnexpectedEmpty(content_type))
}
