//! Selector Infrastructure
//!
//! A [`NodeSelector`] describes one kind of node on the trending page: a tag
//! name (or a few alternatives), a set of class tokens and optionally an exact
//! attribute value. [`query`] and [`query_all`] walk descendants in document
//! order and keep the nodes a selector matches.
//!
//! The static tables in [`rules`] say which selectors apply to which content
//! type.

use std::fmt;

use dom_query::Selection;

use crate::dom;

pub mod rules;

/// Tag + class-token + attribute predicate.
///
/// Class matching is token-set membership: every token listed here must
/// appear in the element's class attribute, in any order, alongside any
/// number of other tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSelector {
    /// Accepted tag names (lowercase). Any one of them matches.
    pub tags: &'static [&'static str],
    /// Class tokens that must all be present.
    pub classes: &'static [&'static str],
    /// Attribute that must be present with exactly this value.
    pub attr: Option<(&'static str, &'static str)>,
}

impl NodeSelector {
    /// Selector matching any of the given tag names.
    #[must_use]
    pub const fn tag(tags: &'static [&'static str]) -> Self {
        Self {
            tags,
            classes: &[],
            attr: None,
        }
    }

    /// Require the given class tokens.
    #[must_use]
    pub const fn with_classes(self, classes: &'static [&'static str]) -> Self {
        Self { classes, ..self }
    }

    /// Require an attribute with an exact value.
    #[must_use]
    pub const fn with_attr(self, name: &'static str, value: &'static str) -> Self {
        Self {
            attr: Some((name, value)),
            ..self
        }
    }

    /// Test one element against this selector.
    #[must_use]
    pub fn matches(&self, sel: &Selection) -> bool {
        let Some(tag) = dom::tag_name(sel) else {
            return false;
        };
        if !self.tags.iter().any(|t| *t == tag) {
            return false;
        }

        if !self.classes.is_empty() {
            let tokens = dom::class_tokens(sel);
            if !self.classes.iter().all(|c| tokens.iter().any(|t| t == *c)) {
                return false;
            }
        }

        match self.attr {
            Some((name, value)) => dom::get_attribute(sel, name).is_some_and(|v| v == value),
            None => true,
        }
    }
}

impl fmt::Display for NodeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join("|"))?;
        for class in self.classes {
            write!(f, ".{class}")?;
        }
        if let Some((name, value)) = self.attr {
            write!(f, "[{name}={value}]")?;
        }
        Ok(())
    }
}

/// Query for the first descendant matching the selector
///
/// Iterates through all descendants of `root` in document order and returns
/// the first element the selector matches. `root` itself is not considered.
///
/// # Example
///
/// ```rust
/// use git_trend::dom;
/// use git_trend::selector::{self, NodeSelector};
///
/// let doc = dom::parse(r#"<div><p class="col-9 my-1">text</p></div>"#);
/// let root = doc.select("div");
///
/// let desc = NodeSelector::tag(&["p"]).with_classes(&["col-9"]);
/// assert!(selector::query(&root, &desc).is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, selector: &NodeSelector) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| selector.matches(sel))
}

/// Query for all descendants matching the selector, in document order.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, selector: &NodeSelector) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| selector.matches(sel))
        .collect()
}
