//! Selector tables for the GitHub trending pages.
//!
//! One [`Rules`] value per content type. The extractor and the validity gate
//! never name a tag or class directly; everything they look for is listed
//! here.

use super::NodeSelector;

// === Page structure ===

/// The page's main content region.
pub const MAIN: NodeSelector = NodeSelector::tag(&["main"]);

/// The box holding all result rows. Exactly one is expected inside [`MAIN`].
pub const CONTAINER: NodeSelector = NodeSelector::tag(&["div"]).with_classes(&["Box"]);

/// Placeholder GitHub shows when a filter combination has no results.
pub const EMPTY_STATE: NodeSelector = NodeSelector::tag(&["div"]).with_classes(&["blankslate"]);

// === Per content type ===

/// Item selector plus the field selectors for one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// One result row.
    pub item: NodeSelector,
    /// Field selectors, shaped by the record they produce.
    pub fields: FieldRules,
}

/// Field selectors for each record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRules {
    Repository(RepositoryFields),
    Developer(DeveloperFields),
}

/// Repository rows are flat: every field lives directly under the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryFields {
    /// Heading whose text reads `owner / name`.
    pub heading: NodeSelector,
    pub description: NodeSelector,
    pub language: NodeSelector,
    /// First muted link in the footer; the second one is forks.
    pub stars: NodeSelector,
}

/// Developer rows nest the identity inside a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeveloperFields {
    /// Inner node holding name and user id.
    pub container: NodeSelector,
    /// Display name, searched under `container`.
    pub name: NodeSelector,
    /// Login, searched under `container`.
    pub user_id: NodeSelector,
    /// Popular repository name, searched under the item.
    pub repository: NodeSelector,
    /// Popular repository description, searched under the item.
    pub description: NodeSelector,
}

/// Rules for `https://github.com/trending`.
pub static REPOSITORY_RULES: Rules = Rules {
    item: NodeSelector::tag(&["article"]).with_classes(&["Box-row"]),
    fields: FieldRules::Repository(RepositoryFields {
        // Older markup used <h1>, current markup uses <h2>.
        heading: NodeSelector::tag(&["h1", "h2"]).with_classes(&["h3", "lh-condensed"]),
        // Only the layout class; GitHub renamed the colour classes beside it.
        description: NodeSelector::tag(&["p"]).with_classes(&["col-9"]),
        language: NodeSelector::tag(&["span"]).with_attr("itemprop", "programmingLanguage"),
        stars: NodeSelector::tag(&["a"]).with_classes(&["Link--muted", "d-inline-block", "mr-3"]),
    }),
};

/// Rules for `https://github.com/trending/developers`.
pub static DEVELOPER_RULES: Rules = Rules {
    item: NodeSelector::tag(&["article"]).with_classes(&["Box-row", "d-flex"]),
    fields: FieldRules::Developer(DeveloperFields {
        container: NodeSelector::tag(&["div"]).with_classes(&["col-sm-8", "d-md-flex"]),
        name: NodeSelector::tag(&["h1"]).with_classes(&["h3", "lh-condensed"]),
        user_id: NodeSelector::tag(&["p"]).with_classes(&["f4", "text-normal", "mb-1"]),
        repository: NodeSelector::tag(&["h1"]).with_classes(&["h4", "lh-condensed"]),
        // Colour classes left out, as for the repository description.
        description: NodeSelector::tag(&["div"]).with_classes(&["f6", "mt-1"]),
    }),
};
