//! Error types for git-trend.
//!
//! This module defines the errors returned by fetching, validating and
//! extracting a trending page.

use crate::content_type::ContentType;

/// Error type for trending operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page has no `<main>` region to search for results.
    #[error("page layout unrecognized: no main content region")]
    MissingMain,

    /// The main region did not hold exactly one result container.
    #[error("page layout unrecognized: expected 1 result container, found {found}")]
    Structural {
        /// Number of candidate containers found.
        found: usize,
    },

    /// The container holds no items and no empty-state marker either.
    ///
    /// Usually means the item selector no longer matches the live markup.
    #[error("could not get trending {0} from the page")]
    UnexpectedEmpty(ContentType),

    /// A required node inside an item was missing or malformed.
    #[error("could not parse {field} of item {rank}: {reason}")]
    FieldExtraction {
        /// 1-based position of the offending item.
        rank: usize,
        /// Field being extracted.
        field: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// The page could not be retrieved.
    #[error("could not get the requested page {url}: {message}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The requested filters cannot be combined or are unsupported.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Writing rendered output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the failure points at a change in the upstream page layout.
    ///
    /// These are worth reporting upstream rather than retrying.
    #[must_use]
    pub fn is_layout_change(&self) -> bool {
        matches!(
            self,
            Self::MissingMain
                | Self::Structural { .. }
                | Self::UnexpectedEmpty(_)
                | Self::FieldExtraction { .. }
        )
    }
}

/// Result type alias for trending operations.
pub type Result<T> = std::result::Result<T, Error>;
