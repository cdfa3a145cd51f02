//! # git-trend
//!
//! Reads GitHub's trending page for repositories or developers and turns it
//! into ranked, typed records.
//!
//! ## Quick Start
//!
//! ```rust
//! use git_trend::{extract, ContentType};
//!
//! let html = r#"<html><body><main><div class="Box">
//!   <article class="Box-row">
//!     <h2 class="h3 lh-condensed"><a href="/rust-lang/rust">rust-lang / rust</a></h2>
//!     <span itemprop="programmingLanguage">Rust</span>
//!   </article>
//! </div></main></body></html>"#;
//!
//! let trending = extract(html, ContentType::Repositories)?;
//! let first = trending.get("rust-lang/rust").expect("one record");
//! assert_eq!(first.rank(), 1);
//! assert_eq!(first.url(), "https://github.com/rust-lang/rust");
//! # Ok::<(), git_trend::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. [`gate`] checks that the page has exactly one result container and
//!    tells an empty result apart from markup that no longer matches.
//! 2. [`ContentType::rules`] picks the selectors for the requested list.
//! 3. [`extractor`] reads each row, substituting fallbacks for absent
//!    optional fields.
//! 4. [`normalize`] ranks the rows and builds the ordered [`Trending`] map.
//!
//! Fetching ([`fetch`]) and printing ([`render`]) sit on either side.

mod content_type;
mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Node selectors and the static selector tables.
pub mod selector;

/// Result container and item validation.
pub mod gate;

/// Per-row field extraction.
pub mod extractor;

/// Ranking and record collection.
pub mod normalize;

/// Supported language filters.
pub mod languages;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page retrieval.
pub mod fetch;

/// Text, table and JSON output.
pub mod render;

// Public API - re-exports
pub use content_type::ContentType;
pub use error::{Error, Result};
pub use fetch::{FetchOptions, HttpFetcher, PageFetcher};
pub use gate::Validity;
pub use options::{Period, Query, DEFAULT_BASE_URL};
pub use render::{Format, RenderOptions};
pub use result::{github_url, DeveloperRecord, RepositoryRecord, Trending, TrendingRecord};

use dom_query::Document;
use tracing::info;

/// Extracts trending records from an HTML page.
///
/// A page whose container reports no results yields an empty [`Trending`].
///
/// # Errors
///
/// Structural errors when the page layout is not recognised, and field
/// extraction errors when a row lacks a required node. Nothing is returned
/// partially.
pub fn extract(html: &str, content_type: ContentType) -> Result<Trending> {
    let document = dom::parse(html);
    extract_document(&document, content_type)
}

/// Extracts trending records from HTML bytes with charset detection.
///
/// # Errors
///
/// Same as [`extract`].
pub fn extract_bytes(html: &[u8], content_type: ContentType) -> Result<Trending> {
    let html = encoding::transcode_to_utf8(html, None);
    extract(&html, content_type)
}

/// Extracts trending records from an already parsed document.
///
/// # Errors
///
/// Same as [`extract`].
pub fn extract_document(document: &Document, content_type: ContentType) -> Result<Trending> {
    match gate::validate(document, content_type)? {
        Validity::Items(items) => normalize::normalize(&items, content_type),
        Validity::Empty => {
            info!(content_type = %content_type, "page reports no trending results");
            Ok(Trending::new(content_type))
        }
    }
}

/// Fetches the trending page for `query` and extracts its records.
///
/// `base_url` is the `/trending` location, normally [`DEFAULT_BASE_URL`].
///
/// # Errors
///
/// Query validation, fetch and extraction errors.
pub fn fetch_trending<F: PageFetcher + ?Sized>(
    fetcher: &F,
    query: &Query,
    base_url: &str,
) -> Result<Trending> {
    query.validate()?;
    let url = query.url(base_url)?;
    let html = fetcher.fetch(url.as_str())?;
    extract(&html, query.content_type)
}
