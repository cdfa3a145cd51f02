//! Record normalization.
//!
//! Walks item nodes in document order, ranks them, extracts each one and
//! collects the records into a [`Trending`] map.

use dom_query::Selection;
use tracing::{debug, warn};

use crate::content_type::ContentType;
use crate::error::Result;
use crate::extractor;
use crate::result::Trending;

/// Build the ordered record map for `items`.
///
/// Rank is the item's 1-based position in `items`. A later item whose key
/// is already present replaces the earlier record in place.
///
/// # Errors
///
/// The first field extraction error aborts the whole run; no partial map is
/// returned.
pub fn normalize(items: &[Selection], content_type: ContentType) -> Result<Trending> {
    let fields = &content_type.rules().fields;
    let mut trending = Trending::with_capacity(content_type, items.len());

    for (index, item) in items.iter().enumerate() {
        let rank = index + 1;
        let record = extractor::extract_record(item, rank, fields)?;
        debug!(rank, key = record.key(), "extracted record");

        if let Some(previous) = trending.insert(record) {
            warn!(
                key = previous.key(),
                previous_rank = previous.rank(),
                rank,
                "duplicate key; keeping the later record"
            );
        }
    }

    Ok(trending)
}
