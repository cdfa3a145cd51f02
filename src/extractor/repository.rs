use dom_query::Selection;

use super::{extract_text, required};
use crate::error::{Error, Result};
use crate::result::RepositoryRecord;
use crate::selector::rules::RepositoryFields;

/// Turn heading text such as `"facebook / react"` into `"facebook/react"`.
///
/// Splits on the first `/` only and trims both halves. Returns `None` if the
/// text has no `/` at all.
#[must_use]
pub fn split_full_name(heading: &str) -> Option<String> {
    let (owner, name) = heading.split_once('/')?;
    Some(format!("{}/{}", owner.trim(), name.trim()))
}

pub(super) fn extract(item: &Selection, rank: usize, fields: &RepositoryFields) -> Result<RepositoryRecord> {
    let heading = required(item, &fields.heading, rank, "repository name")?;
    let full_name = split_full_name(&heading).ok_or_else(|| Error::FieldExtraction {
        rank,
        field: "repository name",
        reason: format!("heading {heading:?} has no '/' separator"),
    })?;

    Ok(RepositoryRecord::new(
        rank,
        full_name,
        extract_text(item, &fields.description),
        extract_text(item, &fields.language),
        extract_text(item, &fields.stars),
    ))
}
