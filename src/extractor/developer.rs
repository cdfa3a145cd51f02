use dom_query::Selection;

use super::{extract_text, required};
use crate::error::{Error, Result};
use crate::result::DeveloperRecord;
use crate::selector::{self, rules::DeveloperFields};

pub(super) fn extract(item: &Selection, rank: usize, fields: &DeveloperFields) -> Result<DeveloperRecord> {
    let container = selector::query(item, &fields.container).ok_or_else(|| Error::FieldExtraction {
        rank,
        field: "developer",
        reason: format!("no node matches {}", fields.container),
    })?;

    let name = required(&container, &fields.name, rank, "developer name")?;
    let user_id = extract_text(&container, &fields.user_id).unwrap_or_else(|| name.clone());

    Ok(DeveloperRecord::new(
        rank,
        name,
        user_id,
        extract_text(item, &fields.repository),
        extract_text(item, &fields.description),
    ))
}
