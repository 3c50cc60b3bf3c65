//! Maps a selected search result to the view that shows it.

use crate::errors::{AppError, AppResult};
use crate::models::search_record::{RecordId, RecordKind, SearchRecord};
use crate::models::view::ViewName;

pub fn resolve_kind(kind: RecordKind) -> ViewName {
    match kind {
        RecordKind::Employee => ViewName::Team,
        RecordKind::Project => ViewName::TimeTracking,
        RecordKind::Report => ViewName::Reports,
    }
}

pub fn resolve_target(record: &SearchRecord) -> ViewName {
    resolve_kind(record.kind())
}

/// Resolve a raw kind label from the presentation layer.
/// Unknown labels fail with `ContractViolation` instead of defaulting.
pub fn resolve_label(label: &str) -> AppResult<ViewName> {
    Ok(resolve_kind(RecordKind::from_label(label)?))
}

/// Look up the record behind a `(kind, id)` pair coming from the
/// presentation layer. Unknown kinds and missing records both abort.
pub fn find_record(index: &[SearchRecord], label: &str, id: &str) -> AppResult<SearchRecord> {
    let kind = RecordKind::from_label(label)?;
    let id = RecordId::parse(id);

    index
        .iter()
        .find(|r| r.kind() == kind && *r.id() == id)
        .cloned()
        .ok_or_else(|| {
            AppError::ContractViolation(format!("no {} record with id '{}'", kind, id))
        })
}
