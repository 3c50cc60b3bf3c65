//! Global search: case-insensitive substring filter over the static index.

use crate::models::search_record::SearchRecord;

/// Queries shorter than this (in characters) hide the result surface.
pub const MIN_QUERY_CHARS: usize = 2;

/// What the presentation layer shows under the search box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultSurface {
    /// Query too short, or explicitly dismissed.
    #[default]
    Hidden,
    /// Query active but nothing matched ("No results found").
    Empty,
    Results(Vec<SearchRecord>),
}

impl ResultSurface {
    pub fn is_hidden(&self) -> bool {
        matches!(self, ResultSurface::Hidden)
    }

    pub fn results(&self) -> &[SearchRecord] {
        match self {
            ResultSurface::Results(r) => r,
            _ => &[],
        }
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches(record: &SearchRecord, needle: &str) -> bool {
    record.name().to_lowercase().contains(needle)
        || record
            .department()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || record.kind().label().contains(needle)
}

/// Every record whose name, department or kind contains the query,
/// in index order. Short queries return nothing.
pub fn search(query: &str, index: &[SearchRecord]) -> Vec<SearchRecord> {
    let needle = normalize_query(query);
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    index
        .iter()
        .filter(|r| matches(r, &needle))
        .cloned()
        .collect()
}

pub fn surface_for(query: &str, index: &[SearchRecord]) -> ResultSurface {
    if normalize_query(query).chars().count() < MIN_QUERY_CHARS {
        return ResultSurface::Hidden;
    }

    let results = search(query, index);
    if results.is_empty() {
        ResultSurface::Empty
    } else {
        ResultSurface::Results(results)
    }
}
