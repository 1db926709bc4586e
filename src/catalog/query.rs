//! Query helpers over the in-memory catalog.

use crate::logic::record_matches;
use crate::state::Record;
use crate::util::match_rank;

use super::store;

/// Search the catalog for records matching `query`.
///
/// Returns matches ordered by title match quality (exact, prefix,
/// substring, then description/tag hits), with title as the tiebreak; this
/// is the identity order the `Relevance` ranking preserves. An empty or
/// whitespace-only query returns an empty list.
pub fn search_catalog(query: &str) -> Vec<Record> {
    let ql = query.trim().to_lowercase();
    if ql.is_empty() {
        return Vec::new();
    }
    let mut items: Vec<Record> = match store().read() {
        Ok(guard) => guard
            .records
            .iter()
            .filter(|r| record_matches(r, &ql))
            .cloned()
            .collect(),
        Err(_) => Vec::new(),
    };
    items.sort_by(|a, b| {
        let ra = match_rank(&a.title, &ql);
        let rb = match_rank(&b.title, &ql);
        if ra != rb {
            return ra.cmp(&rb);
        }
        a.title.to_lowercase().cmp(&b.title.to_lowercase())
    });
    items
}

/// Return a snapshot of every record in the catalog.
pub fn all_records() -> Vec<Record> {
    store().read().map(|g| g.records.clone()).unwrap_or_default()
}

/// Number of records currently held in the catalog.
pub fn record_count() -> usize {
    store().read().map(|g| g.records.len()).unwrap_or(0)
}
