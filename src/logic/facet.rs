//! Facet filtering over matched records.

use crate::state::{Facets, Kind, Record};

/// What: Decide whether `record` survives every active facet group.
///
/// Inputs:
/// - `record`: Candidate record (already text-matched by the caller)
/// - `facets`: Current facet selections
///
/// Output:
/// - `true` when the record satisfies all active groups; a group at its
///   no-op value (empty set or zero) never excludes anything.
///
/// Details:
/// - Groups compose by AND; members within a group compose by OR.
/// - The duration ceiling only applies to lessons; categories carry no
///   duration and pass through. A lesson without a stated duration counts
///   as zero minutes.
/// - Tag matching is exact: toggles are sourced from the catalog's own
///   tag vocabulary.
pub fn facets_allow(record: &Record, facets: &Facets) -> bool {
    debug_assert!(
        (0.0..=5.0).contains(&record.rating),
        "rating outside 0..=5 reached the filter"
    );
    if !facets.difficulties.is_empty() && !facets.difficulties.contains(&record.difficulty) {
        return false;
    }
    if !facets.kinds.is_empty() && !facets.kinds.contains(&record.kind) {
        return false;
    }
    if !facets.required_tags.is_empty()
        && !record.tags.iter().any(|t| facets.required_tags.contains(t))
    {
        return false;
    }
    if facets.min_rating > 0.0 && record.rating < facets.min_rating {
        return false;
    }
    if facets.max_duration_minutes > 0
        && record.kind == Kind::Lesson
        && record.duration_minutes.unwrap_or(0) > facets.max_duration_minutes
    {
        return false;
    }
    true
}

/// What: Narrow `records` to the subset surviving `facets`.
///
/// Inputs:
/// - `records`: Input set, typically the unfiltered worker results
/// - `facets`: Current facet selections
///
/// Output:
/// - A new vector preserving the input order of surviving records.
pub fn apply_facets(records: &[Record], facets: &Facets) -> Vec<Record> {
    records
        .iter()
        .filter(|r| facets_allow(r, facets))
        .cloned()
        .collect()
}
