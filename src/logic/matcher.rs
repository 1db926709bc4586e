//! Free-text matching over catalog records.

use crate::state::Record;

/// What: Decide whether `record` satisfies the free-text `query`.
///
/// Inputs:
/// - `record`: Candidate record
/// - `query`: Raw query text as typed
///
/// Output:
/// - `true` when the lowercased query is a substring of the title, the
///   description, or any tag; `false` otherwise.
///
/// Details:
/// - An empty or whitespace-only query matches nothing: the search screen
///   deliberately shows no results until something is typed.
/// - Pure boolean predicate; no fuzzy matching or scoring.
pub fn record_matches(record: &Record, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return false;
    }
    record.title.to_lowercase().contains(&q)
        || record.description.to_lowercase().contains(&q)
        || record.tags.iter().any(|t| t.to_lowercase().contains(&q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Difficulty, Kind};

    fn rec(title: &str, description: &str, tags: &[&str]) -> Record {
        Record {
            id: title.to_lowercase().replace(' ', "-"),
            kind: Kind::Lesson,
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            rating: 4.0,
            popularity: 100,
            difficulty: Difficulty::Intermediate,
            duration_minutes: Some(30),
            new_arrival: false,
        }
    }

    #[test]
    /// What: Empty and whitespace-only queries match nothing
    ///
    /// - Input: A record with populated fields; queries "" and "   "
    /// - Output: No match in either case
    fn matcher_empty_query_matches_nothing() {
        let r = rec("Business English Course", "Formal emails", &["business"]);
        assert!(!record_matches(&r, ""));
        assert!(!record_matches(&r, "   "));
    }

    #[test]
    /// What: Case-insensitive substring matching across title, description, and tags
    ///
    /// - Input: Upper/lower variants of a query hitting each field
    /// - Output: All variants match; a miss in every field does not
    fn matcher_fields_and_case_insensitivity() {
        let r = rec(
            "Business English Course",
            "Write formal emails with confidence",
            &["business", "writing"],
        );
        assert!(record_matches(&r, "english"));
        assert!(record_matches(&r, "ENGLISH"));
        assert!(record_matches(&r, "EnGLiSh"));
        assert!(record_matches(&r, "formal emails"));
        assert!(record_matches(&r, "writ"));
        assert!(!record_matches(&r, "french"));
    }
}
