//! Ranking strategies applied after facet filtering.

use std::cmp::Ordering;

use crate::state::{Record, SortKey};

/// What: Reorder `records` in place according to `key`.
///
/// Inputs:
/// - `records`: Facet-filtered results
/// - `key`: Selected ranking strategy
///
/// Output:
/// - Sorted slice; ties preserve their prior relative order (stable sort).
///
/// Details:
/// - `Relevance` is the identity order: the fetch already emits records in
///   match-quality order, so nothing is reordered here.
/// - `Duration` treats an absent duration as zero minutes.
/// - `Newest` uses only the new-arrival flag; no secondary key.
pub fn sort_records(records: &mut [Record], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Rating => {
            records.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        }
        SortKey::Popularity => {
            records.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        }
        SortKey::Newest => {
            records.sort_by(|a, b| b.new_arrival.cmp(&a.new_arrival));
        }
        SortKey::Duration => {
            records.sort_by(|a, b| {
                a.duration_minutes
                    .unwrap_or(0)
                    .cmp(&b.duration_minutes.unwrap_or(0))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Difficulty, Kind};

    fn rec(id: &str, rating: f64, popularity: u64, minutes: Option<u32>, fresh: bool) -> Record {
        Record {
            id: id.to_string(),
            kind: if minutes.is_some() {
                Kind::Lesson
            } else {
                Kind::Category
            },
            title: format!("{id} title"),
            description: String::new(),
            tags: Vec::new(),
            rating,
            popularity,
            difficulty: Difficulty::Beginner,
            duration_minutes: minutes,
            new_arrival: fresh,
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    /// What: Relevance leaves the fetched order untouched
    ///
    /// - Input: Records in arbitrary order
    /// - Output: Identical order after sorting
    fn rank_relevance_is_identity() {
        let mut recs = vec![
            rec("z", 1.0, 0, None, false),
            rec("a", 5.0, 9, Some(5), true),
        ];
        sort_records(&mut recs, SortKey::Relevance);
        assert_eq!(ids(&recs), vec!["z", "a"]);
    }

    #[test]
    /// What: Rating sorts non-increasing and keeps ties stable
    ///
    /// - Input: Records with duplicate ratings
    /// - Output: Non-increasing ratings; tied records keep input order
    fn rank_rating_descending_stable() {
        let mut recs = vec![
            rec("mid1", 4.0, 0, None, false),
            rec("top", 4.9, 0, None, false),
            rec("mid2", 4.0, 0, None, false),
        ];
        sort_records(&mut recs, SortKey::Rating);
        assert_eq!(ids(&recs), vec!["top", "mid1", "mid2"]);
        for pair in recs.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    /// What: Popularity sorts by enrolled count, descending
    ///
    /// - Input: Three records with distinct popularity
    /// - Output: Highest first
    fn rank_popularity_descending() {
        let mut recs = vec![
            rec("small", 4.0, 12, None, false),
            rec("big", 4.0, 90_000, None, false),
            rec("none", 4.0, 0, None, false),
        ];
        sort_records(&mut recs, SortKey::Popularity);
        assert_eq!(ids(&recs), vec!["big", "small", "none"]);
    }

    #[test]
    /// What: Newest puts flagged arrivals first with no secondary key
    ///
    /// - Input: Interleaved new and old records
    /// - Output: All new records before all old, each group in input order
    fn rank_newest_flag_partition() {
        let mut recs = vec![
            rec("old1", 4.0, 0, None, false),
            rec("new1", 3.0, 0, None, true),
            rec("old2", 5.0, 0, None, false),
            rec("new2", 2.0, 0, None, true),
        ];
        sort_records(&mut recs, SortKey::Newest);
        assert_eq!(ids(&recs), vec!["new1", "new2", "old1", "old2"]);
    }

    #[test]
    /// What: Duration sorts ascending with absent treated as zero
    ///
    /// - Input: Lessons with durations and a category without one
    /// - Output: Non-decreasing effective durations; category first
    fn rank_duration_ascending_absent_zero() {
        let mut recs = vec![
            rec("long", 4.0, 0, Some(90), false),
            rec("cat", 4.0, 0, None, false),
            rec("short", 4.0, 0, Some(10), false),
        ];
        sort_records(&mut recs, SortKey::Duration);
        assert_eq!(ids(&recs), vec!["cat", "short", "long"]);
        for pair in recs.windows(2) {
            assert!(
                pair[0].duration_minutes.unwrap_or(0) <= pair[1].duration_minutes.unwrap_or(0)
            );
        }
    }
}
