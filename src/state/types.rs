//! Core value types used by Linguasea state.

use std::collections::BTreeSet;

/// Record subtype discriminant.
///
/// A catalog mixes aggregate, browsable groupings with the individual
/// lessons inside them; duration only applies to the latter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Kind {
    /// Aggregate grouping of lessons (no duration of its own).
    Category,
    /// Individual lesson with a concrete duration.
    Lesson,
}

impl Kind {
    /// Short display label for list rows and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Category => "Category",
            Kind::Lesson => "Lesson",
        }
    }
}

/// Stated difficulty of a record.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Difficulty {
    /// Entry level.
    Beginner,
    /// Some prior study expected.
    Intermediate,
    /// Fluent-learner material.
    Advanced,
}

impl Difficulty {
    /// Short display label for list rows and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One searchable catalog entry (a lesson or a category).
///
/// Records are constructed by the catalog loader or the remote source and
/// never mutated by the search pipeline; filtering and ranking only derive
/// new views over them.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Unique identifier within a catalog.
    pub id: String,
    /// Record subtype; determines whether `duration_minutes` is meaningful.
    pub kind: Kind,
    /// Display title, searched case-insensitively.
    pub title: String,
    /// One-line description, searched case-insensitively.
    pub description: String,
    /// Topic tags used for both display and facet matching.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Learner rating in `0.0..=5.0`.
    pub rating: f64,
    /// Enrolled-learner count.
    #[serde(default)]
    pub popularity: u64,
    /// Stated difficulty.
    pub difficulty: Difficulty,
    /// Lesson length in minutes; absent for categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Whether the record is flagged as a new arrival (drives `Newest`).
    #[serde(default)]
    pub new_arrival: bool,
}

impl Record {
    /// What: Check the structural invariants a well-formed record must hold.
    ///
    /// Inputs: none (operates on `self`)
    ///
    /// Output: `Ok(())` for a valid record, otherwise a human-readable reason.
    ///
    /// Details:
    /// - `id` and `title` must be non-empty, `rating` must lie in `0..=5`,
    ///   and categories must not carry a duration.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("record has an empty id".to_string());
        }
        if self.title.trim().is_empty() {
            return Err(format!("record {}: empty title", self.id));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!(
                "record {}: rating {} outside 0..=5",
                self.id, self.rating
            ));
        }
        if self.kind == Kind::Category && self.duration_minutes.is_some() {
            return Err(format!("record {}: categories carry no duration", self.id));
        }
        Ok(())
    }
}

/// Facet selections narrowing a matched result set.
///
/// Groups compose by intersection (AND); within a multi-select group any
/// member may match (OR). A group at its default value (empty set or `0`)
/// is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Facets {
    /// Keep records whose difficulty is in the set; empty keeps all.
    pub difficulties: BTreeSet<Difficulty>,
    /// Keep records whose kind is in the set; empty keeps all.
    pub kinds: BTreeSet<Kind>,
    /// Keep records sharing at least one tag with the set; empty keeps all.
    pub required_tags: BTreeSet<String>,
    /// Keep records rated at least this value; `0.0` keeps all.
    pub min_rating: f64,
    /// Keep lessons no longer than this many minutes; `0` keeps all.
    /// Categories are exempt (duration is inapplicable to them).
    pub max_duration_minutes: u32,
}

impl Facets {
    /// Whether every facet group sits at its no-op value.
    pub fn is_noop(&self) -> bool {
        self.difficulties.is_empty()
            && self.kinds.is_empty()
            && self.required_tags.is_empty()
            && self.min_rating <= 0.0
            && self.max_duration_minutes == 0
    }
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Matching records in fetch (relevance) order.
    pub items: Vec<Record>,
}

/// Lifecycle of the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query entered; nothing to show.
    Idle,
    /// A query is in flight and its answer has not arrived yet.
    Loading,
    /// The latest query answered with no surviving records.
    Empty,
    /// The latest query answered with at least one record.
    Results,
}

/// Ranking strategy for the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Identity order as fetched (the default; no reordering).
    Relevance,
    /// Descending by learner rating.
    Rating,
    /// Descending by enrolled-learner count.
    Popularity,
    /// New arrivals before the rest; no secondary key.
    Newest,
    /// Ascending by duration, absent treated as zero.
    Duration,
}

/// All ranking strategies in menu order.
pub const SORT_KEYS: [SortKey; 5] = [
    SortKey::Relevance,
    SortKey::Rating,
    SortKey::Popularity,
    SortKey::Newest,
    SortKey::Duration,
];

impl SortKey {
    /// Return the string key used in settings files for this sort key.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    pub fn as_config_key(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::Popularity => "popularity",
            SortKey::Newest => "newest",
            SortKey::Duration => "duration",
        }
    }

    /// Parse a sort key from its settings key or legacy aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortKey)` on recognized value; `None` otherwise.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "default" => Some(SortKey::Relevance),
            "rating" | "top_rated" => Some(SortKey::Rating),
            "popularity" | "most_popular" => Some(SortKey::Popularity),
            "newest" | "new" => Some(SortKey::Newest),
            "duration" | "shortest" => Some(SortKey::Duration),
            _ => None,
        }
    }

    /// Human label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Rating => "Top rated",
            SortKey::Popularity => "Most popular",
            SortKey::Newest => "Newest",
            SortKey::Duration => "Shortest first",
        }
    }
}

/// Which UI pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Center pane: query input and results.
    Search,
    /// Left pane: recent queries list.
    Recent,
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, Facets, Kind, Record, SortKey};

    fn lesson(id: &str) -> Record {
        Record {
            id: id.to_string(),
            kind: Kind::Lesson,
            title: format!("{id} title"),
            description: String::new(),
            tags: Vec::new(),
            rating: 4.0,
            popularity: 10,
            difficulty: Difficulty::Beginner,
            duration_minutes: Some(20),
            new_arrival: false,
        }
    }

    #[test]
    /// What: `SortKey` config key mapping roundtrip and alias handling
    ///
    /// - Input: Known keys and aliases; unknown key
    /// - Output: Correct mapping to enum variants; None for unknown
    fn state_sortkey_config_roundtrip_and_aliases() {
        for key in super::SORT_KEYS {
            assert_eq!(SortKey::from_config_key(key.as_config_key()), Some(key));
        }
        assert_eq!(SortKey::from_config_key("top_rated"), Some(SortKey::Rating));
        assert_eq!(
            SortKey::from_config_key("most_popular"),
            Some(SortKey::Popularity)
        );
        assert_eq!(
            SortKey::from_config_key("shortest"),
            Some(SortKey::Duration)
        );
        assert_eq!(
            SortKey::from_config_key("default"),
            Some(SortKey::Relevance)
        );
        assert_eq!(SortKey::from_config_key("unknown"), None);
    }

    #[test]
    /// What: Record validation accepts well-formed records and names the defect otherwise
    ///
    /// - Input: Valid lesson; out-of-range rating; category with a duration
    /// - Output: Ok for the lesson; Err with the offending id for the rest
    fn state_record_validation() {
        assert!(lesson("a").validate().is_ok());

        let mut bad_rating = lesson("b");
        bad_rating.rating = 5.5;
        let err = bad_rating.validate().expect_err("rating out of range");
        assert!(err.contains('b'));

        let mut cat = lesson("c");
        cat.kind = Kind::Category;
        assert!(cat.validate().is_err());
        cat.duration_minutes = None;
        assert!(cat.validate().is_ok());
    }

    #[test]
    /// What: Default facets are the no-op set
    ///
    /// - Input: `Facets::default()`; then one active group
    /// - Output: `is_noop` true, then false
    fn state_facets_noop_detection() {
        let mut f = Facets::default();
        assert!(f.is_noop());
        f.min_rating = 4.0;
        assert!(!f.is_noop());
    }
}
