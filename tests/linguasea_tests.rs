//! Library-level tests for the search core: matcher, facet filter, and
//! ranking properties, plus the worked catalog scenarios.

use std::collections::BTreeSet;

use linguasea::logic;
use linguasea::state::{Difficulty, Facets, Kind, Record, SortKey};

fn lesson(title: &str, difficulty: Difficulty, rating: f64, minutes: u32) -> Record {
    Record {
        id: title.to_lowercase().replace(' ', "-"),
        kind: Kind::Lesson,
        title: title.to_string(),
        description: format!("{title} description"),
        tags: Vec::new(),
        rating,
        popularity: 100,
        difficulty,
        duration_minutes: Some(minutes),
        new_arrival: false,
    }
}

fn category(title: &str, rating: f64) -> Record {
    Record {
        id: title.to_lowercase().replace(' ', "-"),
        kind: Kind::Category,
        title: title.to_string(),
        description: format!("{title} description"),
        tags: Vec::new(),
        rating,
        popularity: 100,
        difficulty: Difficulty::Beginner,
        duration_minutes: None,
        new_arrival: false,
    }
}

fn sample_set() -> Vec<Record> {
    vec![
        lesson("Business English Course", Difficulty::Intermediate, 4.7, 35),
        lesson("Grammar Basics", Difficulty::Beginner, 4.9, 25),
        lesson("Conditionals Deep Dive", Difficulty::Advanced, 4.6, 45),
        category("Conversation Practice", 4.5),
    ]
}

fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn matcher_empty_query_yields_empty_set() {
    let records = sample_set();
    let matched: Vec<&Record> = records
        .iter()
        .filter(|r| logic::record_matches(r, ""))
        .collect();
    assert!(matched.is_empty());
}

#[test]
fn matcher_title_substring_included_case_insensitively() {
    let records = sample_set();
    let lower: Vec<&str> = records
        .iter()
        .filter(|r| logic::record_matches(r, "grammar"))
        .map(|r| r.id.as_str())
        .collect();
    let upper: Vec<&str> = records
        .iter()
        .filter(|r| logic::record_matches(r, "GRAMMAR"))
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(lower, upper);
    assert!(lower.contains(&"grammar-basics"));
}

#[test]
fn facet_filter_idempotent_and_noop_identity() {
    let records = sample_set();

    let noop = Facets::default();
    assert_eq!(ids(&logic::apply_facets(&records, &noop)), ids(&records));

    let facets = Facets {
        difficulties: BTreeSet::from([Difficulty::Beginner, Difficulty::Intermediate]),
        min_rating: 4.6,
        ..Default::default()
    };
    let once = logic::apply_facets(&records, &facets);
    let twice = logic::apply_facets(&once, &facets);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn looser_facets_yield_a_superset() {
    let records = sample_set();
    let strict = Facets {
        min_rating: 4.7,
        max_duration_minutes: 30,
        ..Default::default()
    };
    let loose = Facets {
        min_rating: 4.5,
        ..Default::default()
    };
    let strict_ids: BTreeSet<String> = logic::apply_facets(&records, &strict)
        .into_iter()
        .map(|r| r.id)
        .collect();
    let loose_ids: BTreeSet<String> = logic::apply_facets(&records, &loose)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert!(strict_ids.is_subset(&loose_ids));
}

#[test]
fn rating_sort_is_non_increasing() {
    let mut records = sample_set();
    logic::sort_records(&mut records, SortKey::Rating);
    for pair in records.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn duration_sort_is_non_decreasing_with_absent_as_zero() {
    let mut records = sample_set();
    logic::sort_records(&mut records, SortKey::Duration);
    for pair in records.windows(2) {
        assert!(pair[0].duration_minutes.unwrap_or(0) <= pair[1].duration_minutes.unwrap_or(0));
    }
    // the category (no duration) sorts first
    assert_eq!(records[0].kind, Kind::Category);
}

#[test]
fn scenario_query_then_rating_sort() {
    let records = vec![
        lesson("Business English Course", Difficulty::Intermediate, 4.7, 35),
        lesson("Grammar Basics", Difficulty::Beginner, 4.9, 25),
    ];

    // query "english" matches only the first record
    let matched: Vec<&Record> = records
        .iter()
        .filter(|r| logic::record_matches(r, "english"))
        .collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Business English Course");

    // with both records in play, rating sort puts the 4.9 first
    let mut both = records.clone();
    logic::sort_records(&mut both, SortKey::Rating);
    assert_eq!(both[0].title, "Grammar Basics");
}

#[test]
fn scenario_rating_floor_without_query() {
    let records = vec![
        lesson("Business English Course", Difficulty::Intermediate, 4.7, 35),
        lesson("Grammar Basics", Difficulty::Beginner, 4.9, 25),
    ];
    let facets = Facets {
        min_rating: 4.8,
        ..Default::default()
    };
    let kept = logic::apply_facets(&records, &facets);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Grammar Basics");
}
