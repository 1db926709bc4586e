//! Host-level flow tests: catalog seeding, the debounced search worker,
//! stale-result discard, and recent-search persistence.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use linguasea::app::{maybe_flush_recent, maybe_save_recent, spawn_search_worker};
use linguasea::catalog;
use linguasea::logic::apply_search_results;
use linguasea::state::{AppState, QueryInput, SearchPhase, SearchResults};

const WAIT: Duration = Duration::from_secs(2);

/// Seed a temp catalog and drive the worker end to end. The catalog store
/// is process-wide, so everything touching it lives in this one test.
#[tokio::test(flavor = "multi_thread")]
async fn catalog_seed_and_worker_flow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");

    // First call writes the starter catalog, second load is a no-op refresh.
    catalog::seed_if_missing(&path);
    assert!(path.is_file());
    let seeded = catalog::record_count();
    assert!(seeded >= 10, "starter catalog should seed records");
    catalog::seed_if_missing(&path);
    assert_eq!(catalog::record_count(), seeded);

    // Local catalog search: empty query answers nothing, parity with the UI.
    assert!(catalog::search_catalog("").is_empty());
    let grammar = catalog::search_catalog("grammar");
    assert!(!grammar.is_empty());
    // title matches outrank description/tag-only matches
    assert!(grammar[0].title.to_lowercase().contains("grammar"));

    let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
    let (result_tx, mut results_rx) = mpsc::unbounded_channel::<SearchResults>();
    let (err_tx, mut err_rx) = mpsc::unbounded_channel::<String>();
    let _worker = spawn_search_worker(query_rx, result_tx, err_tx, 10, None);

    // A burst of keystrokes collapses to the newest query.
    query_tx
        .send(QueryInput {
            id: 1,
            text: "eng".into(),
        })
        .expect("send");
    query_tx
        .send(QueryInput {
            id: 2,
            text: "english".into(),
        })
        .expect("send");
    let answer = timeout(WAIT, results_rx.recv())
        .await
        .expect("worker answers")
        .expect("channel open");
    assert_eq!(answer.id, 2);
    assert!(
        answer
            .items
            .iter()
            .any(|r| r.title.contains("Business English"))
    );

    // Blank queries answer immediately with an empty set.
    query_tx
        .send(QueryInput {
            id: 3,
            text: "   ".into(),
        })
        .expect("send");
    let blank = timeout(WAIT, results_rx.recv())
        .await
        .expect("worker answers")
        .expect("channel open");
    assert_eq!(blank.id, 3);
    assert!(blank.items.is_empty());

    // No errors surfaced along the way.
    assert!(err_rx.try_recv().is_err());

    // Stale answers are dropped by the event-loop side.
    let mut app = AppState::default();
    app.input = "english".into();
    app.latest_query_id = 2;
    app.phase = SearchPhase::Loading;
    assert!(!apply_search_results(
        &mut app,
        SearchResults {
            id: 1,
            items: Vec::new()
        }
    ));
    assert_eq!(app.phase, SearchPhase::Loading);
    assert!(apply_search_results(&mut app, answer));
    assert_eq!(app.phase, SearchPhase::Results);
    assert!(!app.results.is_empty());
}

#[test]
fn recent_searches_persist_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("recent_searches.json");

    let mut app = AppState::default();
    app.recent_path = path.clone();
    app.input = "business english".into();
    app.last_input_change = std::time::Instant::now() - Duration::from_secs(4);
    maybe_save_recent(&mut app);
    assert!(app.recent_dirty);
    maybe_flush_recent(&mut app);
    assert!(!app.recent_dirty);

    let content = std::fs::read_to_string(&path).expect("file written");
    let restored: Vec<String> = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(restored, vec!["business english".to_string()]);
}
