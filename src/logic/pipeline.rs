//! Recompute the visible result set and keep selection and phase coherent.

use crate::state::{AppState, SearchPhase, SearchResults};

use super::facet::apply_facets;
use super::rank::sort_records;

/// What: Apply current facets to `app.all_results`, rank, and write into
/// `app.results`, preserving the selection when possible.
///
/// Inputs:
/// - `app`: Mutable application state containing `all_results`, facets,
///   sort key, and selection
///
/// Output:
/// - Updates `app.results`, reapplies ranking, restores selection by record
///   id when present, and refreshes the screen phase.
///
/// Details:
/// - Runs on every facet or sort change and after each worker answer; the
///   whole pipeline recomputes, there is no incremental path.
pub fn apply_facets_and_sort_preserve_selection(app: &mut AppState) {
    let prev_id = app.results.get(app.selected).map(|r| r.id.clone());

    let mut filtered = apply_facets(&app.all_results, &app.facets);
    sort_records(&mut filtered, app.sort_key);
    app.results = filtered;

    restore_selection(app, prev_id);
    refresh_phase(app);
}

/// What: Apply a worker answer if it corresponds to the latest query.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `new_results`: Answer from the search worker
///
/// Output:
/// - `true` when the answer was current and applied; `false` when it was
///   stale and dropped.
///
/// Details:
/// - Stale answers (id mismatch) are discarded without touching state:
///   this is how superseded in-flight fetches are abandoned.
/// - A current answer replaces `all_results`, reruns the pipeline, and
///   settles the phase to `Empty` or `Results` (or `Idle` for a cleared
///   input).
pub fn apply_search_results(app: &mut AppState, new_results: SearchResults) -> bool {
    if new_results.id != app.latest_query_id {
        tracing::debug!(
            stale = new_results.id,
            latest = app.latest_query_id,
            "dropping stale search results"
        );
        return false;
    }
    app.all_results = new_results.items;
    apply_facets_and_sort_preserve_selection(app);
    app.phase = if app.input.trim().is_empty() {
        SearchPhase::Idle
    } else if app.results.is_empty() {
        SearchPhase::Empty
    } else {
        SearchPhase::Results
    };
    true
}

/// What: Move the results selection by `delta`, clamping to the list.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: Signed number of rows to move
///
/// Output:
/// - Updates `app.selected` and the list widget state; no-op on an empty
///   list.
pub fn move_selection(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        return;
    }
    let len = app.results.len();
    let cur = app.selected.min(len - 1) as isize;
    let next = (cur + delta).clamp(0, len as isize - 1) as usize;
    app.selected = next;
    app.list_state.select(Some(next));
}

/// Restore selection by record id; clamp or clear when it vanished.
fn restore_selection(app: &mut AppState, prev_id: Option<String>) {
    if let Some(id) = prev_id
        && let Some(pos) = app.results.iter().position(|r| r.id == id)
    {
        app.selected = pos;
        app.list_state.select(Some(pos));
        return;
    }
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
        app.list_state.select(Some(app.selected));
    }
}

/// Derive the screen phase from input and results, leaving an in-flight
/// fetch in `Loading` until its answer arrives.
fn refresh_phase(app: &mut AppState) {
    if app.input.trim().is_empty() {
        app.phase = SearchPhase::Idle;
        return;
    }
    if app.phase == SearchPhase::Loading {
        return;
    }
    app.phase = if app.results.is_empty() {
        SearchPhase::Empty
    } else {
        SearchPhase::Results
    };
}
