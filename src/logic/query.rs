//! Query dispatch toward the background search worker.

use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput, SearchPhase};

/// What: Send the current query text over the search channel with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_query_id`,
///   `latest_query_id`, and the screen phase
/// - `query_tx`: Channel to send the [`QueryInput`]
///
/// Output:
/// - Sends a `QueryInput` with an incremented id and the current text.
///
/// Details:
/// - The id lets the event loop discard answers to superseded queries, so
///   a stale in-flight fetch is effectively cancelled.
/// - A blank input moves the screen straight to `Idle`; anything else to
///   `Loading` until its answer arrives.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.phase = if app.input.trim().is_empty() {
        SearchPhase::Idle
    } else {
        SearchPhase::Loading
    };
    let _ = query_tx.send(QueryInput {
        id,
        text: app.input.clone(),
    });
}
