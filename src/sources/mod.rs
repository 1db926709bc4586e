//! Record retrieval for the search worker: local catalog or remote source.

use crate::state::Record;

mod remote;

pub use remote::fetch_remote;

/// What: Fetch records matching `query` from the configured source.
///
/// Inputs:
/// - `query`: Raw query text (already debounced by the worker)
/// - `catalog_url`: Remote endpoint when configured; `None` for local-only
///
/// Output:
/// - `(items, errors)`: matches in relevance order plus any transient
///   error messages for the UI to surface.
///
/// Details:
/// - A remote failure falls back to the local catalog so the screen keeps
///   working offline; the error is still reported.
pub async fn fetch_records(query: String, catalog_url: Option<String>) -> (Vec<Record>, Vec<String>) {
    let Some(url) = catalog_url else {
        return (crate::catalog::search_catalog(&query), Vec::new());
    };
    match remote::fetch_remote(&url, &query).await {
        Ok(items) => (items, Vec::new()),
        Err(e) => {
            tracing::warn!(error = %e, "remote catalog fetch failed; using local catalog");
            (
                crate::catalog::search_catalog(&query),
                vec![format!("Remote catalog unavailable: {e}")],
            )
        }
    }
}
