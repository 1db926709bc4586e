//! In-memory lesson catalog: process-wide store, validation, persistence,
//! and query.

use std::collections::HashSet;
use std::sync::{OnceLock, RwLock};

use crate::state::Record;

/// Full collection of catalog records maintained in memory.
///
/// Serializable via Serde to allow saving and restoring across sessions.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// All known records in the process-wide catalog.
    pub records: Vec<Record>,
}

/// Process-wide holder for the catalog state.
static CATALOG: OnceLock<RwLock<Catalog>> = OnceLock::new();

/// Accessor for the shared store, initializing it empty on first use.
pub(crate) fn store() -> &'static RwLock<Catalog> {
    CATALOG.get_or_init(|| RwLock::new(Catalog::default()))
}

mod persist;
mod query;

pub use persist::{load_from_disk, save_to_disk, seed_if_missing};
pub use query::{all_records, record_count, search_catalog};

/// What: Replace the in-memory catalog, dropping malformed or duplicate
/// records.
///
/// Inputs:
/// - `records`: Candidate records from disk or a remote source
///
/// Output:
/// - `(accepted, rejected)` counts; the store holds exactly the accepted
///   records afterwards.
///
/// Details:
/// - Malformed records (see [`Record::validate`]) and duplicate ids are
///   rejected with a warning log, never silently accepted.
pub fn replace_all(records: Vec<Record>) -> (usize, usize) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut accepted: Vec<Record> = Vec::with_capacity(records.len());
    let mut rejected = 0usize;
    for rec in records {
        match rec.validate() {
            Ok(()) => {
                if seen.insert(rec.id.clone()) {
                    accepted.push(rec);
                } else {
                    rejected += 1;
                    tracing::warn!(id = %rec.id, "duplicate record id dropped");
                }
            }
            Err(reason) => {
                rejected += 1;
                tracing::warn!(%reason, "invalid record dropped");
            }
        }
    }
    let n = accepted.len();
    if let Ok(mut guard) = store().write() {
        guard.records = accepted;
    }
    (n, rejected)
}
