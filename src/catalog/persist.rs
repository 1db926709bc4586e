//! Catalog persistence: JSON load/save plus first-run seeding.

use std::fs;
use std::path::Path;

use super::{Catalog, replace_all, store};

/// Built-in starter catalog written on first run.
const STARTER_CATALOG: &str = include_str!("starter.json");

/// What: Load the catalog from `path` if a valid JSON file exists.
///
/// Inputs:
/// - `path`: File path to read JSON from
///
/// Output:
/// - Replaces the in-memory catalog on success; leaves it unchanged on
///   read or parse failure.
///
/// Details:
/// - IO and deserialization failures are logged but not propagated to keep
///   startup resilient.
/// - Records are validated on the way in; rejects are counted and logged.
pub fn load_from_disk(path: &Path) {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog not readable");
            return;
        }
    };
    match serde_json::from_str::<Catalog>(&content) {
        Ok(parsed) => {
            let (accepted, rejected) = replace_all(parsed.records);
            tracing::info!(path = %path.display(), accepted, rejected, "catalog loaded");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog JSON invalid; keeping previous");
        }
    }
}

/// What: Persist the current catalog to `path` as JSON.
///
/// Inputs:
/// - `path`: File path to write JSON to
///
/// Output:
/// - Writes JSON to disk; errors are logged but not propagated to avoid
///   interrupting the UI.
pub fn save_to_disk(path: &Path) {
    let Ok(guard) = store().read() else {
        return;
    };
    let Ok(s) = serde_json::to_string_pretty(&*guard) else {
        return;
    };
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        tracing::warn!(path = %path.display(), error = %e, "failed to create catalog directory");
        return;
    }
    if let Err(e) = fs::write(path, s) {
        tracing::warn!(path = %path.display(), error = %e, "failed to write catalog");
    }
}

/// What: Ensure a catalog file exists at `path`, then load it.
///
/// Inputs:
/// - `path`: Catalog location (typically under the config lists dir)
///
/// Output:
/// - Seeds the built-in starter catalog when the file is missing, then
///   populates the in-memory store from disk.
pub fn seed_if_missing(path: &Path) {
    if !path.is_file() {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(path, STARTER_CATALOG) {
            tracing::warn!(path = %path.display(), error = %e, "failed to seed starter catalog");
        } else {
            tracing::info!(path = %path.display(), "starter catalog written");
        }
    }
    load_from_disk(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The embedded starter catalog parses and every record validates
    ///
    /// - Input: `STARTER_CATALOG` JSON
    /// - Output: Non-empty record set, all valid, ids unique
    fn starter_catalog_is_well_formed() {
        let parsed: Catalog =
            serde_json::from_str(STARTER_CATALOG).expect("starter catalog parses");
        assert!(parsed.records.len() >= 10);
        let mut ids = std::collections::HashSet::new();
        for rec in &parsed.records {
            rec.validate().expect("starter record valid");
            assert!(ids.insert(rec.id.clone()), "duplicate id {}", rec.id);
        }
    }
}
