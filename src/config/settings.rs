//! User settings loaded from a plain `key = value` file.

use std::fs;

use crate::state::SortKey;

/// Commented skeleton written on first run so users can discover the keys.
const SKELETON_SETTINGS_CONTENT: &str = "\
# Linguasea settings
#
# Lines are `key = value`; '#' starts a comment.

# Default ranking for results: relevance | rating | popularity | newest | duration
# sort_key = relevance

# Milliseconds to wait after the last keystroke before searching
# debounce_ms = 250

# Pane widths in percent (left recent pane, center results, right details)
# layout_left_pct = 20
# layout_center_pct = 55
# layout_right_pct = 25

# Remote catalog endpoint returning a JSON array of records for ?q=<query>.
# Leave unset to search the local catalog only.
# catalog_url = https://example.org/api/catalog
";

/// User-tunable settings with their startup defaults.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Default ranking strategy for results.
    pub sort_key: SortKey,
    /// Milliseconds the search worker waits after the last keystroke.
    pub debounce_ms: u64,
    /// Width percentage of the Recent pane.
    pub layout_left_pct: u16,
    /// Width percentage of the results column.
    pub layout_center_pct: u16,
    /// Width percentage of the details pane.
    pub layout_right_pct: u16,
    /// Optional remote catalog endpoint.
    pub catalog_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Relevance,
            debounce_ms: 250,
            layout_left_pct: 20,
            layout_center_pct: 55,
            layout_right_pct: 25,
            catalog_url: None,
        }
    }
}

/// Drop an inline `#` comment and surrounding whitespace from a value.
fn strip_inline_comment(val: &str) -> &str {
    match val.find('#') {
        Some(i) => val[..i].trim(),
        None => val.trim(),
    }
}

/// What: Parse settings file content, falling back to defaults per key.
///
/// Inputs:
/// - `content`: Raw file text
///
/// Output:
/// - A [`Settings`] with every recognized key applied; unknown keys and
///   malformed values are ignored.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-`, and spaces normalize to `_`.
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "sort_key" | "results_sort" => {
                if let Some(sk) = SortKey::from_config_key(val) {
                    out.sort_key = sk;
                }
            }
            "debounce_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.debounce_ms = v;
                }
            }
            "layout_left_pct" => {
                if let Ok(v) = val.parse::<u16>() {
                    out.layout_left_pct = v;
                }
            }
            "layout_center_pct" => {
                if let Ok(v) = val.parse::<u16>() {
                    out.layout_center_pct = v;
                }
            }
            "layout_right_pct" => {
                if let Ok(v) = val.parse::<u16>() {
                    out.layout_right_pct = v;
                }
            }
            "catalog_url" => {
                if !val.is_empty() {
                    out.catalog_url = Some(val.to_string());
                }
            }
            _ => {}
        }
    }
    out
}

/// Load user settings from the settings file, writing a commented skeleton
/// when none exists. Falls back to `Settings::default()` when unreadable.
pub fn settings() -> Settings {
    let path = super::paths::settings_path();
    if !path.is_file() {
        let _ = fs::write(&path, SKELETON_SETTINGS_CONTENT);
    }
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(_) => Settings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys apply; comments, aliases, and junk are tolerated
    ///
    /// - Input: Mixed content with comments, an alias key, and a bad value
    /// - Output: Parsed settings reflect valid keys only
    fn settings_parse_recognized_keys() {
        let content = "\
# comment
results_sort = rating   # inline comment
debounce_ms = 100
layout_left_pct = 25
catalog_url = https://example.org/api
nonsense = true
layout_right_pct = not-a-number
";
        let s = parse_settings(content);
        assert_eq!(s.sort_key, SortKey::Rating);
        assert_eq!(s.debounce_ms, 100);
        assert_eq!(s.layout_left_pct, 25);
        assert_eq!(s.catalog_url.as_deref(), Some("https://example.org/api"));
        // malformed value keeps the default
        assert_eq!(s.layout_right_pct, Settings::default().layout_right_pct);
    }

    #[test]
    /// What: Empty content yields pure defaults
    ///
    /// - Input: Empty string
    /// - Output: `Settings::default()` equivalents
    fn settings_empty_is_default() {
        let s = parse_settings("");
        assert_eq!(s.sort_key, SortKey::Relevance);
        assert_eq!(s.debounce_ms, 250);
        assert!(s.catalog_url.is_none());
    }

    #[test]
    /// What: Key normalization accepts dots, dashes, and case variance
    ///
    /// - Input: `Debounce-MS` and `sort.key` spellings
    /// - Output: Both apply
    fn settings_key_normalization() {
        let s = parse_settings("Debounce-MS = 42\nsort.key = newest\n");
        assert_eq!(s.debounce_ms, 42);
        assert_eq!(s.sort_key, SortKey::Newest);
    }
}
