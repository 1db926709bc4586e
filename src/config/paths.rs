//! Filesystem locations for configuration, persisted lists, and logs.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Application configuration directory, created on first use.
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("linguasea");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Directory holding persisted lists (recent searches, catalog).
pub fn lists_dir() -> PathBuf {
    let dir = config_dir().join("lists");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Directory holding log files.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Path of the settings file.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}
