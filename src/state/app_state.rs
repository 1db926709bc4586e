//! Central `AppState` container shared by the event, worker, and UI layers.

use ratatui::widgets::ListState;
use std::{path::PathBuf, time::Instant};

use crate::state::types::{Facets, Focus, Record, SearchPhase, SortKey};

/// Global application state shared by the event, networking, and UI layers.
///
/// This structure is mutated frequently in response to input and background
/// updates. Recent searches are persisted to disk to preserve user context
/// across runs.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Current, facet-filtered and ranked results.
    pub results: Vec<Record>,
    /// Unfiltered results as last received from the search worker.
    pub all_results: Vec<Record>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Lifecycle phase of the search screen.
    pub phase: SearchPhase,

    /// Active facet selections.
    pub facets: Facets,
    /// Active ranking strategy.
    pub sort_key: SortKey,
    /// Whether the sort dropdown is currently visible.
    pub sort_menu_open: bool,
    /// Highlighted row inside the sort dropdown.
    pub sort_menu_selected: usize,

    // Search coordination
    /// Identifier of the latest query whose results may be displayed.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,

    // Recent searches
    /// Previously executed queries, most recent first.
    pub recent: Vec<String>,
    /// List selection state for the Recent pane.
    pub history_state: ListState,
    /// Path where recent searches are persisted as JSON.
    pub recent_path: PathBuf,
    /// Dirty flag indicating `recent` needs to be saved.
    pub recent_dirty: bool,
    /// Timestamp of the last input edit, used to settle queries before saving.
    pub last_input_change: Instant,
    /// Last query persisted to `recent`, to avoid redundant inserts.
    pub last_saved_value: Option<String>,

    /// Path to the persisted catalog JSON.
    pub catalog_path: PathBuf,
    /// Whether the remote source is disabled for this run.
    pub offline: bool,

    // Transient toast message (footer)
    /// Optional short-lived info message rendered in the footer.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,

    // User settings loaded at startup
    /// Width percentage of the Recent pane.
    pub layout_left_pct: u16,
    /// Width percentage of the results column.
    pub layout_center_pct: u16,
    /// Width percentage of the details pane.
    pub layout_right_pct: u16,
}

impl Default for AppState {
    /// Construct a default, empty [`AppState`], initializing paths, selection
    /// states, and timers with sensible defaults.
    fn default() -> Self {
        Self {
            input: String::new(),
            results: Vec::new(),
            all_results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            focus: Focus::Search,
            phase: SearchPhase::Idle,

            facets: Facets::default(),
            sort_key: SortKey::Relevance,
            sort_menu_open: false,
            sort_menu_selected: 0,

            latest_query_id: 0,
            next_query_id: 1,

            recent: Vec::new(),
            history_state: ListState::default(),
            // Persisted recent searches (lists dir under config)
            recent_path: crate::config::lists_dir().join("recent_searches.json"),
            recent_dirty: false,
            last_input_change: Instant::now(),
            last_saved_value: None,

            // Persisted catalog (lists dir under config)
            catalog_path: crate::config::lists_dir().join("catalog.json"),
            offline: false,

            toast_message: None,
            toast_expires_at: None,

            layout_left_pct: 20,
            layout_center_pct: 55,
            layout_right_pct: 25,
        }
    }
}
