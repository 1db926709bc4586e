//! Event handling layer for Linguasea's TUI.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`] and
//! coordinates background work via the query channel:
//!
//! - Search (center): query editing and results navigation
//! - Recent (left): previously used queries, re-run with Enter
//! - Facet toggles and the sort dropdown on function/control keys
//!
//! All functions here are synchronous; long-running work happens in the
//! background search worker.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{apply_facets_and_sort_preserve_selection, move_selection, send_query};
use crate::state::{AppState, Difficulty, Focus, Kind, QueryInput, SORT_KEYS};

/// Toggle `value` in `set`: insert when absent, remove when present.
fn toggle<T: Ord + Copy>(set: &mut std::collections::BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Step the minimum-rating facet through its preset stops.
fn cycle_min_rating(current: f64) -> f64 {
    if current <= 0.0 {
        3.0
    } else if current < 4.0 {
        4.0
    } else if current < 4.5 {
        4.5
    } else if current < 4.8 {
        4.8
    } else {
        0.0
    }
}

/// Step the duration-ceiling facet through its preset stops (minutes).
fn cycle_max_duration(current: u32) -> u32 {
    match current {
        0 => 15,
        1..=15 => 30,
        16..=30 => 60,
        _ => 0,
    }
}

/// Handle keys while the sort dropdown is open. Returns `true` when the
/// event was consumed.
fn handle_sort_menu_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => {
            app.sort_menu_selected = app.sort_menu_selected.saturating_sub(1);
            true
        }
        KeyCode::Down => {
            app.sort_menu_selected = (app.sort_menu_selected + 1).min(SORT_KEYS.len() - 1);
            true
        }
        KeyCode::Enter => {
            app.sort_key = SORT_KEYS[app.sort_menu_selected.min(SORT_KEYS.len() - 1)];
            app.sort_menu_open = false;
            apply_facets_and_sort_preserve_selection(app);
            true
        }
        KeyCode::Esc => {
            app.sort_menu_open = false;
            true
        }
        _ => false,
    }
}

/// Handle the facet toggle keys. Returns `true` when the event was
/// consumed and the pipeline was rerun.
fn handle_facet_key(app: &mut AppState, key: KeyEvent) -> bool {
    let consumed = match key.code {
        KeyCode::F(1) => {
            toggle(&mut app.facets.difficulties, Difficulty::Beginner);
            true
        }
        KeyCode::F(2) => {
            toggle(&mut app.facets.difficulties, Difficulty::Intermediate);
            true
        }
        KeyCode::F(3) => {
            toggle(&mut app.facets.difficulties, Difficulty::Advanced);
            true
        }
        KeyCode::F(4) => {
            toggle(&mut app.facets.kinds, Kind::Category);
            true
        }
        KeyCode::F(5) => {
            toggle(&mut app.facets.kinds, Kind::Lesson);
            true
        }
        KeyCode::F(6) => {
            app.facets.min_rating = cycle_min_rating(app.facets.min_rating);
            true
        }
        KeyCode::F(7) => {
            app.facets.max_duration_minutes = cycle_max_duration(app.facets.max_duration_minutes);
            true
        }
        _ => false,
    };
    if consumed {
        apply_facets_and_sort_preserve_selection(app);
    }
    consumed
}

/// Handle keys while the Search pane is focused.
fn handle_search_key(
    app: &mut AppState,
    key: KeyEvent,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push(c);
            app.last_input_change = std::time::Instant::now();
            send_query(app, query_tx);
        }
        KeyCode::Backspace => {
            app.input.pop();
            app.last_input_change = std::time::Instant::now();
            send_query(app, query_tx);
        }
        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::PageUp => move_selection(app, -10),
        KeyCode::PageDown => move_selection(app, 10),
        _ => {}
    }
}

/// Handle keys while the Recent pane is focused.
fn handle_recent_key(
    app: &mut AppState,
    key: KeyEvent,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    match key.code {
        KeyCode::Up => {
            let cur = app.history_state.selected().unwrap_or(0);
            app.history_state.select(Some(cur.saturating_sub(1)));
        }
        KeyCode::Down => {
            if !app.recent.is_empty() {
                let cur = app.history_state.selected().unwrap_or(0);
                app.history_state
                    .select(Some((cur + 1).min(app.recent.len() - 1)));
            }
        }
        KeyCode::Enter => {
            if let Some(i) = app.history_state.selected()
                && let Some(q) = app.recent.get(i).cloned()
            {
                app.input = q;
                app.focus = Focus::Search;
                app.last_input_change = std::time::Instant::now();
                send_query(app, query_tx);
            }
        }
        _ => {}
    }
}

/// What: Dispatch a single input event, mutating [`AppState`] and
/// coordinating background work via the query channel.
///
/// Inputs:
/// - `ev`: Raw `crossterm` event
/// - `app`: Mutable application state
/// - `query_tx`: Sends search queries when the input changes
///
/// Output:
/// - `true` to signal the application should exit; `false` otherwise.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
/// - The sort dropdown captures navigation keys while open.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let CEvent::Key(key) = ev else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // Quit on Ctrl+C regardless of focus or overlays.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.sort_menu_open && handle_sort_menu_key(app, key) {
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Search => {
                    if app.history_state.selected().is_none() && !app.recent.is_empty() {
                        app.history_state.select(Some(0));
                    }
                    Focus::Recent
                }
                Focus::Recent => Focus::Search,
            };
            return false;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.sort_menu_open = true;
            app.sort_menu_selected = SORT_KEYS
                .iter()
                .position(|k| *k == app.sort_key)
                .unwrap_or(0);
            return false;
        }
        _ => {}
    }

    if handle_facet_key(app, key) {
        return false;
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key, query_tx),
        Focus::Recent => handle_recent_key(app, key, query_tx),
    }
    false
}
