//! Linguasea application runtime (terminal lifecycle, async workers, and
//! event loop).
//!
//! This module encapsulates the entire TUI runtime so that the binary
//! entrypoint stays minimal.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc, time::sleep};

use crate::logic::{apply_search_results, send_query};
use crate::state::{AppState, QueryInput, SearchResults};
use crate::ui::ui;

/// How many recent queries are kept.
const RECENT_CAP: usize = 20;
/// How long a toast stays visible.
const TOAST_SECS: u64 = 8;

/// Enter raw mode and the alternate screen.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Leave the alternate screen and restore the cooked terminal.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Show a transient footer message.
fn set_toast(app: &mut AppState, message: String) {
    app.toast_message = Some(message);
    app.toast_expires_at = Some(Instant::now() + Duration::from_secs(TOAST_SECS));
}

/// What: Record the current query into the recent list once it settles.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Inserts the trimmed query at the front of `recent` (deduplicated,
///   capped) and marks the list dirty.
///
/// Details:
/// - A query counts as settled three seconds after the last edit, so
///   half-typed prefixes never pollute the history.
pub fn maybe_save_recent(app: &mut AppState) {
    let now = Instant::now();
    if app.input.trim().is_empty() {
        return;
    }
    if now.duration_since(app.last_input_change) < Duration::from_secs(3) {
        return;
    }
    if app.last_saved_value.as_deref() == Some(app.input.trim()) {
        return;
    }

    let value = app.input.trim().to_string();
    if let Some(pos) = app
        .recent
        .iter()
        .position(|s| s.eq_ignore_ascii_case(&value))
    {
        app.recent.remove(pos);
    }
    app.recent.insert(0, value.clone());
    if app.recent.len() > RECENT_CAP {
        app.recent.truncate(RECENT_CAP);
    }
    app.last_saved_value = Some(value);
    app.recent_dirty = true;
}

/// Persist the recent list when dirty.
pub fn maybe_flush_recent(app: &mut AppState) {
    if !app.recent_dirty {
        return;
    }
    if let Ok(s) = serde_json::to_string(&app.recent) {
        let _ = fs::write(&app.recent_path, s);
        app.recent_dirty = false;
    }
}

/// What: Spawn the background search worker.
///
/// Inputs:
/// - `query_rx`: Stream of [`QueryInput`]s from the UI
/// - `result_tx`: Channel carrying answers back to the event loop
/// - `err_tx`: Channel for transient fetch error messages
/// - `debounce_ms`: Quiet period after the last keystroke before fetching
/// - `catalog_url`: Remote endpoint; `None` searches the local catalog
///
/// Output:
/// - A task that answers the latest query after the debounce window.
///
/// Details:
/// - Rapid keystrokes collapse to the newest query; every fetch answer
///   carries the query id so the event loop can discard superseded ones.
/// - Blank queries answer immediately with an empty set: the screen shows
///   nothing until something is typed.
/// - Fetches are rate-limited to avoid hammering a remote source.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    result_tx: mpsc::UnboundedSender<SearchResults>,
    err_tx: mpsc::UnboundedSender<String>,
    debounce_ms: u64,
    catalog_url: Option<String>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MIN_INTERVAL_MS: u64 = 300;
        let mut last_sent = Instant::now();
        let mut first_fetch = true;
        loop {
            let mut latest = match query_rx.recv().await {
                Some(q) => q,
                None => break,
            };
            loop {
                select! {
                    Some(new_q) = query_rx.recv() => { latest = new_q; }
                    () = sleep(Duration::from_millis(debounce_ms)) => { break; }
                }
            }
            if latest.text.trim().is_empty() {
                let _ = result_tx.send(SearchResults {
                    id: latest.id,
                    items: Vec::new(),
                });
                continue;
            }
            if !first_fetch {
                let elapsed = last_sent.elapsed();
                if elapsed < Duration::from_millis(MIN_INTERVAL_MS) {
                    sleep(Duration::from_millis(MIN_INTERVAL_MS) - elapsed).await;
                }
            }
            first_fetch = false;
            last_sent = Instant::now();

            let tx = result_tx.clone();
            let err_tx = err_tx.clone();
            let url = catalog_url.clone();
            tokio::spawn(async move {
                let (items, errors) =
                    crate::sources::fetch_records(latest.text.clone(), url).await;
                tracing::debug!(id = latest.id, count = items.len(), "search answered");
                for e in errors {
                    let _ = err_tx.send(e);
                }
                let _ = tx.send(SearchResults {
                    id: latest.id,
                    items,
                });
            });
        }
    })
}

/// Start the Linguasea TUI runtime and run the main event loop.
///
/// - Initializes the terminal (raw mode, alternate screen)
/// - Loads settings, the catalog (seeding a starter on first run), and the
///   persisted recent searches; spawns the search worker and periodic ticks
/// - Drives rendering via `ratatui` and delegates input handling to
///   `events`
/// - Persists recent searches periodically and on shutdown
///
/// Returns `Ok(())` on normal shutdown or an error if initialization fails.
pub async fn run(offline: bool, catalog_override: Option<PathBuf>) -> Result<()> {
    let prefs = crate::config::settings();

    let mut app = AppState {
        offline,
        ..Default::default()
    };
    app.sort_key = prefs.sort_key;
    app.layout_left_pct = prefs.layout_left_pct;
    app.layout_center_pct = prefs.layout_center_pct;
    app.layout_right_pct = prefs.layout_right_pct;
    if let Some(path) = catalog_override {
        app.catalog_path = path;
    }

    crate::catalog::seed_if_missing(&app.catalog_path);
    tracing::info!(
        records = crate::catalog::record_count(),
        path = %app.catalog_path.display(),
        "catalog ready"
    );

    if let Ok(s) = fs::read_to_string(&app.recent_path)
        && let Ok(list) = serde_json::from_str::<Vec<String>>(&s)
    {
        app.recent = list;
        if !app.recent.is_empty() {
            app.history_state.select(Some(0));
        }
    }

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (result_tx, mut results_rx) = mpsc::unbounded_channel::<SearchResults>();
    let (err_tx, mut err_rx) = mpsc::unbounded_channel::<String>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();

    let catalog_url = if offline { None } else { prefs.catalog_url.clone() };
    let _worker = spawn_search_worker(
        query_rx,
        result_tx,
        err_tx.clone(),
        prefs.debounce_ms,
        catalog_url,
    );

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                let _ = event_tx.send(ev);
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    send_query(&mut app, &query_tx);

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &query_tx) { break; }
            }
            Some(new_results) = results_rx.recv() => {
                apply_search_results(&mut app, new_results);
            }
            Some(msg) = err_rx.recv() => { set_toast(&mut app, msg); }
            Some(()) = tick_rx.recv() => {
                maybe_save_recent(&mut app);
                maybe_flush_recent(&mut app);
                if let Some(deadline) = app.toast_expires_at
                    && Instant::now() >= deadline
                {
                    app.toast_message = None;
                    app.toast_expires_at = None;
                }
            }
            else => {}
        }
    }

    maybe_flush_recent(&mut app);

    restore_terminal()?;
    Ok(())
}
