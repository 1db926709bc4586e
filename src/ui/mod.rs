//! Rendering layer: three-region layout with a search input on top, the
//! recent/results/details row in the middle, and a status footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, SearchPhase};
use crate::theme::theme;

mod details;
mod recent;
mod results;
mod search;

pub use results::render_results;
pub use search::render_search;

/// Render one frame of the full interface.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    search::render_search(f, app, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(app.layout_left_pct),
            Constraint::Percentage(app.layout_center_pct),
            Constraint::Percentage(app.layout_right_pct),
        ])
        .split(rows[1]);

    recent::render_recent(f, app, cols[0]);
    results::render_results(f, app, cols[1]);
    details::render_details(f, app, cols[2]);

    render_footer(f, app, rows[2]);
}

/// Render the one-line status footer: phase, counts, offline marker, toast.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let phase_text = match app.phase {
        SearchPhase::Idle => "Idle".to_string(),
        SearchPhase::Loading => "Searching…".to_string(),
        SearchPhase::Empty => "No matches".to_string(),
        SearchPhase::Results => format!("{} result(s)", app.results.len()),
    };
    let mut segs: Vec<Span> = vec![
        Span::styled(format!(" {phase_text} "), Style::default().fg(th.subtext)),
        Span::styled(
            format!("| sort: {} ", app.sort_key.label()),
            Style::default().fg(th.overlay),
        ),
    ];
    if app.offline {
        segs.push(Span::styled("| offline ", Style::default().fg(th.yellow)));
    }
    if let Some(msg) = &app.toast_message {
        segs.push(Span::styled(
            format!("| {msg}"),
            Style::default().fg(th.red),
        ));
    }
    let footer = Paragraph::new(Line::from(segs)).style(Style::default().bg(th.crust));
    f.render_widget(footer, area);
}
