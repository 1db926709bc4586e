//! Details pane for the selected record.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::{fmt_duration, fmt_popularity};

/// Render the details of the currently selected record, or a hint when
/// nothing is selected.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(" Details ", Style::default().fg(th.overlay)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface));

    let Some(rec) = app.results.get(app.selected) else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Select a result to see its details",
            Style::default().fg(th.subtext),
        )))
        .style(Style::default().bg(th.base))
        .block(block);
        f.render_widget(hint, area);
        return;
    };

    let label = |s: &str| Span::styled(format!("{s}: "), Style::default().fg(th.overlay));
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            rec.title.clone(),
            Style::default().fg(th.heading).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Kind"),
            Span::styled(rec.kind.label(), Style::default().fg(th.text)),
        ]),
        Line::from(vec![
            label("Difficulty"),
            Span::styled(rec.difficulty.label(), Style::default().fg(th.text)),
        ]),
        Line::from(vec![
            label("Rating"),
            Span::styled(format!("{:.1} / 5", rec.rating), Style::default().fg(th.yellow)),
        ]),
        Line::from(vec![
            label("Learners"),
            Span::styled(fmt_popularity(rec.popularity), Style::default().fg(th.text)),
        ]),
    ];
    if let Some(mins) = rec.duration_minutes {
        lines.push(Line::from(vec![
            label("Duration"),
            Span::styled(fmt_duration(mins), Style::default().fg(th.text)),
        ]));
    }
    if !rec.tags.is_empty() {
        lines.push(Line::from(vec![
            label("Tags"),
            Span::styled(rec.tags.join(", "), Style::default().fg(th.accent)),
        ]));
    }
    if rec.new_arrival {
        lines.push(Line::from(Span::styled(
            "New arrival",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        rec.description.clone(),
        Style::default().fg(th.subtext),
    )));

    let details = Paragraph::new(lines)
        .style(Style::default().bg(th.base))
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(details, area);
}
