//! Recent searches pane.

use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Render the list of previously executed queries, most recent first.
pub fn render_recent(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Recent);
    let items: Vec<ListItem> = app
        .recent
        .iter()
        .map(|q| ListItem::new(Line::from(Span::styled(q.clone(), Style::default().fg(th.text)))))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(" Recent ", Style::default().fg(th.overlay)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.heading } else { th.surface })),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.accent))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.history_state);
}
