//! Search input pane.

use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the query input with a caret at the end of the text.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input text and focus)
/// - `area`: Target rectangle
///
/// Output:
/// - Draws the bordered input line and positions the terminal cursor after
///   the last typed character when the pane is focused.
pub fn render_search(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Search);

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(th.accent)),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext }),
        ),
    ]);
    let input = Paragraph::new(line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(" Search ", Style::default().fg(th.overlay)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.heading } else { th.surface })),
        );
    f.render_widget(input, area);

    if focused {
        let cols = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(1);
        let x = std::cmp::min((area.x + 1 + 2).saturating_add(cols), right);
        let y = area.y + 1;
        f.set_cursor_position(Position::new(x, y));
    }
}
