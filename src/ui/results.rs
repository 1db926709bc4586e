//! Results list with facet toggle badges and the sort dropdown overlay.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, Difficulty, Kind, Record, SORT_KEYS, SearchPhase};
use crate::theme::theme;
use crate::util::{ellipsize, fmt_duration};

/// Build one styled row for a record.
fn record_row(r: &Record, width: usize) -> ListItem<'static> {
    let th = theme();
    let (kind_label, kind_color) = match r.kind {
        Kind::Category => ("CAT", th.heading),
        Kind::Lesson => ("LES", th.green),
    };
    let mut segs: Vec<Span> = vec![
        Span::styled(format!("{kind_label} "), Style::default().fg(kind_color)),
        Span::styled(
            ellipsize(&r.title, width.saturating_sub(28)),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {:.1}", r.rating), Style::default().fg(th.yellow)),
    ];
    if let Some(mins) = r.duration_minutes {
        segs.push(Span::styled(
            format!("  {}", fmt_duration(mins)),
            Style::default().fg(th.overlay),
        ));
    }
    segs.push(Span::styled(
        format!("  {}", r.difficulty.label()),
        Style::default().fg(th.subtext),
    ));
    if r.new_arrival {
        segs.push(Span::raw("  "));
        segs.push(Span::styled(
            "[NEW]",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ));
    }
    ListItem::new(Line::from(segs))
}

/// Build the title spans: count, sort button, and facet toggle badges.
fn title_spans(app: &AppState) -> Vec<Span<'static>> {
    let th = theme();
    let mut spans: Vec<Span> = vec![Span::styled(
        format!("Results ({})", app.results.len()),
        Style::default().fg(th.overlay),
    )];
    spans.push(Span::raw("  "));
    let btn_style = if app.sort_menu_open {
        Style::default()
            .fg(th.crust)
            .bg(th.heading)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(th.heading)
            .bg(th.surface)
            .add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled("Sort v", btn_style));
    spans.push(Span::raw("  "));

    let badge = |label: &str, on: bool| -> Span<'static> {
        let (fg, bg) = if on {
            (th.crust, th.green)
        } else {
            (th.subtext, th.surface)
        };
        Span::styled(
            format!("[{label}]"),
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        )
    };
    spans.push(badge(
        "Beg",
        app.facets.difficulties.contains(&Difficulty::Beginner),
    ));
    spans.push(Span::raw(" "));
    spans.push(badge(
        "Int",
        app.facets.difficulties.contains(&Difficulty::Intermediate),
    ));
    spans.push(Span::raw(" "));
    spans.push(badge(
        "Adv",
        app.facets.difficulties.contains(&Difficulty::Advanced),
    ));
    spans.push(Span::raw(" "));
    spans.push(badge("Cat", app.facets.kinds.contains(&Kind::Category)));
    spans.push(Span::raw(" "));
    spans.push(badge("Les", app.facets.kinds.contains(&Kind::Lesson)));
    if app.facets.min_rating > 0.0 {
        spans.push(Span::raw(" "));
        spans.push(badge(&format!("≥{:.1}", app.facets.min_rating), true));
    }
    if app.facets.max_duration_minutes > 0 {
        spans.push(Span::raw(" "));
        spans.push(badge(
            &format!("≤{}m", app.facets.max_duration_minutes),
            true,
        ));
    }
    spans
}

/// What: Render the results list, its title controls, and the sort overlay.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (results, selection, facets, menu)
/// - `area`: Target rectangle
///
/// Output:
/// - Draws the list (or a phase placeholder while idle/loading/empty) and,
///   when open, the sort dropdown with the active key marked.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let width = area.width as usize;

    let block = Block::default()
        .title(Line::from(title_spans(app)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface));

    if app.results.is_empty() {
        let hint = match app.phase {
            SearchPhase::Idle => "Type to search the catalog",
            SearchPhase::Loading => "Searching…",
            SearchPhase::Empty => "No records match the query and filters",
            SearchPhase::Results => "",
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(th.subtext),
        )))
        .style(Style::default().bg(th.base))
        .block(block);
        f.render_widget(placeholder, area);
    } else {
        let items: Vec<ListItem> = app.results.iter().map(|r| record_row(r, width)).collect();
        let list = List::new(items)
            .style(Style::default().fg(th.text).bg(th.base))
            .block(block)
            .highlight_style(Style::default().fg(th.crust).bg(th.accent))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut app.list_state);
    }

    if app.sort_menu_open {
        render_sort_menu(f, app, area);
    }
}

/// Render the sort dropdown just under the title row.
fn render_sort_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let widest = SORT_KEYS
        .iter()
        .map(|k| k.label().len())
        .max()
        .unwrap_or(0) as u16;
    let w = widest.saturating_add(4).min(area.width.saturating_sub(2));
    let h = (SORT_KEYS.len() as u16) + 2;
    let rect = Rect {
        x: area.x + 2,
        y: area.y.saturating_add(1),
        width: w.saturating_add(2),
        height: h,
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, key) in SORT_KEYS.iter().enumerate() {
        let active = *key == app.sort_key;
        let mark = if active { "✔ " } else { "  " };
        let style = if i == app.sort_menu_selected {
            Style::default()
                .fg(th.crust)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(mark.to_string(), Style::default().fg(th.overlay)),
            Span::styled(key.label().to_string(), style),
        ]));
    }
    let menu = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Sort by ", Style::default().fg(th.overlay)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(menu, rect);
}
