//! Status bar component.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::query::QueryState;
use crate::tui::app::App;

/// Renders the status bar: page, currency, query state and cache age.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let table = &app.table;

    let (state_label, state_color) = match table.query.state() {
        QueryState::Idle => ("Idle", Color::Gray),
        QueryState::Loading => ("Loading", Color::Yellow),
        QueryState::Error { .. } => ("Error", Color::Red),
        QueryState::Success(_) if table.query.is_refreshing() => ("Refreshing", Color::Yellow),
        QueryState::Success(_) => ("Live", Color::Green),
    };

    let age_span = table
        .query
        .current_key()
        .and_then(|key| table.query.cached(&key))
        .map(|entry| {
            let secs = Instant::now()
                .saturating_duration_since(entry.updated_at)
                .as_secs();
            Span::styled(
                format!(" updated {secs}s ago "),
                Style::default().fg(Color::Gray),
            )
        })
        .unwrap_or_else(|| Span::raw(""));

    let spans = vec![
        Span::styled(
            " coinboard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" Page {} ", table.pagination.page()),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", table.display_currency().as_str().to_uppercase()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::styled(format!(" {state_label} "), Style::default().fg(state_color)),
        Span::raw("│"),
        age_span,
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
