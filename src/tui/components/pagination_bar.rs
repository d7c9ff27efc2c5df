//! Prev / Next controls under the coin table.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::pagination::Pagination;

/// Renders the pagination buttons; "Prev" is greyed out on page 1.
pub fn render(frame: &mut Frame, area: Rect, pagination: &Pagination) {
    let enabled = Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::Black).bg(Color::DarkGray);

    let prev_style = if pagination.can_go_previous() {
        enabled
    } else {
        disabled
    };

    let line = Line::from(vec![
        Span::styled(" ◀ Prev ", prev_style),
        Span::styled(
            format!("  Page {}  ", pagination.page()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" Next ▶ ", enabled),
    ])
    .centered();

    frame.render_widget(Paragraph::new(line), area);
}
