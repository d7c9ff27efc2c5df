//! Loading indicator shown while a page is being fetched.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders a centered spinner with a `Loading...` label.
pub fn render(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let line = Line::from(vec![
        Span::styled(
            SPINNER[spinner_frame % SPINNER.len()],
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" Loading..."),
    ])
    .centered();

    frame.render_widget(Paragraph::new(line), middle);
}
