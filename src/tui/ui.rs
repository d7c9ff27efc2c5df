//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app::App;
use super::screens::{coin_details, coin_table};
use crate::router::Route;

/// Renders the screen for the current route.
pub fn render(frame: &mut Frame, app: &App) {
    match app.router.current() {
        Route::Home => coin_table::render(frame, app),
        Route::Details(id) => coin_details::render(frame, app, id),
        Route::NotFound(path) => {
            let para = Paragraph::new(format!("No screen for {path} [Esc]back"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(para, frame.area());
        }
    }
}
