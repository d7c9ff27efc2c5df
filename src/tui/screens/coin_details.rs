//! Detail screen for a single coin.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{CoinQuote, Currency};
use crate::tui::app::App;
use crate::tui::components::status_bar;
use crate::tui::format::{change_color, format_change, format_money};

/// Renders the detail screen for `id`.
pub fn render(frame: &mut Frame, app: &App, id: &str) {
    let [status_area, content_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    status_bar::render(frame, status_area, app);

    match app.table.coin(id) {
        Some(coin) => render_coin(frame, content_area, coin, app.table.display_currency()),
        None => {
            let para = Paragraph::new(format!("Coin {id:?} is not on the loaded page"))
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(format!(" {id} ")));
            frame.render_widget(para, content_area);
        }
    }

    let help =
        Paragraph::new("[Esc]back [c]urrency [q]uit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn render_coin(frame: &mut Frame, area: Rect, coin: &CoinQuote, currency: Currency) {
    let block = Block::default()
        .title(format!(" {} ({}) ", coin.name, coin.symbol.to_uppercase()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<12}", "Price"), label),
            Span::styled(format_money(coin.current_price, currency), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "24h Change"), label),
            Span::styled(
                format_change(coin.price_change_24h),
                Style::default().fg(change_color(coin.price_change_24h)),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Market Cap"), label),
            Span::styled(format_money(coin.market_cap, currency), value),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Id"), label),
            Span::raw(coin.id.clone()),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Image"), label),
            Span::styled(coin.image.clone(), Style::default().fg(Color::Blue)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
