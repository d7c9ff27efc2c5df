//! Coin table screen.
//!
//! The screen picks one of two layouts from the width it is given: a
//! four-column table with a header row on wide terminals, or a stack of
//! cards on narrow ones. Both are pure functions of the loaded quotes,
//! the display currency and the selected row.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};
use unicode_width::UnicodeWidthStr;

use crate::models::{CoinQuote, Currency};
use crate::query::QueryState;
use crate::tui::app::App;
use crate::tui::components::{page_loader, pagination_bar, status_bar};
use crate::tui::format::{change_color, format_change, format_money, truncate_to_width};

/// Column labels of the wide layout.
pub const HEADER_LABELS: [&str; 4] = ["Coin", "Price", "24h Change", "Market Cap"];

/// Column proportions of the wide layout, in percent.
const COLUMN_WIDTHS: [u16; 4] = [35, 25, 20, 20];

/// Height of one coin in the wide layout: name line and symbol line.
const WIDE_ROW_HEIGHT: u16 = 2;

/// Height of one card in the narrow layout, trailing blank line included.
pub const CARD_HEIGHT: u16 = 6;

/// Which of the two row layouts to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Four-column table with a header row.
    Wide,
    /// One card per coin, no header.
    Narrow,
}

impl LayoutMode {
    /// Picks the layout for a terminal `width` columns wide.
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width >= breakpoint {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }
}

/// Splits the screen into status bar, quotes, pager and help rows.
pub fn screen_areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1), // Status bar
        Constraint::Min(3),    // Quotes
        Constraint::Length(1), // Prev / Next
        Constraint::Length(1), // Keybindings help
    ])
    .areas(area)
}

/// Renders the coin table screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [status_area, content_area, pager_area, help_area] = screen_areas(frame.area());

    status_bar::render(frame, status_area, app);

    match app.table.query.state() {
        QueryState::Idle | QueryState::Loading => {
            page_loader::render(frame, content_area, app.spinner_frame);
        }
        QueryState::Error { message } => {
            render_error(frame, content_area, message);
        }
        QueryState::Success(coins) => {
            let currency = app.table.display_currency();
            let mode = LayoutMode::for_width(content_area.width, app.wide_breakpoint);
            render_quotes(frame, content_area, coins, currency, app.table.selected, mode);
            pagination_bar::render(frame, pager_area, &app.table.pagination);
        }
    }

    render_keybindings(frame, help_area);
}

/// Returns the index of the coin drawn at terminal cell `(column, row)`.
///
/// Uses the same geometry as [`render`]: the scroll offset is the one the
/// table or list derives from the selected row, which is the smallest
/// offset that keeps the selection on screen.
pub fn row_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let coins = app.table.coins()?;
    let [_, content_area, _, _] = screen_areas(app.viewport);
    if !content_area.contains(Position::new(column, row)) {
        return None;
    }

    let (top, row_height) = match LayoutMode::for_width(content_area.width, app.wide_breakpoint) {
        LayoutMode::Wide => (content_area.y + 1, WIDE_ROW_HEIGHT),
        LayoutMode::Narrow => (content_area.y, CARD_HEIGHT),
    };
    let visible = usize::from(content_area.bottom().saturating_sub(top) / row_height).max(1);
    let offset = app.table.selected.saturating_sub(visible - 1);

    let slot = usize::from(row.checked_sub(top)? / row_height);
    let index = offset + slot;
    (slot < visible && index < coins.len()).then_some(index)
}

/// Renders a loaded page in the given layout.
pub fn render_quotes(
    frame: &mut Frame,
    area: Rect,
    coins: &[CoinQuote],
    currency: Currency,
    selected: usize,
    mode: LayoutMode,
) {
    if coins.is_empty() {
        let para = Paragraph::new(Line::from("No coins on this page").centered())
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, area);
        return;
    }

    match mode {
        LayoutMode::Wide => render_wide(frame, area, coins, currency, selected),
        LayoutMode::Narrow => render_narrow(frame, area, coins, currency, selected),
    }
}

/// Renders a fetch failure in place of the table.
fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let para = Paragraph::new(Line::from(format!("Error: {message}")).centered())
        .style(Style::default().fg(Color::Red));
    frame.render_widget(para, middle);
}

/// Renders the wide, four-column table.
fn render_wide(
    frame: &mut Frame,
    area: Rect,
    coins: &[CoinQuote],
    currency: Currency,
    selected: usize,
) {
    let header = Row::new(HEADER_LABELS.map(Cell::from)).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = coins.iter().map(|coin| wide_row(coin, currency));
    let widths = COLUMN_WIDTHS.map(Constraint::Percentage);

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Builds one row of the wide layout.
pub fn wide_row(coin: &CoinQuote, currency: Currency) -> Row<'static> {
    let name = Text::from(vec![
        Line::from(Span::styled(
            coin.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            coin.symbol.to_uppercase(),
            Style::default().fg(Color::Gray),
        )),
    ]);

    Row::new(vec![
        Cell::from(name),
        Cell::from(format_money(coin.current_price, currency)),
        Cell::from(Span::styled(
            format_change(coin.price_change_24h),
            Style::default().fg(change_color(coin.price_change_24h)),
        )),
        Cell::from(format_money(coin.market_cap, currency)),
    ])
    .height(WIDE_ROW_HEIGHT)
}

/// Renders the narrow, card-per-coin list.
fn render_narrow(
    frame: &mut Frame,
    area: Rect,
    coins: &[CoinQuote],
    currency: Currency,
    selected: usize,
) {
    let width = area.width as usize;
    let items: Vec<ListItem> = coins
        .iter()
        .map(|coin| ListItem::new(card(coin, currency, width)))
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Builds the card for one coin, `width` columns wide.
///
/// Header: name and price, then the symbol. Footer: 24h change and
/// market cap side by side.
pub fn card(coin: &CoinQuote, currency: Currency, width: usize) -> Text<'static> {
    let price = format_money(coin.current_price, currency);
    let name_room = width.saturating_sub(price.width() + 1);
    let name = truncate_to_width(&coin.name, name_room);

    let change = format_change(coin.price_change_24h);
    let market_cap = format_money(coin.market_cap, currency);
    let muted = Style::default().fg(Color::Gray);

    Text::from(vec![
        spread(
            vec![Span::styled(name, Style::default().add_modifier(Modifier::BOLD))],
            vec![Span::styled(price, Style::default().add_modifier(Modifier::BOLD))],
            width,
        ),
        Line::from(Span::styled(coin.symbol.to_uppercase(), muted)),
        Line::from(Span::styled("─".repeat(width), Style::default().fg(Color::DarkGray))),
        spread(
            vec![Span::styled("24h Change:", muted)],
            vec![Span::styled("Market Cap:", muted)],
            width,
        ),
        spread(
            vec![Span::styled(
                change,
                Style::default().fg(change_color(coin.price_change_24h)),
            )],
            vec![Span::raw(market_cap)],
            width,
        ),
        Line::default(),
    ])
}

/// Places `left` and `right` at opposite ends of a `width`-column line.
fn spread(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = left.iter().chain(&right).map(Span::width).sum();
    let gap = width.saturating_sub(used).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[j/k]select [Enter]details [n]ext [p]rev [c]urrency [q]uit";

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
