//! Shared test utilities.
#![allow(dead_code)]

use std::sync::Mutex;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use coinboard::config::{CacheConfig, UiConfig};
use coinboard::models::{CoinQuote, Currency, QueryKey};
use coinboard::query::CoinFetcher;
use coinboard::tui::{App, render};
use coinboard::{CoinboardError, Result};

/// Builds a quote with the given numbers.
pub fn coin(
    id: &str,
    name: &str,
    price: Decimal,
    change: Decimal,
    market_cap: Decimal,
) -> CoinQuote {
    CoinQuote {
        id: id.to_string(),
        name: name.to_string(),
        symbol: id.chars().take(3).collect(),
        image: format!("https://img.example.com/{id}.png"),
        current_price: price,
        price_change_24h: change,
        market_cap,
    }
}

/// A three-coin page: one gainer, one loser, one flat.
pub fn sample_page() -> Vec<CoinQuote> {
    vec![
        coin("bitcoin", "Bitcoin", dec!(67187.33), dec!(1023.45), dec!(1325138560233)),
        coin("ethereum", "Ethereum", dec!(3764.21), dec!(-42.118), dec!(452130978211)),
        coin("tether", "Tether", dec!(1.0), dec!(0), dec!(112000000000)),
    ]
}

/// App with default cache windows and the given starting currency.
pub fn test_app(currency: Currency) -> App {
    App::new(
        UiConfig {
            currency,
            ..UiConfig::default()
        },
        CacheConfig::default(),
    )
}

/// Renders `app` into an in-memory terminal and returns its rows as text.
pub fn render_lines(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Fetcher that records every call and answers from a fixed script.
pub struct MockFetcher {
    pub calls: Mutex<Vec<QueryKey>>,
    failure: Option<String>,
}

impl MockFetcher {
    pub fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<QueryKey> {
        self.calls.lock().unwrap().clone()
    }
}

impl CoinFetcher for MockFetcher {
    async fn fetch_coins(&self, page: u32, currency: Currency) -> Result<Vec<CoinQuote>> {
        self.calls.lock().unwrap().push(QueryKey::new(page, currency));
        match &self.failure {
            Some(message) => Err(CoinboardError::Fetch(message.clone())),
            None => Ok(sample_page()),
        }
    }
}

/// Fetcher whose every call panics.
pub struct PanickingFetcher;

impl CoinFetcher for PanickingFetcher {
    async fn fetch_coins(&self, page: u32, _currency: Currency) -> Result<Vec<CoinQuote>> {
        panic!("fetcher blew up on page {page}");
    }
}

/// Sends a plain key press through [`update`](coinboard::tui::update).
pub fn press(app: &mut App, code: crossterm::event::KeyCode) -> Option<coinboard::tui::Action> {
    let key = crossterm::event::KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
    coinboard::tui::update(app, coinboard::tui::Message::Input(coinboard::tui::Event::Key(key)))
}

/// Sends a left click at `(column, row)` through [`update`](coinboard::tui::update).
pub fn click(app: &mut App, column: u16, row: u16) -> Option<coinboard::tui::Action> {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    coinboard::tui::update(app, coinboard::tui::Message::Input(coinboard::tui::Event::Mouse(mouse)))
}

/// Delivers a fetch result for `key` through the message loop.
pub fn deliver(app: &mut App, key: QueryKey, result: Result<Vec<CoinQuote>>) {
    let action = coinboard::tui::update(app, coinboard::tui::Message::CoinsLoaded { key, result });
    assert!(action.is_none());
}

/// App that has loaded [`sample_page`] for page 1.
pub fn loaded_app(currency: Currency) -> App {
    let mut app = test_app(currency);
    let key = app
        .start(std::time::Instant::now())
        .expect("empty cache must fetch");
    deliver(&mut app, key, Ok(sample_page()));
    app
}
