//! Event handling for the TUI.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::{CoinboardError, Result};
use crate::models::{CoinQuote, QueryKey};
use crate::query::CoinFetcher;
use crate::router::Route;

use super::app::App;
use super::screens::coin_table;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse button was pressed or the wheel scrolled.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A fetch issued for `key` settled.
    CoinsLoaded {
        key: QueryKey,
        result: Result<Vec<CoinQuote>>,
    },
    /// Request to quit the application.
    Quit,
}

/// Side effects the main loop performs on behalf of [`update`].
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Fetch the page for this key and report back with
    /// [`Message::CoinsLoaded`].
    Fetch(QueryKey),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Mouse(mouse))) if is_click_or_scroll(&mouse) => {
                    if tx.send(Message::Input(Event::Mouse(mouse))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Mouse capture also reports every pointer move; only clicks and the
/// wheel reach the app.
fn is_click_or_scroll(mouse: &MouseEvent) -> bool {
    matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Left)
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
    )
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Spawns a task that fetches the page for `key` and reports the outcome.
///
/// Exactly one [`Message::CoinsLoaded`] is sent per call, including when
/// the fetch itself panics.
pub fn spawn_fetch<F: CoinFetcher>(
    fetcher: Arc<F>,
    key: QueryKey,
    tx: mpsc::UnboundedSender<Message>,
) {
    tokio::spawn(async move {
        let fetch = tokio::spawn(async move { fetcher.fetch_coins(key.page, key.currency).await });
        let result = match fetch.await {
            Ok(result) => result,
            Err(e) => {
                error!(%key, error = %e, "Fetch task failed");
                Err(CoinboardError::Fetch(format!("fetch task failed: {e}")))
            }
        };
        // The receiver is gone only when the app is shutting down.
        let _ = tx.send(Message::CoinsLoaded { key, result });
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::CoinsLoaded { key, result } => {
            app.table.query.resolve(key, result, Instant::now());
            app.table.clamp_selection();
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            None
        }
        Event::Resize(w, h) => {
            debug!(width = w, height = h, "Terminal resized");
            app.resize(w, h);
            None
        }
        Event::Tick => {
            let now = Instant::now();
            app.tick_spinner();
            app.table.query.evict_expired(now);
            app.table.sync_currency(now).map(Action::Fetch)
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global keys (work on every screen)
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Char('c') => {
            app.toggle_currency();
            return app.table.sync_currency(Instant::now()).map(Action::Fetch);
        }
        _ => {}
    }

    match app.router.current() {
        Route::Home => handle_table_keys(app, key),
        Route::Details(_) | Route::NotFound(_) => handle_detail_keys(app, key),
    }
}

/// Handles keys on the coin table screen.
fn handle_table_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    let now = Instant::now();
    match key.code {
        // Row selection
        KeyCode::Char('j') | KeyCode::Down => {
            app.table.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.table.select_previous();
            None
        }
        KeyCode::Enter => {
            app.open_selected();
            None
        }

        // Pagination
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => {
            app.table.next_page(now).map(Action::Fetch)
        }
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => {
            app.table.previous_page(now).map(Action::Fetch)
        }

        _ => None,
    }
}

/// Handles clicks and scrolling on the coin table screen.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if *app.router.current() != Route::Home {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = coin_table::row_at(app, mouse.column, mouse.row) {
                app.activate_row(index);
            }
        }
        MouseEventKind::ScrollDown => app.table.select_next(),
        MouseEventKind::ScrollUp => app.table.select_previous(),
        _ => {}
    }
}

/// Handles keys on the detail screen.
fn handle_detail_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.router.back();
            None
        }
        _ => None,
    }
}
