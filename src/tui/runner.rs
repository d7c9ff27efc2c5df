//! Main draw/update loop.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::info;

use super::app::App;
use super::event::{Action, Message, spawn_event_reader, spawn_fetch, spawn_tick_timer, update};
use super::terminal::Tui;
use super::ui::render;
use crate::Result;
use crate::query::CoinFetcher;

/// Interval between ticks; drives the spinner and cache eviction.
const TICK_INTERVAL_MS: u64 = 100;

/// Runs the application until the user quits.
///
/// # Errors
///
/// Returns [`CoinboardError::Io`](crate::CoinboardError::Io) if drawing to
/// the terminal fails.
pub async fn run<F: CoinFetcher>(
    terminal: &mut Tui,
    mut app: App,
    fetcher: Arc<F>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);

    let size = terminal
        .size()
        .map_err(|e| crate::CoinboardError::Io(format!("failed to read terminal size: {e}")))?;
    app.resize(size.width, size.height);

    if let Some(key) = app.start(Instant::now()) {
        spawn_fetch(Arc::clone(&fetcher), key, tx.clone());
    }

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| crate::CoinboardError::Io(format!("failed to draw frame: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = update(&mut app, message) {
            perform(action, &fetcher, &tx);
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Carries out a side effect requested by [`update`].
fn perform<F: CoinFetcher>(
    action: Action,
    fetcher: &Arc<F>,
    tx: &mpsc::UnboundedSender<Message>,
) {
    match action {
        Action::Fetch(key) => spawn_fetch(Arc::clone(fetcher), key, tx.clone()),
    }
}
