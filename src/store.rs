//! Shared currency preference.
//!
//! [`CurrencyStore`] is the single writable owner of the display currency;
//! components receive a read-only [`CurrencyHandle`] and poll it for
//! changes between frames.

use tokio::sync::watch;
use tracing::info;

use crate::models::Currency;

/// Process-wide currency preference backed by a `watch` channel.
#[derive(Debug)]
pub struct CurrencyStore {
    tx: watch::Sender<Currency>,
}

impl CurrencyStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: Currency) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns the current preference.
    pub fn current(&self) -> Currency {
        *self.tx.borrow()
    }

    /// Replaces the preference, notifying subscribers only on change.
    pub fn set(&self, currency: Currency) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == currency {
                false
            } else {
                *current = currency;
                true
            }
        });
        if changed {
            info!(%currency, "Currency preference changed");
        }
    }

    /// Returns a read-only handle that observes future changes.
    pub fn subscribe(&self) -> CurrencyHandle {
        CurrencyHandle {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CurrencyStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// Read-only view of a [`CurrencyStore`].
#[derive(Clone, Debug)]
pub struct CurrencyHandle {
    rx: watch::Receiver<Currency>,
}

impl CurrencyHandle {
    /// Returns the latest preference without marking it seen.
    pub fn current(&self) -> Currency {
        *self.rx.borrow()
    }

    /// Returns `true` if the preference changed since the last
    /// [`mark_seen`](Self::mark_seen). A dropped store counts as unchanged.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Marks the latest preference as seen and returns it.
    pub fn mark_seen(&mut self) -> Currency {
        *self.rx.borrow_and_update()
    }
}
