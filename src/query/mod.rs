//! Query controller for pages of coin quotes.
//!
//! [`QueryController`] tracks the `(page, currency)` key currently on
//! screen, answers from [`QueryCache`] while data is fresh or still
//! retained, and tells the caller which key to fetch when it is not
//! fresh. Fetches run elsewhere; their results come back through
//! [`QueryController::resolve`].

pub mod cache;

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

pub use cache::{CacheEntry, QueryCache};

use crate::Result;
use crate::config::CacheConfig;
use crate::models::{CoinQuote, Currency, QueryKey};

/// Source of coin quote pages.
pub trait CoinFetcher: Send + Sync + 'static {
    /// Fetches one 1-indexed page of quotes priced in `currency`.
    fn fetch_coins(
        &self,
        page: u32,
        currency: Currency,
    ) -> impl Future<Output = Result<Vec<CoinQuote>>> + Send;
}

/// Shared page of quotes.
pub type CoinPage = Arc<Vec<CoinQuote>>;

/// Observable state of the current query.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch for the current key is in flight.
    Loading,
    /// The last fetch for the current key failed.
    Error { message: String },
    /// Quotes for the current key.
    Success(CoinPage),
}

/// Memoizes coin pages per key and decides when a fetch is needed.
#[derive(Debug)]
pub struct QueryController {
    cache: QueryCache<QueryKey, CoinPage>,
    current: Option<QueryKey>,
    state: QueryState,
    in_flight: HashSet<QueryKey>,
}

impl QueryController {
    /// Creates a controller with the given cache windows.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: QueryCache::new(config.stale_time, config.cache_time),
            current: None,
            state: QueryState::Idle,
            in_flight: HashSet::new(),
        }
    }

    /// Makes `key` the current query.
    ///
    /// A retained but stale page is shown right away while it is
    /// refetched in the background; only a key with nothing cached goes
    /// through [`QueryState::Loading`].
    ///
    /// Returns the key to fetch, or `None` when a fresh cached page was
    /// served or a fetch for this key is already in flight.
    pub fn request(&mut self, key: QueryKey, now: Instant) -> Option<QueryKey> {
        if let Some(previous) = self.current.replace(key)
            && previous != key
        {
            self.cache.release(&previous, now);
        }
        self.cache.observe(&key);

        if let Some(coins) = self.cache.fresh(&key, now) {
            debug!(%key, "Serving coin page from cache");
            self.state = QueryState::Success(Arc::clone(coins));
            return None;
        }

        self.state = match self.cache.peek(&key) {
            Some(entry) => {
                debug!(%key, "Serving stale coin page while refetching");
                QueryState::Success(Arc::clone(&entry.value))
            }
            None => QueryState::Loading,
        };
        if !self.in_flight.insert(key) {
            debug!(%key, "Fetch already in flight");
            return None;
        }

        info!(%key, "Fetching coin page");
        Some(key)
    }

    /// Returns `true` while a stale page is shown and its refetch is pending.
    pub fn is_refreshing(&self) -> bool {
        matches!(self.state, QueryState::Success(_))
            && self.current.is_some_and(|key| self.in_flight.contains(&key))
    }

    /// Records the outcome of a fetch for `key`.
    ///
    /// Successful pages are always cached, but only the current key's
    /// outcome changes [`state`](Self::state). A failure leaves any
    /// previously cached page in place.
    pub fn resolve(&mut self, key: QueryKey, result: Result<Vec<CoinQuote>>, now: Instant) {
        self.in_flight.remove(&key);
        let is_current = self.current == Some(key);

        match result {
            Ok(coins) => {
                info!(%key, count = coins.len(), "Coin page loaded");
                let coins = Arc::new(coins);
                self.cache.insert(key, Arc::clone(&coins), now, is_current);
                if is_current {
                    self.state = QueryState::Success(coins);
                } else {
                    debug!(%key, "Cached result for superseded key");
                }
            }
            Err(err) => {
                warn!(%key, error = %err, "Coin page fetch failed");
                if is_current {
                    self.state = QueryState::Error {
                        message: err.to_string(),
                    };
                }
            }
        }
    }

    /// Evicts cached pages whose retention window has passed.
    pub fn evict_expired(&mut self, now: Instant) {
        let evicted = self.cache.evict_expired(now);
        if evicted > 0 {
            debug!(evicted, "Evicted expired coin pages");
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn current_key(&self) -> Option<QueryKey> {
        self.current
    }

    /// Returns the cached entry for `key`, fresh or stale.
    pub fn cached(&self, key: &QueryKey) -> Option<&CacheEntry<CoinPage>> {
        self.cache.peek(key)
    }

    /// Returns `true` if a fetch for `key` has been issued and not resolved.
    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }
}
