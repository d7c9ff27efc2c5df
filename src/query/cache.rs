//! Keyed query cache with separate freshness and retention windows.
//!
//! An entry is *fresh* for `stale_time` after it was stored. Once its key
//! stops being observed it is kept for another `cache_time` and then
//! evicted. The observed key is never evicted, however old its data.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// A stored value and its bookkeeping timestamps.
#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    pub value: V,
    /// When the value was last stored.
    pub updated_at: Instant,
    /// When the key stopped being observed; `None` while observed.
    pub inactive_since: Option<Instant>,
}

impl<V> CacheEntry<V> {
    /// Returns `true` if the value is younger than `stale_time` at `now`.
    pub fn is_fresh(&self, stale_time: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.updated_at) < stale_time
    }
}

/// Cache of query results keyed by `K`.
#[derive(Debug)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    stale_time: Duration,
    cache_time: Duration,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache.
    pub fn new(stale_time: Duration, cache_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
            cache_time,
        }
    }

    /// Returns the value for `key` only if it is still fresh.
    pub fn fresh(&self, key: &K, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(self.stale_time, now))
            .map(|entry| &entry.value)
    }

    /// Returns the entry for `key` regardless of freshness.
    pub fn peek(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, fresh as of `now`.
    ///
    /// The entry keeps its observed/inactive status; a value stored for a
    /// key nobody observes starts its retention window at `now`.
    pub fn insert(&mut self, key: K, value: V, now: Instant, observed: bool) {
        let inactive_since = match self.entries.get(&key) {
            Some(existing) if !observed => existing.inactive_since.or(Some(now)),
            _ if observed => None,
            _ => Some(now),
        };
        self.entries.insert(
            key,
            CacheEntry {
                value,
                updated_at: now,
                inactive_since,
            },
        );
    }

    /// Marks `key` as observed, stopping its retention clock.
    pub fn observe(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.inactive_since = None;
        }
    }

    /// Marks `key` as no longer observed, starting its retention clock.
    pub fn release(&mut self, key: &K, now: Instant) {
        if let Some(entry) = self.entries.get_mut(key)
            && entry.inactive_since.is_none()
        {
            entry.inactive_since = Some(now);
        }
    }

    /// Removes entries that have been inactive for at least `cache_time`.
    /// Returns how many were removed.
    pub fn evict_expired(&mut self, now: Instant) -> usize {
        let cache_time = self.cache_time;
        let before = self.entries.len();
        self.entries.retain(|_, entry| match entry.inactive_since {
            Some(since) => now.saturating_duration_since(since) < cache_time,
            None => true,
        });
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MINUTES: Duration = Duration::from_secs(120);

    fn cache() -> QueryCache<u32, &'static str> {
        QueryCache::new(TWO_MINUTES, TWO_MINUTES)
    }

    #[test]
    fn fresh_until_stale_time_elapses() {
        let t0 = Instant::now();
        let mut cache = cache();
        cache.insert(1, "page one", t0, true);

        assert_eq!(cache.fresh(&1, t0 + Duration::from_secs(119)), Some(&"page one"));
        assert_eq!(cache.fresh(&1, t0 + TWO_MINUTES), None);
        // Stale data is still reachable for fallback.
        assert_eq!(cache.peek(&1).map(|e| e.value), Some("page one"));
    }

    #[test]
    fn observed_entry_is_never_evicted() {
        let t0 = Instant::now();
        let mut cache = cache();
        cache.insert(1, "page one", t0, true);

        assert_eq!(cache.evict_expired(t0 + Duration::from_secs(3600)), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn released_entry_evicted_after_cache_time() {
        let t0 = Instant::now();
        let mut cache = cache();
        cache.insert(1, "page one", t0, true);
        cache.release(&1, t0 + Duration::from_secs(10));

        assert_eq!(cache.evict_expired(t0 + Duration::from_secs(129)), 0);
        assert_eq!(cache.evict_expired(t0 + Duration::from_secs(130)), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn observing_again_stops_retention_clock() {
        let t0 = Instant::now();
        let mut cache = cache();
        cache.insert(1, "page one", t0, true);
        cache.release(&1, t0);
        cache.observe(&1);

        assert_eq!(cache.evict_expired(t0 + Duration::from_secs(600)), 0);
    }

    #[test]
    fn unobserved_insert_starts_retention_immediately() {
        let t0 = Instant::now();
        let mut cache = cache();
        cache.insert(2, "late page", t0, false);

        assert!(cache.peek(&2).unwrap().inactive_since.is_some());
        assert_eq!(cache.evict_expired(t0 + TWO_MINUTES), 1);
    }
}
