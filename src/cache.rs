//! Expiring key-value cache for handler results.
//!
//! Entries carry their own time-to-live and expire lazily: an expired entry
//! stays in the map until the next [`ExpiringCache::get`] for its key removes
//! it. There is no background sweeper and no size bound, which is fine for the
//! small, finite keyspace of knowledge-base identifiers. A larger keyspace
//! would need an explicit reclamation pass or an LRU bound.
//!
//! Time is read from [`tokio::time::Instant`], so tests can pause and advance
//! the clock.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// TTL applied by [`ExpiringCache::set`] when the caller does not pick one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) > self.ttl
    }
}

/// Thread-safe string-keyed cache with per-entry TTL.
pub struct ExpiringCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone> ExpiringCache<V> {
    /// Creates an empty cache using [`DEFAULT_TTL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }

    /// Creates an empty cache with a custom default TTL.
    #[must_use]
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Returns the value stored under `key` if it has not expired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                tracing::trace!(key, "cache entry expired");
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Stores `value` under `key` with the default TTL.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
            ttl,
        };
        self.entries.lock().insert(key.into(), entry);
    }

    /// Removes the entry for `key`. Returns `true` if one existed.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.lock().remove(key).is_some()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of stored entries.
    ///
    /// Not expiry-aware: expired entries that no `get` has purged yet are
    /// still counted. Call [`ExpiringCache::purge_expired`] first for a live
    /// count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.lock().len()
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Returns the configured default TTL.
    #[must_use]
    pub const fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl<V: Clone> Default for ExpiringCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_stored_value() {
        let cache = ExpiringCache::new();
        cache.set("component:anime", "text".to_string());
        assert_eq!(cache.get("component:anime"), Some("text".to_string()));
        assert_eq!(cache.get("component:missing"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let cache = ExpiringCache::new();
        cache.set("key", 1);
        cache.set("key", 2);
        assert_eq!(cache.get("key"), Some(2));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn delete_reports_presence() {
        let cache = ExpiringCache::new();
        cache.set("key", 1);
        assert!(cache.delete("key"));
        assert!(!cache.delete("key"));
        assert_eq!(cache.get("key"), None);
    }

    #[test]
    fn clear_removes_everything() {
        let cache = ExpiringCache::new();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.clear();
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn default_ttl_is_five_minutes() {
        let cache: ExpiringCache<u8> = ExpiringCache::default();
        assert_eq!(cache.default_ttl(), Duration::from_secs(300));
    }

    #[tokio::test(start_paused = true)]
    async fn entry_visible_until_ttl_elapses() {
        let cache = ExpiringCache::new();
        cache.set_with_ttl("key", "v", Duration::from_secs(10));

        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(cache.get("key"), Some("v"));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(cache.get("key"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn size_counts_expired_entries_until_read() {
        let cache = ExpiringCache::new();
        cache.set_with_ttl("short", 1, Duration::from_secs(1));
        cache.set_with_ttl("long", 2, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(cache.size(), 2);

        assert_eq!(cache.get("short"), None);
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get("long"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn purge_gives_a_live_count() {
        let cache = ExpiringCache::new();
        cache.set_with_ttl("a", 1, Duration::from_secs(1));
        cache.set_with_ttl("b", 2, Duration::from_secs(1));
        cache.set_with_ttl("c", 3, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.purge_expired(), 2);
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.purge_expired(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn overwrite_restarts_ttl() {
        let cache = ExpiringCache::new();
        cache.set_with_ttl("key", 1, Duration::from_secs(10));
        tokio::time::advance(Duration::from_secs(8)).await;
        cache.set_with_ttl("key", 2, Duration::from_secs(10));
        tokio::time::advance(Duration::from_secs(8)).await;
        assert_eq!(cache.get("key"), Some(2));
    }
}
