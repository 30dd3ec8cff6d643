use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::trace;

/// Default time-to-live for entries stored without an explicit one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) > self.ttl
    }
}

/// In-memory key/value cache where every entry carries its own TTL.
///
/// Expired entries are dropped lazily on [`TtlCache::get`] or in bulk by
/// [`TtlCache::cleanup`]. Safe to share between tasks.
#[derive(Debug)]
pub struct TtlCache<V> {
    store: Mutex<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return a live entry, evicting it if its TTL has passed.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut store = self.lock();
        let entry = store.get(key)?;
        if entry.is_expired(Instant::now()) {
            trace!(key, "cache entry expired");
            store.remove(key);
            return None;
        }
        trace!(key, "cache hit");
        Some(entry.value.clone())
    }

    /// Store `value`, using the cache's default TTL when `ttl` is `None`.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
            ttl: ttl.unwrap_or(self.default_ttl),
        };
        self.lock().insert(key.into(), entry);
    }

    pub fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of stored entries, expired ones included until evicted.
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Evict every expired entry.
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.lock().retain(|_, entry| !entry.is_expired(now));
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn cache() -> TtlCache<String> {
        TtlCache::new(Duration::from_secs(1))
    }

    #[test]
    fn test_set_and_get() {
        let cache = cache();
        cache.set("key1", "value1".to_string(), None);
        assert_eq!(cache.get("key1").as_deref(), Some("value1"));
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_expired_entry() {
        let cache = cache();
        cache.set("key1", "value1".to_string(), Some(Duration::from_millis(50)));
        assert!(cache.get("key1").is_some());
        sleep(Duration::from_millis(100));
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_delete() {
        let cache = cache();
        cache.set("key1", "value1".to_string(), None);
        assert!(cache.delete("key1"));
        assert_eq!(cache.get("key1"), None);
        assert!(!cache.delete("key1"));
    }

    #[test]
    fn test_clear_and_size() {
        let cache = cache();
        assert_eq!(cache.size(), 0);
        cache.set("key1", "value1".to_string(), None);
        cache.set("key2", "value2".to_string(), None);
        assert_eq!(cache.size(), 2);
        cache.clear();
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.get("key2"), None);
    }

    #[test]
    fn test_cleanup() {
        let cache = cache();
        cache.set("key1", "value1".to_string(), Some(Duration::from_millis(50)));
        cache.set("key2", "value2".to_string(), Some(Duration::from_secs(5)));
        assert_eq!(cache.size(), 2);
        sleep(Duration::from_millis(100));
        cache.cleanup();
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.get("key2").as_deref(), Some("value2"));
    }

    #[test]
    fn test_structured_values() {
        let cache: TtlCache<Vec<u32>> = TtlCache::default();
        cache.set("obj", vec![1, 2, 3], None);
        assert_eq!(cache.get("obj"), Some(vec![1, 2, 3]));
    }
}
