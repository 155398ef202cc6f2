//! Generic TTL-bounded LRU store, one instance per resource family.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::types::CachedValue;

/// Associative store from request fingerprint to timestamped value.
///
/// Reads that find an expired entry evict it and report a miss; writes
/// always overwrite wholesale. There is no partial merge and no
/// cross-entry coordination: concurrent `put` calls for the same
/// fingerprint are last-write-wins, which is safe because a put only ever
/// follows a successful fetch.
#[derive(Debug)]
pub struct TtlCache<T> {
    name: &'static str,
    default_ttl: Duration,
    entries: RwLock<LruCache<String, CachedValue<T>>>,
}

impl<T: Clone> TtlCache<T> {
    /// Creates a cache for one resource family.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; capacities come from
    /// `constants::cache_capacity` and are all non-zero.
    pub fn new(name: &'static str, capacity: usize, default_ttl: Duration) -> Self {
        Self {
            name,
            default_ttl,
            entries: RwLock::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("cache capacity must be non-zero"),
            )),
        }
    }

    /// Retrieves a cached value if present and not expired. Expired
    /// entries are removed and treated as absent.
    pub async fn get(&self, fingerprint: &str) -> Option<T> {
        let mut entries = self.entries.write().await;

        if let Some(entry) = entries.get(fingerprint) {
            if !entry.is_expired() {
                debug!(
                    "Cache hit: cache={}, key={}, age={:?}",
                    self.name,
                    fingerprint,
                    entry.cached_at.elapsed()
                );
                return Some(entry.value.clone());
            }
            warn!(
                "Removing expired cache entry: cache={}, key={}, age={:?}, ttl={:?}",
                self.name,
                fingerprint,
                entry.cached_at.elapsed(),
                entry.ttl
            );
            entries.pop(fingerprint);
        } else {
            debug!("Cache miss: cache={}, key={}", self.name, fingerprint);
        }

        None
    }

    /// Stores a value under a fingerprint with the family's default TTL,
    /// overwriting any previous entry.
    pub async fn put(&self, fingerprint: impl Into<String>, value: T) {
        self.put_with_ttl(fingerprint, value, self.default_ttl).await;
    }

    /// Stores a value with an explicit TTL. Used where one family mixes
    /// freshness classes, e.g. live match queries next to general ones.
    pub async fn put_with_ttl(&self, fingerprint: impl Into<String>, value: T, ttl: Duration) {
        let fingerprint = fingerprint.into();
        debug!(
            "Caching value: cache={}, key={}, ttl={:?}",
            self.name, fingerprint, ttl
        );
        let mut entries = self.entries.write().await;
        entries.put(fingerprint, CachedValue::new(value, ttl));
    }

    /// Current number of entries, including any not-yet-evicted expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache currently holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
