//! Cache entry structures with TTL support

use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// A cached value paired with its fetch timestamp and TTL.
///
/// The timestamp is a `tokio::time::Instant` so that paused-clock tests
/// can drive expiry deterministically.
#[derive(Debug, Clone)]
pub struct CachedValue<T> {
    pub value: T,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl<T> CachedValue<T> {
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// Checks whether the entry has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        let age = self.cached_at.elapsed();
        let is_expired = age >= self.ttl;
        trace!(
            "Cache expiration check: age={:?}, ttl={:?}, is_expired={}",
            age, self.ttl, is_expired
        );
        is_expired
    }

    /// Remaining time until the entry expires.
    pub fn time_until_expiry(&self) -> Duration {
        self.ttl.saturating_sub(self.cached_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let entry = CachedValue::new(42u32, Duration::from_secs(300));
        assert!(!entry.is_expired());
        assert_eq!(entry.time_until_expiry(), Duration::from_secs(300));

        tokio::time::advance(Duration::from_secs(299)).await;
        assert!(!entry.is_expired());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(entry.is_expired());
        assert_eq!(entry.time_until_expiry(), Duration::ZERO);
    }
}
