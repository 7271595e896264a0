use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::domain::types::Trip;

/// How long a trip list snapshot stays fresh.
pub const TRIP_LIST_TTL: Duration = Duration::from_secs(300);

/// In-memory snapshot of the trip list, private to the service instance.
///
/// Snapshots are shared as `Arc<Vec<Trip>>`; a fresh hit hands out the
/// identical `Arc`, so callers can detect a cached read by pointer equality.
pub struct TripListCache {
    ttl: Duration,
    slot: RwLock<Option<(Instant, Arc<Vec<Trip>>)>>,
}

impl TripListCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The current snapshot, or `None` when empty or older than the TTL.
    pub async fn get(&self) -> Option<Arc<Vec<Trip>>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some((stored_at, trips)) if stored_at.elapsed() < self.ttl => {
                Some(Arc::clone(trips))
            }
            _ => None,
        }
    }

    /// Store a fresh snapshot and return the shared handle to it.
    pub async fn put(&self, trips: Vec<Trip>) -> Arc<Vec<Trip>> {
        let trips = Arc::new(trips);
        *self.slot.write().await = Some((Instant::now(), Arc::clone(&trips)));
        trips
    }

    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }
}

impl Default for TripListCache {
    fn default() -> Self {
        Self::new(TRIP_LIST_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_identical_snapshot_while_fresh() {
        let cache = TripListCache::default();
        let stored = cache.put(Vec::new()).await;

        let hit = cache.get().await.unwrap();
        assert!(Arc::ptr_eq(&stored, &hit));
    }

    #[tokio::test]
    async fn should_miss_after_ttl_expiry() {
        let cache = TripListCache::new(Duration::ZERO);
        cache.put(Vec::new()).await;

        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn should_miss_after_invalidation() {
        let cache = TripListCache::default();
        cache.put(Vec::new()).await;
        cache.invalidate().await;

        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn should_start_empty() {
        let cache = TripListCache::default();
        assert!(cache.get().await.is_none());
    }
}
