use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;
use tripwise::{
    oracle::{Error, TravelTimeOracle},
    shared::{Coordinate, CoordinateKey, Duration},
};

type RouteKey = (CoordinateKey, CoordinateKey);

/// Remembers travel times across validation passes.
/// Failures are never cached so a flaky oracle gets asked again.
pub struct CachedOracle<O> {
    inner: O,
    entries: RwLock<HashMap<RouteKey, Duration>>,
    capacity: usize,
}

impl<O: TravelTimeOracle> CachedOracle<O> {
    pub fn new(inner: O, capacity: usize) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl<O: TravelTimeOracle> TravelTimeOracle for CachedOracle<O> {
    async fn travel_time(&self, from: Coordinate, to: Coordinate) -> Result<Duration, Error> {
        let key = (from.key(), to.key());
        if let Some(duration) = self.entries.read().await.get(&key).copied() {
            debug!("Travel time from {from} to {to} served from cache");
            return Ok(duration);
        }

        let duration = self.inner.travel_time(from, to).await?;
        if self.capacity > 0 {
            let mut entries = self.entries.write().await;
            if entries.len() >= self.capacity {
                debug!("Travel time cache full, clearing {} entries", entries.len());
                entries.clear();
            }
            entries.insert(key, duration);
        }
        Ok(duration)
    }
}
