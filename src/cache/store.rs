// Cache store with per-entry timestamps and a fixed TTL.
// Best effort: storage failures degrade to cache misses, never to errors.

use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::clock::Clock;
use super::storage::Storage;

/// Default TTL for GitHub responses: 10 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Default slot namespace.
pub const DEFAULT_NAMESPACE: &str = "gh_";

/// Wrapper stored in each slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value.
    pub data: T,
    /// When the value was stored, epoch milliseconds.
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    /// Whether this entry is older than `ttl` at `now_millis`.
    pub fn is_expired(&self, now_millis: i64, ttl: Duration) -> bool {
        let age = now_millis.saturating_sub(self.timestamp);
        age > i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
    }
}

/// Key/value cache over a [`Storage`], with entries expiring after a TTL.
pub struct Cache<S, C> {
    storage: S,
    clock: C,
    namespace: String,
    ttl: Duration,
}

impl<S: Storage, C: Clock> Cache<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            namespace: DEFAULT_NAMESPACE.to_string(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[cfg(test)]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn slot(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }

    /// Read a live value. Missing, unreadable and expired entries are all `None`;
    /// an expired entry is also removed from storage.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let slot = self.slot(key);
        let raw = match self.storage.get_item(&slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%slot, "cache miss");
                return None;
            }
            Err(e) => {
                warn!(%slot, error = %e, "cache read failed");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(%slot, error = %e, "discarding unreadable cache entry");
                return None;
            }
        };

        if entry.is_expired(self.clock.now_millis(), self.ttl) {
            debug!(%slot, "cache entry expired");
            if let Err(e) = self.storage.remove_item(&slot) {
                warn!(%slot, error = %e, "failed to purge expired cache entry");
            }
            return None;
        }

        debug!(%slot, "cache hit");
        Some(entry.data)
    }

    /// Store a value stamped with the current time.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        self.set_at(key, value, self.clock.now_millis());
    }

    /// Store a value with an explicit timestamp (epoch milliseconds).
    pub fn set_at<T: Serialize>(&self, key: &str, value: &T, timestamp: i64) {
        let slot = self.slot(key);
        let entry = CacheEntry {
            data: value,
            timestamp,
        };

        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(e) => {
                warn!(%slot, error = %e, "failed to serialize cache entry");
                return;
            }
        };

        // Private mode, full disk, read-only store: carry on uncached
        if let Err(e) = self.storage.set_item(&slot, &json) {
            warn!(%slot, error = %e, "cache write failed");
        }
    }
}
