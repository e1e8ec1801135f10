//! Cache Store Module
//!
//! Plain keyed storage of byte payloads with TTL-based sweeping. Not
//! synchronized on its own; [`ExpiringCache`](crate::cache::ExpiringCache)
//! owns it behind a single mutex.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage where every entry shares one TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lifetime of every entry, fixed at construction
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Set ==
    /// Stores a payload under `key`.
    ///
    /// If the key already exists, the value is overwritten and its age reset.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Expiry is not checked here: an expired entry stays readable until the
    /// next sweep removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Cleanup Expired ==
    /// Removes every entry that is expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));
        before - self.entries.len()
    }

    /// Returns the TTL shared by all entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
