//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age checks.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload together with the instant it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion instant; reset on every overwrite
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is eligible for eviction at `now`.
    ///
    /// Boundary condition: the entry is expired once `now >= created_at + ttl`,
    /// so an entry whose TTL has fully elapsed is swept on the first tick that
    /// observes it. This is inclusive on purpose: eligibility starts exactly
    /// at the TTL, not strictly after it.
    ///
    /// The age is compared instead of `created_at + ttl`, so any TTL up to
    /// `Duration::MAX` is valid.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }

    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }
}
