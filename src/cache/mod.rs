//! Cache Module
//!
//! Provides an in-memory byte cache with TTL expiration and background sweeping.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use store::CacheStore;
