//! Expiring Cache Module
//!
//! Shared, lock-protected handle over a [`CacheStore`] with a background sweep.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_sweep_task;

// == Sweep Guard ==
/// Owns the sweep task and aborts it when the last cache handle goes away.
#[derive(Debug)]
struct SweepGuard(JoinHandle<()>);

impl Drop for SweepGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

// == Expiring Cache ==
/// Concurrency-safe byte cache whose entries expire after a fixed TTL.
///
/// Cloning is cheap and every clone shares the same store. All access goes
/// through one exclusive lock. A background task sweeps expired entries once
/// per TTL, so an entry can stay readable for up to twice the TTL when it is
/// inserted right after a sweep.
///
/// # Example
/// ```ignore
/// let cache = ExpiringCache::new(Duration::from_secs(300))?;
/// cache.put("https://pokeapi.co/api/v2/pokemon/pikachu", body);
/// let hit = cache.get("https://pokeapi.co/api/v2/pokemon/pikachu");
/// ```
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    store: Arc<Mutex<CacheStore>>,
    sweeper: Arc<SweepGuard>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// A zero TTL is rejected with [`PokedexError::InvalidTtl`]. Outside a
    /// tokio runtime the sweep cannot be spawned and
    /// [`PokedexError::NoRuntime`] is returned. Any other TTL, up to
    /// `Duration::MAX`, is accepted; sweeps run every TTL but at most every
    /// [`MAX_SWEEP_PERIOD`](crate::tasks::MAX_SWEEP_PERIOD).
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidTtl(ttl));
        }
        let runtime = Handle::try_current()?;

        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let handle = spawn_sweep_task(&runtime, Arc::downgrade(&store), ttl);

        Ok(Self {
            store,
            sweeper: Arc::new(SweepGuard(handle)),
        })
    }

    // == Put ==
    /// Inserts or replaces the payload for `key`, resetting its age.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache put");
        self.store.lock().set(key, value);
    }

    // == Get ==
    /// Returns the payload for `key` if present and not yet swept.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().get(key)
    }

    // == Sweep ==
    /// Runs one eviction pass immediately and returns how many entries it removed.
    pub fn sweep_expired(&self) -> usize {
        self.store.lock().cleanup_expired(Instant::now())
    }

    // == Shutdown ==
    /// Stops the background sweep. Stored entries stay readable but no longer expire.
    ///
    /// Calling this more than once is harmless.
    pub fn shutdown(&self) {
        self.sweeper.0.abort();
    }

    /// Returns true while the sweep task is still running.
    pub fn is_sweeping(&self) -> bool {
        !self.sweeper.0.is_finished()
    }

    /// Returns the TTL the cache was built with.
    pub fn ttl(&self) -> Duration {
        self.store.lock().ttl()
    }

    /// Returns the number of stored entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const KEY: &str = "https://pokeapi.co/api/v2/location-area?offset=40&limit=20";

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let result = ExpiringCache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidTtl(_))));
    }

    #[test]
    fn test_outside_runtime_rejected() {
        let result = ExpiringCache::new(Duration::from_secs(5));
        assert!(matches!(result, Err(PokedexError::NoRuntime(_))));
    }

    #[tokio::test]
    async fn test_huge_ttl_accepted() {
        for ttl in [Duration::MAX, Duration::from_secs(u64::MAX)] {
            let cache = ExpiringCache::new(ttl).unwrap();
            cache.put(KEY, b"v".to_vec());

            assert_eq!(cache.sweep_expired(), 0);
            assert_eq!(cache.get(KEY), Some(b"v".to_vec()));
            assert!(cache.is_sweeping());
            assert_eq!(cache.ttl(), ttl);
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();
        let value: Vec<u8> = (0..5).map(|i| b'A' + i).collect();

        cache.put(KEY, value.clone());

        assert_eq!(cache.get(KEY), Some(value));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();
        cache.put(KEY, b"ABCDE".to_vec());

        assert!(cache.get("https://example.com/api/v1/resource").is_none());
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();
        let other = cache.clone();

        other.put("shared", b"x".to_vec());

        assert_eq!(cache.get("shared"), Some(b"x".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_after_interval() {
        let cache = ExpiringCache::new(Duration::from_secs(2)).unwrap();
        cache.put(KEY, Vec::new());

        sleep(Duration::from_secs(4) + Duration::from_millis(100)).await;

        assert!(cache.get(KEY).is_none(), "entry should have been reaped");
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reap_before_interval() {
        let cache = ExpiringCache::new(Duration::from_secs(2)).unwrap();
        cache.put(KEY, b"v".to_vec());

        sleep(Duration::from_secs(1)).await;

        assert_eq!(cache.get(KEY), Some(b"v".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_age() {
        let cache = ExpiringCache::new(Duration::from_secs(2)).unwrap();
        cache.put(KEY, b"v1".to_vec());

        sleep(Duration::from_secs(1)).await;
        cache.put(KEY, b"v2".to_vec());
        sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get(KEY), Some(b"v2".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_five_second_ttl() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();

        cache.put("A", vec![0x41, 0x42]);
        assert_eq!(cache.get("A"), Some(vec![0x41, 0x42]));

        sleep(Duration::from_secs(6)).await;

        assert_eq!(cache.get("A"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_survives_until_next_sweep() {
        let cache = ExpiringCache::new(Duration::from_secs(2)).unwrap();

        // Inserted just after the first sweep at t=2s.
        sleep(Duration::from_millis(2100)).await;
        cache.put(KEY, b"late".to_vec());

        // Nominally expired at t=4.1s, but the t=4s sweep is too early for it.
        sleep(Duration::from_millis(2500)).await;
        assert_eq!(cache.get(KEY), Some(b"late".to_vec()));

        // The t=6s sweep removes it.
        sleep(Duration::from_millis(1500)).await;
        assert!(cache.get(KEY).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_expired_on_demand() {
        let cache = ExpiringCache::new(Duration::from_secs(10)).unwrap();
        cache.shutdown();
        cache.put(KEY, b"v".to_vec());

        tokio::time::advance(Duration::from_secs(11)).await;

        assert_eq!(cache.sweep_expired(), 1);
        assert!(cache.get(KEY).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_sweep() {
        let cache = ExpiringCache::new(Duration::from_secs(1)).unwrap();
        cache.put(KEY, b"v".to_vec());

        cache.shutdown();
        cache.shutdown();
        sleep(Duration::from_secs(5)).await;

        assert!(!cache.is_sweeping());
        assert_eq!(cache.get(KEY), Some(b"v".to_vec()));
    }

    #[tokio::test]
    async fn test_concurrent_put_get() {
        let cache = ExpiringCache::new(Duration::from_secs(60)).unwrap();

        let mut handles = Vec::new();
        for worker in 0..8u8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..100u8 {
                    let key = format!("worker-{worker}-{i}");
                    cache.put(key.clone(), vec![worker, i]);
                    assert_eq!(cache.get(&key), Some(vec![worker, i]));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len(), 800);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_sweep_races_concurrent_writers() {
        let ttl = Duration::from_millis(10);
        let cache = ExpiringCache::new(ttl).unwrap();
        cache.put("cold", b"never refreshed".to_vec());

        let mut handles = Vec::new();
        for worker in 0..4u8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let key = format!("hot-{worker}");
                // At least 200ms of writes, so about twenty sweeps interleave.
                for i in 0..200u8 {
                    let written = std::time::Instant::now();
                    cache.put(key.clone(), vec![worker, i]);
                    match cache.get(&key) {
                        Some(value) => assert_eq!(value, vec![worker, i]),
                        // Only a sweep can remove it, and only once the TTL has passed.
                        None => assert!(
                            written.elapsed() >= ttl,
                            "refreshed entry lost after {:?}",
                            written.elapsed()
                        ),
                    }
                    sleep(Duration::from_millis(1)).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        sleep(ttl * 3).await;
        assert!(cache.get("cold").is_none(), "sweep should have run meanwhile");
    }

    #[test]
    fn test_parallel_threads() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let cache = runtime.block_on(async { ExpiringCache::new(Duration::from_secs(60)) }).unwrap();

        std::thread::scope(|scope| {
            for worker in 0..4u8 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..50u8 {
                        cache.put(format!("{worker}:{i}"), vec![i]);
                        assert!(cache.get(&format!("{worker}:{i}")).is_some());
                    }
                });
            }
        });

        assert_eq!(cache.len(), 200);
    }
}
