//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Longest wait between sweeps. Longer TTLs are swept at this period; their
/// entries are still kept until the full TTL has elapsed.
pub const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// Spawns a background task that sweeps expired entries every `period`.
///
/// The first sweep fires one full period after the call. Each sweep holds
/// the store lock for the whole scan-and-delete so it cannot interleave with
/// a concurrent put on the same key. The lock is never held while waiting
/// for the next tick.
///
/// The task only keeps a weak reference to the store and exits on its own
/// once every strong owner is gone.
///
/// # Arguments
/// * `runtime` - Runtime the task is spawned on
/// * `store` - Weak reference to the lock-protected store
/// * `period` - Interval between sweeps; must be non-zero, capped at
///   [`MAX_SWEEP_PERIOD`]
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task.
pub fn spawn_sweep_task(
    runtime: &Handle,
    store: Weak<Mutex<CacheStore>>,
    period: Duration,
) -> JoinHandle<()> {
    let period = period.min(MAX_SWEEP_PERIOD);
    let start = Instant::now() + period;

    runtime.spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", period);

        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(shared) = store.upgrade() else {
                debug!("TTL sweep: cache dropped, stopping");
                break;
            };

            let (removed, remaining) = {
                let mut guard = shared.lock();
                let removed = guard.cleanup_expired(Instant::now());
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "TTL sweep: removed expired entries");
            } else {
                debug!(remaining, "TTL sweep: no expired entries found");
            }
        }
    })
}
