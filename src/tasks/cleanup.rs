//! Expiry Cleanup Task
//!
//! Optional background task that periodically sweeps expired entries out of
//! the cache. The store already removes expired entries lazily on read; the
//! sweep reclaims disk space for keys that are never read again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically calls `clear_expired`.
///
/// The task loops forever, sleeping for `interval` between sweeps. Abort the
/// returned handle during shutdown.
pub fn spawn_cleanup_task(store: CacheStore, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting cache cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.clear_expired().await;
            if removed > 0 {
                info!(removed, "cleanup removed expired cache entries");
            } else {
                debug!("cleanup found no expired entries");
            }
        }
    })
}
