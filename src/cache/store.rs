//! Cache Store Module
//!
//! The two-tier cache engine: a bounded in-memory LRU tier in front of a
//! file-per-key disk tier. Reads check memory first and promote disk hits;
//! writes go through both tiers.
//!
//! All operations are serialized through one async mutex. Every filesystem
//! mutation of the cache directory happens while the lock is held, so
//! concurrent callers never observe a half-cleared directory or torn
//! bookkeeping. Callers awaiting the store suspend cooperatively.
//!
//! Failure policy: the cache is an optimization. Read failures degrade to a
//! miss, write failures are logged and swallowed, and no operation here
//! returns an error to the caller.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::disk::DiskTier;
use crate::cache::entry::Envelope;
use crate::cache::expiry::CacheExpiry;
use crate::cache::memory::MemoryTier;
use crate::cache::stats::CacheStats;
use crate::config::Config;

// == Cache Store ==
/// Two-tier expiring key-value cache.
///
/// Cloning is cheap and clones share the same underlying store.
#[derive(Debug, Clone)]
pub struct CacheStore {
    inner: Arc<Mutex<StoreInner>>,
}

/// Mutable store state, confined behind the store mutex.
#[derive(Debug)]
struct StoreInner {
    memory: MemoryTier,
    disk: DiskTier,
    stats: CacheStats,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a store writing to `dir` with the given memory-tier bounds.
    pub fn new(dir: PathBuf, max_entries: usize, max_bytes: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                memory: MemoryTier::new(max_entries, max_bytes),
                disk: DiskTier::new(dir),
                stats: CacheStats::new(),
            })),
        }
    }

    /// Creates a store from client configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cache_dir.clone(),
            config.memory_max_entries,
            config.memory_max_bytes,
        )
    }

    // == Set ==
    /// Stores a value under `key` with the given expiry policy.
    ///
    /// The value is serialized once to compute its byte cost, inserted into
    /// the memory tier, and written through to disk. A disk write failure is
    /// logged and swallowed; the memory entry survives, so the two tiers may
    /// diverge until the next process start.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, expiry: CacheExpiry) {
        let expires_at = expiry.resolve();
        let envelope = match Envelope::seal(value, expires_at) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(key, %err, "cache set skipped: value failed to serialize");
                return;
            }
        };

        let mut inner = self.inner.lock().await;
        for evicted in inner.memory.insert(key.to_string(), envelope.clone()) {
            debug!(key = %evicted, "evicted from memory tier");
            inner.stats.record_eviction();
        }
        if let Err(err) = inner.disk.write(key, &envelope) {
            warn!(key, %err, "cache disk write failed");
        }
        let len = inner.memory.len();
        inner.stats.set_memory_entries(len);
    }

    // == Get ==
    /// Retrieves the value stored under `key`, if present and fresh.
    ///
    /// Memory tier first; a fresh disk hit is promoted into memory. Expired
    /// entries are removed from both tiers on sight. Any I/O or decode
    /// failure degrades to `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut inner = self.inner.lock().await;

        // Memory tier
        if let Some(envelope) = inner.memory.get(key).cloned() {
            if envelope.is_expired() {
                debug!(key, "expired in memory tier, removing from both tiers");
                inner.memory.remove(key);
                if let Err(err) = inner.disk.remove(key) {
                    warn!(key, %err, "failed to remove expired cache file");
                }
                inner.stats.record_miss();
                return None;
            }
            return match envelope.open::<T>() {
                Ok(entry) => {
                    inner.stats.record_hit();
                    Some(entry.value)
                }
                Err(err) => {
                    warn!(key, %err, "cached payload failed to decode");
                    inner.stats.record_miss();
                    None
                }
            };
        }

        // Disk tier
        let envelope = match inner.disk.read(key) {
            Ok(envelope) => envelope,
            Err(_) => {
                inner.stats.record_miss();
                return None;
            }
        };
        if envelope.is_expired() {
            debug!(key, "expired on disk, deleting file");
            if let Err(err) = inner.disk.remove(key) {
                warn!(key, %err, "failed to remove expired cache file");
            }
            inner.stats.record_miss();
            return None;
        }

        match envelope.clone().open::<T>() {
            Ok(entry) => {
                // Promote the fresh disk entry into the memory tier.
                for evicted in inner.memory.insert(key.to_string(), envelope) {
                    inner.stats.record_eviction();
                    debug!(key = %evicted, "evicted from memory tier");
                }
                let len = inner.memory.len();
                inner.stats.set_memory_entries(len);
                inner.stats.record_promotion();
                inner.stats.record_hit();
                Some(entry.value)
            }
            Err(err) => {
                warn!(key, %err, "cached payload failed to decode");
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes `key` from both tiers; idempotent.
    pub async fn remove(&self, key: &str) {
        let mut inner = self.inner.lock().await;
        inner.memory.remove(key);
        if let Err(err) = inner.disk.remove(key) {
            warn!(key, %err, "cache file removal failed");
        }
        let len = inner.memory.len();
        inner.stats.set_memory_entries(len);
    }

    // == Clear ==
    /// Empties the memory tier and deletes + recreates the disk directory.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.memory.clear();
        if let Err(err) = inner.disk.clear() {
            warn!(%err, "cache directory clear failed");
        }
        inner.stats.set_memory_entries(0);
        debug!("cache cleared");
    }

    // == Clear Expired ==
    /// Deletes every disk entry whose header expiry has passed, dropping any
    /// matching memory entries. Files that cannot be decoded are left alone.
    ///
    /// Returns the number of entries removed.
    pub async fn clear_expired(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let expired = inner.disk.expired_keys();
        let count = expired.len();
        for key in expired {
            inner.memory.remove(&key);
            if let Err(err) = inner.disk.remove(&key) {
                warn!(key, %err, "failed to remove expired cache file");
            }
        }
        let len = inner.memory.len();
        inner.stats.set_memory_entries(len);
        count
    }

    // == Exists ==
    /// True if `key` is present in memory or backed by a disk file.
    ///
    /// Expiry-blind by contract: this is a cheap existence probe, not a
    /// freshness check. Callers needing freshness must use `get`.
    pub async fn exists(&self, key: &str) -> bool {
        let inner = self.inner.lock().await;
        inner.memory.contains(key) || inner.disk.exists(key)
    }

    // == Keys ==
    /// Keys currently backed by a disk file. Memory-only entries that failed
    /// to persist are not listed.
    pub async fn keys(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner.disk.keys()
    }

    // == Total Size ==
    /// Sum of on-disk file sizes across all cache files.
    pub async fn total_size(&self) -> u64 {
        let inner = self.inner.lock().await;
        inner.disk.total_size()
    }

    // == Stats ==
    /// Snapshot of the performance counters.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().await;
        let mut stats = inner.stats.clone();
        stats.set_memory_entries(inner.memory.len());
        stats
    }
}
