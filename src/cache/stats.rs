//! Cache Statistics Module
//!
//! Tracks cache performance metrics: hits, misses, LRU evictions, and
//! disk-to-memory promotions.

use serde::Serialize;

// == Cache Stats ==
/// Cache performance counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Successful retrievals (either tier)
    pub hits: u64,
    /// Failed retrievals (absent or expired)
    pub misses: u64,
    /// Entries evicted from the memory tier by the LRU policy
    pub evictions: u64,
    /// Disk entries promoted into the memory tier on read
    pub promotions: u64,
    /// Current number of entries in the memory tier
    pub memory_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before any request.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    pub fn set_memory_entries(&mut self, count: usize) {
        self.memory_entries = count;
    }
}
