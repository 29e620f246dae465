//! Cache Module
//!
//! A generic, typed, expiring two-tier cache: a bounded in-memory LRU tier
//! in front of a file-per-key disk tier.

mod disk;
mod entry;
mod expiry;
mod memory;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use expiry::CacheExpiry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum number of entries held in the memory tier
pub const MEMORY_MAX_ENTRIES: usize = 100;

/// Maximum aggregate payload size held in the memory tier, in bytes
pub const MEMORY_MAX_BYTES: u64 = 50 * 1024 * 1024; // 50 MiB
