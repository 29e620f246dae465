//! Memory Tier Module
//!
//! A bounded in-memory map of cache envelopes with least-recently-used
//! eviction. Bounded on two axes: entry count and aggregate payload bytes
//! (the envelope's recorded size is the cost). Exceeding either bound evicts
//! from the back of the access order until both hold again.
//!
//! Eviction removes entries from memory only; the disk tier is untouched.

use std::collections::{HashMap, VecDeque};

use crate::cache::entry::Envelope;

// == Memory Tier ==
/// Count- and byte-bounded LRU map from cache key to envelope.
///
/// Access order lives in a VecDeque: front = most recently used,
/// back = least recently used.
#[derive(Debug)]
pub struct MemoryTier {
    /// Key-value storage
    entries: HashMap<String, Envelope>,
    /// Access order, most recent first
    order: VecDeque<String>,
    /// Aggregate cost of stored envelopes in bytes
    total_bytes: u64,
    /// Maximum number of entries
    max_entries: usize,
    /// Maximum aggregate cost in bytes
    max_bytes: u64,
}

impl MemoryTier {
    // == Constructor ==
    pub fn new(max_entries: usize, max_bytes: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            total_bytes: 0,
            max_entries,
            max_bytes,
        }
    }

    // == Insert ==
    /// Inserts or replaces an envelope, then evicts least-recently-used
    /// entries until both bounds hold.
    ///
    /// Returns the keys evicted to make room.
    pub fn insert(&mut self, key: String, envelope: Envelope) -> Vec<String> {
        let cost = envelope.size as u64;
        if let Some(previous) = self.entries.insert(key.clone(), envelope) {
            self.total_bytes -= previous.size as u64;
        }
        self.total_bytes += cost;
        self.touch(&key);

        let mut evicted = Vec::new();
        while self.entries.len() > self.max_entries || self.total_bytes > self.max_bytes {
            match self.order.pop_back() {
                Some(oldest) => {
                    if let Some(removed) = self.entries.remove(&oldest) {
                        self.total_bytes -= removed.size as u64;
                    }
                    evicted.push(oldest);
                }
                None => break,
            }
        }
        evicted
    }

    // == Get ==
    /// Returns the envelope for `key`, marking it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&Envelope> {
        if self.entries.contains_key(key) {
            self.touch(key);
            self.entries.get(key)
        } else {
            None
        }
    }

    // == Remove ==
    /// Removes an entry; idempotent.
    pub fn remove(&mut self, key: &str) -> Option<Envelope> {
        self.order.retain(|k| k != key);
        let removed = self.entries.remove(key);
        if let Some(envelope) = &removed {
            self.total_bytes -= envelope.size as u64;
        }
        removed
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.total_bytes = 0;
    }

    // == Contains ==
    /// Presence check; does not disturb the access order.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate cost of stored envelopes in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Moves `key` to the front of the access order.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn envelope_with_size(size: usize) -> Envelope {
        Envelope {
            expires_at: Utc::now() + chrono::Duration::hours(1),
            size,
            value: serde_json::Value::String("x".to_string()),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut tier = MemoryTier::new(10, 1024);

        tier.insert("key1".to_string(), envelope_with_size(16));
        assert!(tier.contains("key1"));
        assert!(tier.get("key1").is_some());
        assert_eq!(tier.len(), 1);
        assert_eq!(tier.total_bytes(), 16);
    }

    #[test]
    fn test_replace_updates_cost() {
        let mut tier = MemoryTier::new(10, 1024);

        tier.insert("key1".to_string(), envelope_with_size(100));
        tier.insert("key1".to_string(), envelope_with_size(30));

        assert_eq!(tier.len(), 1);
        assert_eq!(tier.total_bytes(), 30);
    }

    #[test]
    fn test_count_bound_evicts_oldest() {
        let mut tier = MemoryTier::new(3, 1024 * 1024);

        tier.insert("key1".to_string(), envelope_with_size(1));
        tier.insert("key2".to_string(), envelope_with_size(1));
        tier.insert("key3".to_string(), envelope_with_size(1));
        let evicted = tier.insert("key4".to_string(), envelope_with_size(1));

        assert_eq!(evicted, vec!["key1".to_string()]);
        assert_eq!(tier.len(), 3);
        assert!(!tier.contains("key1"));
        assert!(tier.contains("key4"));
    }

    #[test]
    fn test_get_refreshes_access_order() {
        let mut tier = MemoryTier::new(3, 1024 * 1024);

        tier.insert("key1".to_string(), envelope_with_size(1));
        tier.insert("key2".to_string(), envelope_with_size(1));
        tier.insert("key3".to_string(), envelope_with_size(1));

        // key1 becomes most recently used, so key2 is now the LRU victim.
        tier.get("key1");
        let evicted = tier.insert("key4".to_string(), envelope_with_size(1));

        assert_eq!(evicted, vec!["key2".to_string()]);
        assert!(tier.contains("key1"));
    }

    #[test]
    fn test_byte_bound_evicts_until_within_budget() {
        let mut tier = MemoryTier::new(100, 100);

        tier.insert("key1".to_string(), envelope_with_size(40));
        tier.insert("key2".to_string(), envelope_with_size(40));
        let evicted = tier.insert("key3".to_string(), envelope_with_size(40));

        // 120 bytes > 100, key1 is oldest
        assert_eq!(evicted, vec!["key1".to_string()]);
        assert_eq!(tier.total_bytes(), 80);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut tier = MemoryTier::new(10, 1024);

        tier.insert("key1".to_string(), envelope_with_size(8));
        assert!(tier.remove("key1").is_some());
        assert!(tier.remove("key1").is_none());
        assert_eq!(tier.total_bytes(), 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tier = MemoryTier::new(10, 1024);

        tier.insert("key1".to_string(), envelope_with_size(8));
        tier.insert("key2".to_string(), envelope_with_size(8));
        tier.clear();

        assert!(tier.is_empty());
        assert_eq!(tier.total_bytes(), 0);
        assert!(!tier.contains("key1"));
    }
}
