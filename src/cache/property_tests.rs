//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the memory tier's bound invariants, the envelope
//! codec round-trip, and expiry policy resolution.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use crate::cache::entry::{CacheEntry, Envelope};
use crate::cache::expiry::CacheExpiry;
use crate::cache::memory::MemoryTier;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 8;
const TEST_MAX_BYTES: u64 = 4096;

// == Strategies ==
/// Generates filesystem-safe cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,32}"
}

/// Generates payload strings of varying length
fn payload_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

/// Generates a sequence of memory-tier operations
#[derive(Debug, Clone)]
enum TierOp {
    Insert { key: String, payload: String },
    Get { key: String },
    Remove { key: String },
}

fn tier_op_strategy() -> impl Strategy<Value = TierOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| TierOp::Insert { key, payload }),
        key_strategy().prop_map(|key| TierOp::Get { key }),
        key_strategy().prop_map(|key| TierOp::Remove { key }),
    ]
}

fn envelope_for(payload: &str) -> Envelope {
    Envelope::seal(&payload, Utc::now() + chrono::Duration::hours(1)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any serializable value, sealing into an envelope and opening it
    // again yields an equal value with the same expiry instant.
    #[test]
    fn prop_envelope_roundtrip(payload in payload_strategy()) {
        let expires_at = Utc::now() + chrono::Duration::hours(1);
        let envelope = Envelope::seal(&payload, expires_at).unwrap();

        let entry: CacheEntry<String> = envelope.open().unwrap();
        prop_assert_eq!(entry.value, payload);
        prop_assert_eq!(entry.expires_at, expires_at);
    }

    // The serialized envelope survives the disk codec (JSON bytes) intact.
    #[test]
    fn prop_envelope_survives_disk_codec(payload in payload_strategy()) {
        let envelope = envelope_for(&payload);
        let bytes = serde_json::to_vec(&envelope).unwrap();
        let decoded: Envelope = serde_json::from_slice(&bytes).unwrap();

        let entry: CacheEntry<String> = decoded.open().unwrap();
        prop_assert_eq!(entry.value, payload);
    }

    // For any operation sequence, the memory tier never exceeds its count
    // bound or its byte bound, and its cost accounting matches the sum of
    // the stored entry sizes.
    #[test]
    fn prop_memory_tier_bounds_hold(ops in prop::collection::vec(tier_op_strategy(), 1..60)) {
        let mut tier = MemoryTier::new(TEST_MAX_ENTRIES, TEST_MAX_BYTES);

        for op in ops {
            match op {
                TierOp::Insert { key, payload } => {
                    tier.insert(key, envelope_for(&payload));
                }
                TierOp::Get { key } => {
                    let _ = tier.get(&key);
                }
                TierOp::Remove { key } => {
                    let _ = tier.remove(&key);
                }
            }

            prop_assert!(tier.len() <= TEST_MAX_ENTRIES, "count bound violated");
            prop_assert!(tier.total_bytes() <= TEST_MAX_BYTES, "byte bound violated");
        }
    }

    // Inserting then immediately reading returns the inserted payload
    // (fresh entries are never evicted by their own insert here because a
    // single payload fits the bounds).
    #[test]
    fn prop_memory_tier_insert_get(key in key_strategy(), payload in "[a-z]{1,64}") {
        let mut tier = MemoryTier::new(TEST_MAX_ENTRIES, TEST_MAX_BYTES);
        tier.insert(key.clone(), envelope_for(&payload));

        let stored = tier.get(&key);
        prop_assert!(stored.is_some());
        let entry: CacheEntry<String> = stored.unwrap().clone().open().unwrap();
        prop_assert_eq!(entry.value, payload);
    }

    // Expiry resolution is deterministic and ordered: longer symbolic
    // durations never resolve earlier than shorter ones.
    #[test]
    fn prop_expiry_resolution_ordered(secs in 0u64..86_400) {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        let shorter = CacheExpiry::Seconds(secs).resolve_from(now);
        let longer = CacheExpiry::Seconds(secs + 1).resolve_from(now);
        prop_assert!(shorter < longer);
        prop_assert_eq!(shorter, CacheExpiry::Seconds(secs).resolve_from(now));

        // Never outlasts any finite duration.
        prop_assert!(CacheExpiry::Never.resolve_from(now) > longer);
    }

    // Equivalent symbolic durations resolve to the same instant.
    #[test]
    fn prop_expiry_unit_equivalence(n in 1u64..48) {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        prop_assert_eq!(
            CacheExpiry::Minutes(n).resolve_from(now),
            CacheExpiry::Seconds(n * 60).resolve_from(now)
        );
        prop_assert_eq!(
            CacheExpiry::Hours(n).resolve_from(now),
            CacheExpiry::Minutes(n * 60).resolve_from(now)
        );
        prop_assert_eq!(
            CacheExpiry::Days(n).resolve_from(now),
            CacheExpiry::Hours(n * 24).resolve_from(now)
        );
    }
}
