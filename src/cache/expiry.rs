//! Cache Expiry Module
//!
//! Translates symbolic durations into absolute expiration instants. A policy
//! is resolved exactly once, at set time, against that moment's "now".

use chrono::{DateTime, TimeZone, Utc};

// == Cache Expiry ==
/// Expiry policy attached to a cache write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheExpiry {
    /// Entry never expires within the process lifetime
    Never,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    /// Entry expires at a fixed instant
    At(DateTime<Utc>),
}

impl CacheExpiry {
    // == Resolve ==
    /// Resolves the policy to an absolute instant relative to `now`.
    ///
    /// Pure and deterministic: equal inputs always produce equal outputs.
    /// `Never` maps to a far-future sentinel.
    pub fn resolve_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            CacheExpiry::Never => far_future(),
            CacheExpiry::Seconds(n) => now + chrono::Duration::seconds(*n as i64),
            CacheExpiry::Minutes(n) => now + chrono::Duration::minutes(*n as i64),
            CacheExpiry::Hours(n) => now + chrono::Duration::hours(*n as i64),
            CacheExpiry::Days(n) => now + chrono::Duration::days(*n as i64),
            CacheExpiry::At(instant) => *instant,
        }
    }

    /// Resolves the policy against the current wall clock.
    pub fn resolve(&self) -> DateTime<Utc> {
        self.resolve_from(Utc::now())
    }
}

/// Sentinel instant for `CacheExpiry::Never`.
fn far_future() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()
}
