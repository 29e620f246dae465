//! Cache Entry Module
//!
//! Defines the typed cache entry and the on-disk envelope that wraps it.
//!
//! The envelope splits metadata from payload: `expires_at` and `size` are an
//! untyped header, while the value rides as opaque JSON. Expiry scans can
//! decode just the header without knowing the payload's concrete type.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

// == Cache Entry ==
/// A typed cached value with its expiry instant and serialized size.
///
/// Entries are immutable: a re-set of the same key replaces the entry, it is
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The cached payload
    pub value: T,
    /// Absolute instant after which the entry is stale
    pub expires_at: DateTime<Utc>,
    /// Byte length of the serialized payload (0 if sizing failed)
    pub size: usize,
}

impl<T> CacheEntry<T> {
    /// Checks expiry against the current wall clock. Pure, no I/O.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

// == Envelope ==
/// Serialized form of a cache entry, shared by both tiers.
///
/// The payload is type-erased (`serde_json::Value`) so the memory tier can
/// hold entries of any payload type behind one map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Absolute expiry instant (RFC 3339 on disk)
    pub expires_at: DateTime<Utc>,
    /// Byte length of the serialized payload
    pub size: usize,
    /// Opaque payload JSON
    pub value: serde_json::Value,
}

impl Envelope {
    // == Seal ==
    /// Builds an envelope from a serializable value and a resolved expiry.
    ///
    /// The size is the byte length of the serialized payload; if sizing
    /// fails the envelope is still produced with size 0.
    pub(crate) fn seal<T: Serialize>(
        value: &T,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, CacheError> {
        let value = serde_json::to_value(value)?;
        let size = serde_json::to_vec(&value).map(|bytes| bytes.len()).unwrap_or(0);
        Ok(Self {
            expires_at,
            size,
            value,
        })
    }

    // == Open ==
    /// Decodes the payload into a typed [`CacheEntry`].
    pub(crate) fn open<T: DeserializeOwned>(self) -> Result<CacheEntry<T>, CacheError> {
        let value: T = serde_json::from_value(self.value)?;
        Ok(CacheEntry {
            value,
            expires_at: self.expires_at,
            size: self.size,
        })
    }

    /// Checks expiry against the current wall clock.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

// == Envelope Header ==
/// Header-only view of a serialized envelope.
///
/// Deserializing this ignores the payload entirely, which is what lets
/// `clear_expired` scan disk entries of unknown payload types.
#[derive(Debug, Deserialize)]
pub struct EnvelopeHeader {
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub size: usize,
}

impl EnvelopeHeader {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
