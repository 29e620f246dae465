//! Disk Tier Module
//!
//! Persistent cache tier: one regular file per key inside a dedicated cache
//! directory, file content = the serialized envelope. The filename is the
//! cache key verbatim; callers keep keys filesystem-safe.
//!
//! This tier reports failures as [`CacheError`] and leaves the swallow-or-
//! propagate decision to the store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::entry::{Envelope, EnvelopeHeader};
use crate::error::CacheError;

// == Disk Tier ==
/// File-per-key persistent store for cache envelopes.
#[derive(Debug, Clone)]
pub struct DiskTier {
    /// Directory where cache files are stored; created lazily
    dir: PathBuf,
}

impl DiskTier {
    // == Constructor ==
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`.
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Creates the cache directory if it does not exist yet.
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    // == Write ==
    /// Serializes and writes an envelope to the key's file.
    pub fn write(&self, key: &str, envelope: &Envelope) -> Result<(), CacheError> {
        self.ensure_dir()?;
        let json = serde_json::to_vec(envelope)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    // == Read ==
    /// Reads and decodes the envelope stored under `key`.
    pub fn read(&self, key: &str) -> Result<Envelope, CacheError> {
        let bytes = fs::read(self.path_for(key))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Remove ==
    /// Deletes the key's file; absent files are not an error.
    pub fn remove(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    // == Clear ==
    /// Deletes the whole cache directory and recreates it empty.
    pub fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.ensure_dir()?;
        Ok(())
    }

    // == Exists ==
    /// True if a file backs `key`, irrespective of expiry.
    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    // == Keys ==
    /// Keys currently backed by a disk file (directory listing).
    ///
    /// Returns an empty list if the directory cannot be read, e.g. before
    /// the first write.
    pub fn keys(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        entries
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    // == Total Size ==
    /// Sum of on-disk file sizes across all cache files.
    pub fn total_size(&self) -> u64 {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return 0;
        };
        entries
            .flatten()
            .filter_map(|entry| entry.metadata().ok())
            .filter(|meta| meta.is_file())
            .map(|meta| meta.len())
            .sum()
    }

    // == Expired Keys ==
    /// Keys whose stored envelope header has an expiry in the past.
    ///
    /// Files that fail header decode are skipped: an unreadable entry is
    /// ambiguous, and ambiguity is not grounds for deletion.
    pub fn expired_keys(&self) -> Vec<String> {
        self.keys()
            .into_iter()
            .filter(|key| match self.read_header(key) {
                Ok(header) => header.is_expired(),
                Err(_) => false,
            })
            .collect()
    }

    /// Decodes only the envelope header of the key's file.
    fn read_header(&self, key: &str) -> Result<EnvelopeHeader, CacheError> {
        let bytes = fs::read(self.path_for(key))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The directory this tier writes into.
    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
