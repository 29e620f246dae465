//! Configuration Module
//!
//! Holds client and cache configuration with sensible defaults. The only
//! environment override is the API base URL; everything else is set through
//! the struct or left at its default.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::cache::{MEMORY_MAX_BYTES, MEMORY_MAX_ENTRIES};

/// Default API base URL for the public catalog.
const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Default network request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog API
    pub api_base_url: String,
    /// Timeout applied to every network request
    pub request_timeout: Duration,
    /// Directory holding the on-disk cache files
    pub cache_dir: PathBuf,
    /// Maximum number of entries held in the memory tier
    pub memory_max_entries: usize,
    /// Maximum aggregate payload size held in the memory tier, in bytes
    pub memory_max_bytes: u64,
}

impl Config {
    /// Creates a Config from the environment.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Overrides the catalog API base URL
    ///
    /// All other fields take their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("API_BASE_URL") {
            config.api_base_url = url;
        }
        config
    }

    /// Returns a copy of this config pointing the disk tier at `dir`.
    ///
    /// Useful for tests that need a hermetic cache directory.
    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = dir;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_dir: default_cache_dir(),
            memory_max_entries: MEMORY_MAX_ENTRIES,
            memory_max_bytes: MEMORY_MAX_BYTES,
        }
    }
}

/// Platform cache directory (`~/.cache/rickverse` on Linux), falling back to
/// a path under the system temp directory when no home directory exists.
fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "rickverse")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join("rickverse-cache"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.memory_max_entries, 100);
        assert_eq!(config.memory_max_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_config_base_url_override() {
        env::set_var("API_BASE_URL", "http://localhost:9999/api");
        let config = Config::from_env();
        env::remove_var("API_BASE_URL");

        assert_eq!(config.api_base_url, "http://localhost:9999/api");
    }

    #[test]
    fn test_config_with_cache_dir() {
        let config = Config::default().with_cache_dir(PathBuf::from("/tmp/some-cache"));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/some-cache"));
    }
}
