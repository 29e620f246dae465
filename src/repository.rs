//! Character Repository Module
//!
//! Orchestrates cache-first reads with network fallback. Each cacheable
//! operation has a deterministic key and its own expiry policy, reflecting
//! how often the underlying data changes: single characters barely change,
//! paged listings are refreshed more eagerly.
//!
//! Searches are never cached (the query space is unbounded); they filter the
//! full collection in memory instead.

use tracing::{debug, info};

use crate::api::CharacterApi;
use crate::cache::{CacheExpiry, CacheStore};
use crate::error::ApiResult;
use crate::models::{Character, CharacterFilters};

// == Cache Keys & Policies ==
/// Key for the full collection, refreshed every 6 hours.
const ALL_CHARACTERS_KEY: &str = "all_characters";
const ALL_CHARACTERS_EXPIRY: CacheExpiry = CacheExpiry::Hours(6);

/// Paged listings are the most volatile cached shape: 2 hours.
const PAGE_EXPIRY: CacheExpiry = CacheExpiry::Hours(2);

/// Single characters change least: 1 day.
const CHARACTER_EXPIRY: CacheExpiry = CacheExpiry::Days(1);

fn page_key(page: u32) -> String {
    format!("characters_page_{}", page)
}

fn character_key(id: u32) -> String {
    format!("character_{}", id)
}

// == Cache Snapshot ==
/// Read-only snapshot of the cache contents, not a live view.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    /// Keys currently backed by a disk file
    pub keys: Vec<String>,
    /// Sum of on-disk file sizes in bytes
    pub total_bytes: u64,
}

// == Character Repository ==
/// Cache-backed access to the character catalog.
///
/// The cache store is never held locked across a network round-trip: a miss
/// releases the store, fetches, then writes back. Two concurrent misses on
/// the same key may therefore both fetch; the last write wins.
#[derive(Debug, Clone)]
pub struct CharacterRepository<C: CharacterApi> {
    client: C,
    cache: CacheStore,
}

impl<C: CharacterApi + Sync> CharacterRepository<C> {
    // == Constructor ==
    pub fn new(client: C, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    // == Get All Characters ==
    /// Full collection: cache first, then a page-walking network fetch.
    pub async fn get_all_characters(&self) -> ApiResult<Vec<Character>> {
        if let Some(cached) = self.cache.get::<Vec<Character>>(ALL_CHARACTERS_KEY).await {
            debug!(count = cached.len(), "loaded characters from cache");
            return Ok(cached);
        }

        info!("loading all characters from network");
        let characters = self.client.fetch_all_characters().await?;
        self.cache
            .set(ALL_CHARACTERS_KEY, &characters, ALL_CHARACTERS_EXPIRY)
            .await;

        Ok(characters)
    }

    // == Get Characters Page ==
    /// One listing page: cache first, then network.
    pub async fn get_characters(&self, page: u32) -> ApiResult<Vec<Character>> {
        let key = page_key(page);
        if let Some(cached) = self.cache.get::<Vec<Character>>(&key).await {
            debug!(page, count = cached.len(), "loaded page from cache");
            return Ok(cached);
        }

        info!(page, "loading page from network");
        let response = self
            .client
            .fetch_characters(page, &CharacterFilters::default())
            .await?;
        self.cache.set(&key, &response.results, PAGE_EXPIRY).await;

        Ok(response.results)
    }

    // == Get Character ==
    /// Single character by id: cache first, then network.
    pub async fn get_character(&self, id: u32) -> ApiResult<Character> {
        let key = character_key(id);
        if let Some(cached) = self.cache.get::<Character>(&key).await {
            debug!(id, "loaded character from cache");
            return Ok(cached);
        }

        info!(id, "loading character from network");
        let character = self.client.fetch_character(id).await?;
        self.cache.set(&key, &character, CHARACTER_EXPIRY).await;

        Ok(character)
    }

    // == Search Characters ==
    /// Filters the full collection in memory; results are never cached.
    ///
    /// Predicates are AND-combined: case-insensitive substring on name
    /// (empty matches all), case-insensitive equality on status and gender
    /// (absent matches all), case-insensitive substring on species (absent
    /// or empty matches all).
    pub async fn search_characters(
        &self,
        name: &str,
        filters: &CharacterFilters,
    ) -> ApiResult<Vec<Character>> {
        let candidates = self.get_all_characters().await?;
        let name_query = name.to_lowercase();

        Ok(candidates
            .into_iter()
            .filter(|character| {
                let matches_name =
                    name_query.is_empty() || character.name.to_lowercase().contains(&name_query);
                let matches_status = filters.status.map_or(true, |status| {
                    character.status.eq_ignore_ascii_case(status.as_str())
                });
                let matches_gender = filters.gender.map_or(true, |gender| {
                    character.gender.eq_ignore_ascii_case(gender.as_str())
                });
                let matches_species = filters.species.as_ref().map_or(true, |species| {
                    species.is_empty()
                        || character
                            .species
                            .to_lowercase()
                            .contains(&species.to_lowercase())
                });

                matches_name && matches_status && matches_gender && matches_species
            })
            .collect())
    }

    // == Cache Management ==
    /// Drops everything from both cache tiers.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Snapshot of cached keys and total on-disk size.
    pub async fn cache_stats(&self) -> CacheSnapshot {
        CacheSnapshot {
            keys: self.cache.keys().await,
            total_bytes: self.cache.total_size().await,
        }
    }
}
