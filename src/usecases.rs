//! Character Use Cases Module
//!
//! Thin pass-through facade over the repository. It adds no behavior; it is
//! the stable contract the presentation layer consumes, and the seam where
//! tests substitute the whole data layer.

use crate::api::CharacterApi;
use crate::error::ApiResult;
use crate::models::{Character, CharacterFilters};
use crate::repository::{CacheSnapshot, CharacterRepository};

// == Character Use Cases ==
#[derive(Debug, Clone)]
pub struct CharacterUseCases<C: CharacterApi> {
    repository: CharacterRepository<C>,
}

impl<C: CharacterApi + Sync> CharacterUseCases<C> {
    pub fn new(repository: CharacterRepository<C>) -> Self {
        Self { repository }
    }

    // == Character Operations ==
    pub async fn get_all_characters(&self) -> ApiResult<Vec<Character>> {
        self.repository.get_all_characters().await
    }

    pub async fn get_characters(&self, page: u32) -> ApiResult<Vec<Character>> {
        self.repository.get_characters(page).await
    }

    pub async fn get_character(&self, id: u32) -> ApiResult<Character> {
        self.repository.get_character(id).await
    }

    pub async fn search_characters(
        &self,
        name: &str,
        filters: &CharacterFilters,
    ) -> ApiResult<Vec<Character>> {
        self.repository.search_characters(name, filters).await
    }

    // == Cache Management ==
    pub async fn clear_cache(&self) {
        self.repository.clear_cache().await;
    }

    pub async fn cache_stats(&self) -> CacheSnapshot {
        self.repository.cache_stats().await
    }
}
