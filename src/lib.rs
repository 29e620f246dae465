//! rickverse - A cached client for the Rick and Morty REST API
//!
//! Provides list browsing, pagination, search and detail lookups backed by a
//! generic two-tier (memory + disk) expiring cache, so repeated reads avoid
//! the network and survive process restarts.
//!
//! Layering, top down: [`usecases`] → [`repository`] → [`cache`] (fast path)
//! or [`api`] (slow path, populating the cache on success).

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod tasks;
pub mod usecases;

pub use api::{ApiClient, CharacterApi};
pub use cache::{CacheExpiry, CacheStore};
pub use config::Config;
pub use error::{ApiError, ApiResult, RepositoryError};
pub use repository::{CacheSnapshot, CharacterRepository};
pub use tasks::spawn_cleanup_task;
pub use usecases::CharacterUseCases;
