//! API Client Module
//!
//! reqwest-backed client for the character catalog endpoints, plus the
//! `CharacterApi` trait that lets the repository swap the network for a test
//! double.
//!
//! Collection responses arrive as `{ info: {...}, results: [...] }`
//! envelopes; single-item responses are bare objects.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{Character, CharacterFilters, CharacterPage};

// == Character API Trait ==
/// Network operations the repository depends on.
pub trait CharacterApi {
    /// Fetches one page of the character collection, optionally filtered
    /// server-side.
    fn fetch_characters(
        &self,
        page: u32,
        filters: &CharacterFilters,
    ) -> impl std::future::Future<Output = ApiResult<CharacterPage>> + Send;

    /// Fetches a single character by id.
    fn fetch_character(
        &self,
        id: u32,
    ) -> impl std::future::Future<Output = ApiResult<Character>> + Send;

    /// Fetches the entire collection by walking pages until `info.next`
    /// runs out.
    fn fetch_all_characters(
        &self,
    ) -> impl std::future::Future<Output = ApiResult<Vec<Character>>> + Send
    where
        Self: Sync,
    {
        async {
            let filters = CharacterFilters::default();
            let mut characters = Vec::new();
            let mut page = 1;
            loop {
                let response = self.fetch_characters(page, &filters).await?;
                characters.extend(response.results);
                if response.info.next.is_none() || page >= response.info.pages {
                    break;
                }
                page += 1;
            }
            Ok(characters)
        }
    }
}

// == API Client ==
/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    // == Constructor ==
    /// Builds a client from configuration. The configured timeout applies
    /// to every request and surfaces as [`ApiError::Timeout`].
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    // == Request ==
    /// Issues a GET and decodes the JSON body, mapping non-2xx statuses
    /// through [`ApiError::from_status`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(ApiError::from_status(status));
        }

        response.json::<T>().await.map_err(|err| {
            if err.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Decoding(err.to_string())
            }
        })
    }
}

impl CharacterApi for ApiClient {
    async fn fetch_characters(
        &self,
        page: u32,
        filters: &CharacterFilters,
    ) -> ApiResult<CharacterPage> {
        let mut query = vec![("page", page.to_string())];
        query.extend(filters.query_params());
        self.get_json(format!("{}/character", self.base_url), &query)
            .await
    }

    async fn fetch_character(&self, id: u32) -> ApiResult<Character> {
        self.get_json(format!("{}/character/{}", self.base_url, id), &[])
            .await
    }
}
