//! Error types for the catalog client
//!
//! Provides unified error handling using thiserror. Network errors carry a
//! user-facing description and a recovery suggestion; cache errors stay
//! internal to the cache layer and are never surfaced to callers.

use thiserror::Error;

// == API Error Enum ==
/// Errors produced by the network layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request URL could not be constructed
    #[error("Invalid URL")]
    InvalidUrl,

    /// The server response could not be interpreted as an HTTP response
    #[error("Invalid response from server")]
    InvalidResponse,

    /// Generic HTTP error status outside the dedicated variants
    #[error("HTTP error: {0}")]
    Http(u16),

    /// The response body could not be decoded
    #[error("Error decoding data: {0}")]
    Decoding(String),

    /// Transport-level failure (DNS, connection reset, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded its timeout
    #[error("Request timed out")]
    Timeout,

    /// 401 Unauthorized
    #[error("Unauthorized")]
    Unauthorized,

    /// 404 Not Found
    #[error("Resource not found")]
    NotFound,

    /// Any 5xx status
    #[error("Server error")]
    ServerError,

    /// Anything that does not fit the other variants
    #[error("Unknown error")]
    Unknown,
}

impl ApiError {
    // == From Status Code ==
    /// Maps an HTTP status code to the matching error variant.
    ///
    /// 401 and 404 get dedicated variants, other 4xx become `Http`,
    /// and all 5xx collapse into `ServerError`.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            400..=499 => ApiError::Http(status),
            500..=599 => ApiError::ServerError,
            _ => ApiError::Http(status),
        }
    }

    // == Recovery Suggestion ==
    /// A user-facing hint about how to recover from this error.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::Network(_) | ApiError::Timeout => {
                "Check your internet connection and try again"
            }
            ApiError::Unauthorized => "Please sign in again",
            ApiError::NotFound => "The requested resource does not exist",
            ApiError::ServerError => "The server is having problems. Try again later",
            _ => "Try again in a few moments",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decoding(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

// == Repository Error Enum ==
/// Normalized error surface for presentation-layer consumers.
///
/// The repository and use cases propagate [`ApiError`] unchanged; this
/// closed set exists for callers that want to collapse the full taxonomy
/// into a handful of user-visible categories.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("The requested resource was not found.")]
    NotFound,

    #[error("Network connection error. Please check your internet.")]
    Network,

    #[error("The data received is invalid.")]
    InvalidData,

    #[error("Error accessing cached data.")]
    Cache,
}

impl From<ApiError> for RepositoryError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => RepositoryError::NotFound,
            ApiError::Decoding(_) | ApiError::InvalidResponse => RepositoryError::InvalidData,
            _ => RepositoryError::Network,
        }
    }
}

// == Cache Error Enum ==
/// Internal cache-layer failures.
///
/// These never cross the cache store's public API: read failures degrade to
/// a miss and write failures are logged and swallowed.
#[derive(Error, Debug)]
pub(crate) enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for network-facing operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
