//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the facade, its store backends and the HTTP gateway.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not present in the store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Category cannot be turned into an unambiguous namespace
    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),

    /// Store was never connected, or has been disconnected
    #[error("Store is not connected")]
    NotConnected,

    /// Caching is switched off by configuration
    #[error("Cache is disabled")]
    Disabled,

    /// URL scheme does not name a known backend
    #[error("Unsupported cache backend: {0}")]
    UnsupportedBackend(String),

    /// Redis client failure
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) | CacheError::InvalidCategory(_) => {
                StatusCode::BAD_REQUEST
            }
            CacheError::NotConnected | CacheError::Disabled => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::UnsupportedBackend(_) | CacheError::Redis(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
