//! Response DTOs for the cache gateway API
//!
//! Defines the structure of outgoing HTTP response bodies. Batch reads answer
//! with [`crate::manager::BatchResult`] directly.

use serde::Serialize;
use serde_json::Value;

/// Response body for `GET /cache/:category/:key`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub category: String,
    pub key: String,
    /// The decoded value
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(category: impl Into<String>, key: impl Into<String>, value: Value) -> Self {
        Self {
            category: category.into(),
            key: key.into(),
            value,
        }
    }
}

/// Response body for single and batch writes
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub category: String,
    /// Number of keys in the write
    pub count: usize,
    /// Whether the store accepted the write
    pub stored: bool,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(category: impl Into<String>, count: usize, stored: bool) -> Self {
        Self {
            category: category.into(),
            count,
            stored,
        }
    }
}

/// Response body for `DELETE /cache/:category/:key`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub category: String,
    pub key: String,
    /// Whether the store acknowledged the delete (not whether the key existed)
    pub deleted: bool,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(category: impl Into<String>, key: impl Into<String>, deleted: bool) -> Self {
        Self {
            category: category.into(),
            key: key.into(),
            deleted,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (always "healthy" while the process serves requests)
    pub status: String,
    /// Whether a cache backend is connected
    pub cache_enabled: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cache_enabled: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            cache_enabled,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
