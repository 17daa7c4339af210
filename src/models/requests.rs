//! Request DTOs for the cache gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Maximum number of keys accepted by one batch request
pub const MAX_BATCH_KEYS: usize = 1000;

/// Request body for `PUT /cache/:category/:key`
#[derive(Debug, Clone, Deserialize)]
pub struct SetValueRequest {
    /// Any JSON value
    pub value: Value,
    /// Expiration in seconds, 0 = never
    #[serde(default)]
    pub expiration: u64,
}

/// Request body for `PUT /batch/:category`
#[derive(Debug, Clone, Deserialize)]
pub struct SetMultiRequest {
    /// Key to value map, stored in one batch
    pub values: HashMap<String, Value>,
    /// Expiration in seconds applied to every key, 0 = never
    #[serde(default)]
    pub expiration: u64,
}

impl SetMultiRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.values.len() > MAX_BATCH_KEYS {
            return Some(format!(
                "Batch exceeds maximum of {} keys",
                MAX_BATCH_KEYS
            ));
        }
        if self.values.keys().any(|key| key.is_empty()) {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `POST /batch/:category`
#[derive(Debug, Clone, Deserialize)]
pub struct GetMultiRequest {
    /// Keys to read, reported back in this order when missing
    pub keys: Vec<String>,
}

impl GetMultiRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.keys.len() > MAX_BATCH_KEYS {
            return Some(format!(
                "Batch exceeds maximum of {} keys",
                MAX_BATCH_KEYS
            ));
        }
        if self.keys.iter().any(String::is_empty) {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
