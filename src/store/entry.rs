//! Stored Entry Module
//!
//! A single value held by the memory backend, with its optional deadline.

use std::time::Duration;

use tokio::time::Instant;

// == Stored Entry ==
/// Raw value plus expiration deadline.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored string
    pub value: String,
    /// Deadline after which the entry is gone, None = no expiration
    pub expires_at: Option<Instant>,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl_seconds` from now, if given.
    ///
    /// A deadline past what the clock can represent is treated as no deadline.
    pub fn new(value: String, ttl_seconds: Option<u64>) -> Self {
        let expires_at =
            ttl_seconds.and_then(|ttl| Instant::now().checked_add(Duration::from_secs(ttl)));
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// An entry is expired once the clock reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}
