//! Store Module
//!
//! Raw key-value capability consumed by the cache facade, plus its backends.
//!
//! Keys and values crossing this boundary are plain strings; namespacing and
//! value typing happen in the facade.

mod entry;
mod memory;
mod redis_store;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

pub use entry::StoredEntry;
pub use memory::{MemoryStore, MemoryTable};
pub use redis_store::RedisStore;

// == Raw Batch ==
/// Outcome of a batch read against the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBatch {
    /// Keys that had a value
    pub found: HashMap<String, String>,
    /// Keys without a value, in request order
    pub missing: Vec<String>,
}

impl RawBatch {
    /// Pairs requested keys with positional replies.
    ///
    /// Keys beyond the end of `values` count as missing.
    pub fn from_replies(keys: &[String], values: Vec<Option<String>>) -> Self {
        let mut batch = Self::default();
        let mut values = values.into_iter();

        for key in keys {
            match values.next().flatten() {
                Some(value) => {
                    batch.found.insert(key.clone(), value);
                }
                None => batch.missing.push(key.clone()),
            }
        }

        batch
    }

    /// A batch in which every key is missing.
    pub fn all_missing(keys: &[String]) -> Self {
        Self {
            found: HashMap::new(),
            missing: keys.to_vec(),
        }
    }
}

// == Store Client ==
/// Minimal capability a backend offers to the facade.
///
/// `ttl` is a number of seconds; `None` stores without expiration.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Opens the connection to the backend.
    async fn connect(&self) -> Result<()>;

    /// Releases the connection. Later calls fail with `NotConnected`.
    async fn disconnect(&self);

    /// Reads one key.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes one key.
    async fn set(&self, key: &str, value: String, ttl: Option<u64>) -> Result<()>;

    /// Deletes one key. Succeeds whether or not the key existed.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Writes every entry, with expiration, as one atomic unit.
    async fn set_multi(&self, entries: Vec<(String, String)>, ttl: Option<u64>) -> Result<()>;

    /// Reads many keys at once.
    async fn get_multi(&self, keys: &[String]) -> Result<RawBatch>;
}
