//! Cache Manager Module
//!
//! Category-scoped facade over a [`StoreClient`]: builds namespaced keys, encodes
//! values, and reconciles batch reads. Store failures never escape; they are logged
//! and turned into defaults, `false`, or all-missing batches.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::codec::ValueMode;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::namespace::{build_key, strip_key};
use crate::store::{MemoryStore, RedisStore, StoreClient};

// == Batch Result ==
/// Outcome of [`CacheManager::get_multi`], keyed by the caller's own keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    /// Keys that had a value
    pub found: HashMap<String, Value>,
    /// Keys without a value, in the order they were requested
    pub missing: Vec<String>,
}

// == Cache Manager ==
/// Category-namespaced cache over one shared store connection.
#[derive(Clone)]
pub struct CacheManager {
    store: Arc<dyn StoreClient>,
    value_mode: ValueMode,
}

impl CacheManager {
    // == Constructor ==
    /// Wraps an already connected store.
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self {
            store,
            value_mode: ValueMode::default(),
        }
    }

    /// Switches how stored strings are read back.
    pub fn with_value_mode(mut self, value_mode: ValueMode) -> Self {
        self.value_mode = value_mode;
        self
    }

    pub fn value_mode(&self) -> ValueMode {
        self.value_mode
    }

    // == Get ==
    /// Reads `key` from `category`.
    ///
    /// Returns None when the key is absent or the store cannot be reached.
    pub async fn get(&self, category: &str, key: &str) -> Option<Value> {
        let namespaced = self.key_or_warn(category, key)?;

        match self.store.get(&namespaced).await {
            Ok(raw) => raw.map(|raw| self.value_mode.decode(raw)),
            Err(err) => {
                warn!(key = %namespaced, error = %err, "Cache get failed");
                None
            }
        }
    }

    /// Reads `key` from `category`, falling back to `default`.
    pub async fn get_or(&self, category: &str, key: &str, default: Value) -> Value {
        self.get(category, key).await.unwrap_or(default)
    }

    // == Set ==
    /// Stores `value` under `key` in `category`.
    ///
    /// `expiration_secs == 0` stores without expiration. Returns false when the
    /// store rejects the write or is unavailable.
    pub async fn set(&self, category: &str, key: &str, value: &Value, expiration_secs: u64) -> bool {
        let Some(namespaced) = self.key_or_warn(category, key) else {
            return false;
        };
        let raw = self.value_mode.encode(value);

        match self
            .store
            .set(&namespaced, raw, ttl_from(expiration_secs))
            .await
        {
            Ok(()) => true,
            Err(err) => {
                warn!(key = %namespaced, error = %err, "Cache set failed");
                false
            }
        }
    }

    // == Delete ==
    /// Deletes `key` from `category`.
    ///
    /// True means the store acknowledged the command, not that the key existed.
    pub async fn del(&self, category: &str, key: &str) -> bool {
        let Some(namespaced) = self.key_or_warn(category, key) else {
            return false;
        };

        match self.store.delete(&namespaced).await {
            Ok(()) => true,
            Err(err) => {
                warn!(key = %namespaced, error = %err, "Cache delete failed");
                false
            }
        }
    }

    // == Set Multi ==
    /// Stores every pair of `key_values` in `category` with one batch write.
    ///
    /// The expiration, if any, is applied atomically with the values. An empty
    /// map succeeds without contacting the store.
    pub async fn set_multi(
        &self,
        category: &str,
        key_values: &HashMap<String, Value>,
        expiration_secs: u64,
    ) -> bool {
        if key_values.is_empty() {
            return true;
        }
        let mut entries = Vec::with_capacity(key_values.len());
        for (key, value) in key_values {
            match build_key(category, key) {
                Ok(namespaced) => entries.push((namespaced, self.value_mode.encode(value))),
                Err(err) => {
                    warn!(error = %err, "Cache set_multi rejected");
                    return false;
                }
            }
        }

        match self
            .store
            .set_multi(entries, ttl_from(expiration_secs))
            .await
        {
            Ok(()) => true,
            Err(err) => {
                warn!(category, count = key_values.len(), error = %err, "Cache set_multi failed");
                false
            }
        }
    }

    // == Get Multi ==
    /// Reads `keys` from `category` with one batch read.
    ///
    /// When the store is unavailable every key is reported missing, in input order.
    pub async fn get_multi(&self, category: &str, keys: &[String]) -> BatchResult {
        let all_missing = || BatchResult {
            found: HashMap::new(),
            missing: keys.to_vec(),
        };

        let namespaced: Vec<String> = match keys
            .iter()
            .map(|key| build_key(category, key))
            .collect::<Result<_>>()
        {
            Ok(namespaced) => namespaced,
            Err(err) => {
                warn!(error = %err, "Cache get_multi rejected");
                return all_missing();
            }
        };
        if namespaced.is_empty() {
            return BatchResult::default();
        }

        let raw = match self.store.get_multi(&namespaced).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(category, count = keys.len(), error = %err, "Cache get_multi failed");
                return all_missing();
            }
        };

        BatchResult {
            found: raw
                .found
                .into_iter()
                .map(|(key, value)| (strip_key(&key, category), self.value_mode.decode(value)))
                .collect(),
            missing: raw
                .missing
                .iter()
                .map(|key| strip_key(key, category))
                .collect(),
        }
    }

    // == Disconnect ==
    /// Releases the store connection. Every later call degrades as if the store were down.
    pub async fn disconnect(&self) {
        self.store.disconnect().await;
    }

    fn key_or_warn(&self, category: &str, key: &str) -> Option<String> {
        match build_key(category, key) {
            Ok(namespaced) => Some(namespaced),
            Err(err) => {
                warn!(error = %err, "Cache key rejected");
                None
            }
        }
    }
}

fn ttl_from(expiration_secs: u64) -> Option<u64> {
    (expiration_secs > 0).then_some(expiration_secs)
}

// == Cache Handle ==
/// Either a live facade or the explicit absence of one.
///
/// A disabled cache behaves as an always-miss cache; callers decide what that
/// means for them by matching on the variant.
#[derive(Clone)]
pub enum CacheHandle {
    Enabled(CacheManager),
    Disabled,
}

impl CacheHandle {
    // == Create ==
    /// Builds and connects the configured backend.
    ///
    /// Disabled configuration, an empty or unusable URL, or a failed connection
    /// all yield [`CacheHandle::Disabled`]; the reason is logged.
    pub async fn create(config: &Config) -> Self {
        if !config.activated {
            info!("Cache disabled by configuration");
            return CacheHandle::Disabled;
        }
        if config.url.is_empty() {
            error!("Cache url is empty");
            return CacheHandle::Disabled;
        }

        let store = match open_store(config) {
            Ok(store) => store,
            Err(err) => {
                error!(url = %config.url, error = %err, "Cache backend could not be created");
                return CacheHandle::Disabled;
            }
        };

        if let Err(err) = store.connect().await {
            error!(url = %config.url, error = %err, "Cache backend connection failed");
            return CacheHandle::Disabled;
        }

        info!(url = %config.url, value_mode = %config.value_mode, "Cache enabled");
        CacheHandle::Enabled(CacheManager::new(store).with_value_mode(config.value_mode))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CacheHandle::Enabled(_))
    }

    /// The facade, or [`CacheError::Disabled`].
    pub fn manager(&self) -> Result<&CacheManager> {
        match self {
            CacheHandle::Enabled(manager) => Ok(manager),
            CacheHandle::Disabled => Err(CacheError::Disabled),
        }
    }
}

/// Picks the backend from the URL scheme.
fn open_store(config: &Config) -> Result<Arc<dyn StoreClient>> {
    let scheme = config
        .url
        .split_once("://")
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
        .unwrap_or_default();

    match scheme.as_str() {
        "memory" => Ok(Arc::new(MemoryStore::new(config.cleanup_interval))),
        "redis" | "rediss" | "redis+unix" | "unix" => Ok(Arc::new(RedisStore::open(&config.url)?)),
        _ => Err(CacheError::UnsupportedBackend(config.url.clone())),
    }
}
