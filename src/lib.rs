//! Category Cache - a namespaced caching facade
//!
//! Category-scoped get/set/delete (single and batch) over Redis or an in-process
//! store, with typed value round-tripping through plain string storage.

pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod namespace;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use codec::ValueMode;
pub use config::Config;
pub use error::{CacheError, Result};
pub use manager::{BatchResult, CacheHandle, CacheManager};
pub use store::{MemoryStore, RawBatch, RedisStore, StoreClient};
