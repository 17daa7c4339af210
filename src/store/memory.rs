//! Memory Store Module
//!
//! Process-local backend: a HashMap of raw strings with per-entry TTL.
//! Expired entries are dropped lazily on read and by the background sweep
//! that runs while the store is connected.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{CacheError, Result};
use crate::store::{RawBatch, StoreClient, StoredEntry};
use crate::tasks::spawn_cleanup_task;

// == Memory Table ==
/// Key-value storage behind the memory backend.
#[derive(Debug, Default)]
pub struct MemoryTable {
    entries: HashMap<String, StoredEntry>,
}

impl MemoryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value, replacing any previous value and deadline.
    pub fn set(&mut self, key: String, value: String, ttl: Option<u64>) {
        self.entries.insert(key, StoredEntry::new(value, ttl));
    }

    // == Get ==
    /// Returns the live value for `key`, dropping it first if it has expired.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if self.entries.get(key)?.is_expired() {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes `key`, returning whether a live entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries
            .remove(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    /// Number of entries held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Store ==
/// In-process [`StoreClient`] selected by `memory://` URLs.
#[derive(Debug)]
pub struct MemoryStore {
    table: Arc<RwLock<MemoryTable>>,
    connected: AtomicBool,
    sweeper: Mutex<Option<JoinHandle<()>>>,
    cleanup_interval: u64,
}

impl MemoryStore {
    /// Creates a disconnected store sweeping every `cleanup_interval` seconds once connected.
    pub fn new(cleanup_interval: u64) -> Self {
        Self {
            table: Arc::new(RwLock::new(MemoryTable::new())),
            connected: AtomicBool::new(false),
            sweeper: Mutex::new(None),
            cleanup_interval: cleanup_interval.max(1),
        }
    }

    /// Shared handle to the underlying table.
    pub fn table(&self) -> Arc<RwLock<MemoryTable>> {
        Arc::clone(&self.table)
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(CacheError::NotConnected)
        }
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn connect(&self) -> Result<()> {
        let mut sweeper = self.sweeper.lock().await;
        if sweeper.is_none() {
            *sweeper = Some(spawn_cleanup_task(self.table(), self.cleanup_interval));
            info!("Memory store connected");
        }
        self.connected.store(true, Ordering::Release);
        Ok(())
    }

    async fn disconnect(&self) {
        self.connected.store(false, Ordering::Release);
        if let Some(handle) = self.sweeper.lock().await.take() {
            handle.abort();
            info!("Memory store disconnected");
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.ensure_connected()?;
        // write lock: an expired hit is removed on the spot
        Ok(self.table.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl: Option<u64>) -> Result<()> {
        self.ensure_connected()?;
        self.table.write().await.set(key.to_string(), value, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.ensure_connected()?;
        let removed = self.table.write().await.delete(key);
        debug!(key, removed, "Memory store delete");
        Ok(())
    }

    async fn set_multi(&self, entries: Vec<(String, String)>, ttl: Option<u64>) -> Result<()> {
        self.ensure_connected()?;
        let mut table = self.table.write().await;
        for (key, value) in entries {
            table.set(key, value, ttl);
        }
        Ok(())
    }

    async fn get_multi(&self, keys: &[String]) -> Result<RawBatch> {
        self.ensure_connected()?;
        let mut table = self.table.write().await;
        let replies = keys.iter().map(|key| table.get(key)).collect();
        Ok(RawBatch::from_replies(keys, replies))
    }
}
