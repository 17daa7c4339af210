//! Redis Store Module
//!
//! Backend for `redis://`, `rediss://` and `redis+unix://` URLs, sharing one
//! multiplexed connection between all concurrent callers.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{CacheError, Result};
use crate::store::{RawBatch, StoreClient};

// == Redis Store ==
/// [`StoreClient`] backed by a Redis server.
pub struct RedisStore {
    client: Client,
    connection: RwLock<Option<MultiplexedConnection>>,
}

impl RedisStore {
    /// Parses the URL without touching the network.
    pub fn open(url: &str) -> Result<Self> {
        let client = Client::open(url)?;
        Ok(Self {
            client,
            connection: RwLock::new(None),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        self.connection
            .read()
            .await
            .clone()
            .ok_or(CacheError::NotConnected)
    }
}

#[async_trait]
impl StoreClient for RedisStore {
    async fn connect(&self) -> Result<()> {
        let connection = self.client.get_multiplexed_async_connection().await?;
        *self.connection.write().await = Some(connection);
        info!(
            "Redis store connected to {}",
            self.client.get_connection_info().addr
        );
        Ok(())
    }

    async fn disconnect(&self) {
        // the driver task stops once the last clone is dropped
        if self.connection.write().await.take().is_some() {
            info!("Redis store disconnected");
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Option<u64>) -> Result<()> {
        let mut conn = self.connection().await?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(seconds) = ttl {
            cmd.arg("EX").arg(seconds);
        }
        let _: () = cmd.query_async(&mut conn).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: i64 = conn.del(key).await?;
        Ok(())
    }

    async fn set_multi(&self, entries: Vec<(String, String)>, ttl: Option<u64>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection().await?;

        match ttl {
            None => {
                let _: () = conn.mset(entries.as_slice()).await?;
            }
            Some(seconds) => {
                // MULTI/EXEC: values and deadlines land together or not at all
                let mut pipe = redis::pipe();
                pipe.atomic();
                for (key, value) in entries {
                    pipe.cmd("SET")
                        .arg(key)
                        .arg(value)
                        .arg("EX")
                        .arg(seconds)
                        .ignore();
                }
                let _: () = pipe.query_async(&mut conn).await?;
            }
        }
        Ok(())
    }

    async fn get_multi(&self, keys: &[String]) -> Result<RawBatch> {
        if keys.is_empty() {
            return Ok(RawBatch::default());
        }
        let mut conn = self.connection().await?;

        let mut cmd = redis::cmd("MGET");
        for key in keys {
            cmd.arg(key.as_str());
        }
        let values: Vec<Option<String>> = cmd.query_async(&mut conn).await?;
        Ok(RawBatch::from_replies(keys, values))
    }
}
