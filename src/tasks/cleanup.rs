//! TTL Sweep Task
//!
//! Background task that periodically drops expired entries from the memory backend.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::MemoryTable;

/// Spawns a background task that periodically removes expired entries.
///
/// The task loops forever, sleeping `cleanup_interval_secs` between passes and
/// taking the table's write lock only for the sweep itself.
///
/// # Returns
/// A JoinHandle the memory store aborts when it disconnects.
pub fn spawn_cleanup_task(
    table: Arc<RwLock<MemoryTable>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = table.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
