//! Background Tasks Module
//!
//! # Tasks
//! - TTL Sweep: drops expired memory-backend entries at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
