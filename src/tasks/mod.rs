//! Background Tasks Module
//!
//! # Tasks
//! - Expired entry sweep: drops stale query cache entries at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
