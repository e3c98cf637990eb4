//! Public API: configuration, errors, statistics and the scheduler.

pub mod config;
pub mod error;
pub mod scheduler;
pub mod shared;
pub mod stats;
