//! # tweenslots
//!
//! Allocation-free active/pool slot containers for per-frame tween schedulers.
//!
//! ## Features
//!
//! - Dense active array: live tweens packed in a contiguous prefix
//! - Reverse bounded queue: fixed-capacity FIFO pool of finished instances
//! - Partitioned queue: per-kind pools sharing one allocation
//! - Generation-checked tween handles
//! - Lock-free completion reports from worker threads
//! - Container diagnostics with strict mode for CI
//!
//! ## Quick Start
//!
//! ```rust
//! use tweenslots::{SchedulerConfig, TickOutcome, TweenScheduler};
//!
//! let mut scheduler = TweenScheduler::new(SchedulerConfig::default()).unwrap();
//! let _slide = scheduler.spawn(7, 0).unwrap();
//!
//! // Game loop
//! let summary = scheduler.tick(1.0 / 60.0, |_handle, _dt| {
//!     // ... advance the instance's timeline ...
//!     TickOutcome::Complete
//! });
//! assert_eq!(summary.completed, 1);
//! ```

pub mod api;
pub mod containers;
pub mod diagnostics;

mod sync;

// Re-export public API at crate root for convenience
pub use api::config::SchedulerConfig;
pub use api::error::SlotError;
pub use api::scheduler::{TickOutcome, TickSummary, TweenScheduler};
pub use api::shared::SharedScheduler;
pub use api::stats::SchedulerStats;

// Containers
pub use containers::{
    DeferredCompletions, DenseSlotArray, HandleRegistry, Partition, PartitionedQueue,
    ReverseBoundedQueue, SlotItem, TweenHandle, TweenKind,
};

// Diagnostics
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, CollectingSink};
pub use diagnostics::{StrictMode, set_strict_mode, StrictModeGuard};
pub use diagnostics::{TS001, TS002, TS003, TS004, TS101, TS102, TS201, TS203};
