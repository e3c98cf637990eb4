//! Synchronization primitives.
//!
//! Scheduler state is single-threaded; the mutex here only serializes a
//! scheduler shared between tick threads.

pub(crate) mod mutex;
