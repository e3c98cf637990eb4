//! A scheduler shared between threads.
//!
//! Containers are not synchronized internally. When ticks may be dispatched
//! from more than one thread, every call into the scheduler goes through one
//! mutex, so operations on the containers stay serialized.

use std::sync::Arc;

use crate::api::scheduler::{TickOutcome, TickSummary, TweenScheduler};
use crate::containers::{DeferredCompletions, TweenHandle};
use crate::sync::mutex::Mutex;

/// A cheaply cloneable, mutex-guarded [`TweenScheduler`].
#[derive(Clone)]
pub struct SharedScheduler {
    inner: Arc<Mutex<TweenScheduler>>,
    completions: DeferredCompletions,
}

impl SharedScheduler {
    /// Share `scheduler` between threads.
    pub fn new(scheduler: TweenScheduler) -> Self {
        let completions = scheduler.completion_sender();
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
            completions,
        }
    }

    /// Run `f` with exclusive access to the scheduler.
    pub fn with<R>(&self, f: impl FnOnce(&mut TweenScheduler) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Tick, waiting for any other thread's tick to finish first.
    pub fn tick<F>(&self, dt: f32, advance: F) -> TickSummary
    where
        F: FnMut(&TweenHandle, f32) -> TickOutcome,
    {
        self.inner.lock().tick(dt, advance)
    }

    /// Tick only if no other thread holds the scheduler.
    pub fn try_tick<F>(&self, dt: f32, advance: F) -> Option<TickSummary>
    where
        F: FnMut(&TweenHandle, f32) -> TickOutcome,
    {
        let mut guard = self.inner.try_lock()?;
        Some(guard.tick(dt, advance))
    }

    /// A lock-free sender for completions.
    ///
    /// Never takes the mutex, so it is safe to call from inside a
    /// [`tick`](Self::tick) callback.
    pub fn completion_sender(&self) -> DeferredCompletions {
        self.completions.clone()
    }
}
