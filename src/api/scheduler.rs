//! The per-frame tween scheduler.
//!
//! Composes the slot containers into an active set plus recycling pools:
//!
//! - active tweens live in a [`DenseSlotArray`]
//! - finished generic tweens wait in a [`ReverseBoundedQueue`]
//! - finished tweens of a kind wait in that kind's [`PartitionedQueue`] partition
//!
//! Spawning pops a pooled instance before minting a new one, so once the
//! pools are warm a frame tick performs no heap allocation.

use std::mem;

use crate::api::config::SchedulerConfig;
use crate::api::error::SlotError;
use crate::api::stats::SchedulerStats;
use crate::containers::{
    DeferredCompletions, DenseSlotArray, HandleRegistry, Iter, PartitionedQueue,
    ReverseBoundedQueue, SlotItem, TweenHandle, TweenKind,
};
use crate::diagnostics::context::increment_frame;

/// What a tween reported after being advanced for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep the tween active.
    Running,
    /// The tween finished; recycle its instance.
    Complete,
}

/// Summary of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Scheduler-local tick number, starting at 1.
    pub frame: u64,
    /// Tweens advanced this tick.
    pub advanced: usize,
    /// Tweens completed by the advance callback.
    pub completed: usize,
    /// Completions drained from the cross-thread queue.
    pub deferred: usize,
}

/// The tween scheduler.
///
/// Single-threaded: every method takes `&mut self` and is bounded by the
/// number of live tweens. Wrap it in a [`SharedScheduler`](crate::SharedScheduler)
/// to tick from more than one thread.
///
/// # Example
///
/// ```rust
/// use tweenslots::{SchedulerConfig, TickOutcome, TweenScheduler};
///
/// let mut scheduler = TweenScheduler::new(SchedulerConfig::minimal()).unwrap();
/// let fade = scheduler.spawn(1, 0).unwrap();
///
/// // Frame loop
/// let summary = scheduler.tick(0.016, |handle, _dt| {
///     if *handle == fade { TickOutcome::Complete } else { TickOutcome::Running }
/// });
/// assert_eq!(summary.completed, 1);
/// assert_eq!(scheduler.pooled_count(), 1);
/// ```
#[derive(Debug)]
pub struct TweenScheduler {
    config: SchedulerConfig,
    active: DenseSlotArray<TweenHandle>,
    pool: ReverseBoundedQueue<TweenHandle>,
    kind_pools: PartitionedQueue<TweenHandle>,
    registry: HandleRegistry,
    deferred: DeferredCompletions,
    /// Reused tick snapshot of the active set
    scratch: Vec<TweenHandle>,
    stats: SchedulerStats,
}

impl TweenScheduler {
    /// Create a scheduler, rejecting unusable configurations.
    pub fn new(config: SchedulerConfig) -> Result<Self, SlotError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a scheduler with the default configuration.
    pub fn with_defaults() -> Self {
        Self::build(SchedulerConfig::default())
    }

    fn build(config: SchedulerConfig) -> Self {
        let instances = config.instance_capacity().unwrap_or(config.active_capacity);

        Self {
            active: DenseSlotArray::new(config.active_capacity, config.growth_increment),
            pool: ReverseBoundedQueue::new(config.pool_capacity),
            kind_pools: PartitionedQueue::new(config.kind_partitions, config.per_kind_capacity),
            registry: HandleRegistry::with_capacity(instances),
            deferred: DeferredCompletions::new(config.deferred_capacity),
            scratch: Vec::with_capacity(config.active_capacity),
            stats: SchedulerStats::new(),
            config,
        }
    }

    /// The configuration this scheduler was built with.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Start a generic tween.
    pub fn spawn(&mut self, id: u32, sub_id: u32) -> Result<TweenHandle, SlotError> {
        self.spawn_inner(id, sub_id, None)
    }

    /// Start a tween whose instance recycles through the pool of `kind`.
    pub fn spawn_kind(
        &mut self,
        id: u32,
        sub_id: u32,
        kind: TweenKind,
    ) -> Result<TweenHandle, SlotError> {
        let partitions = self.kind_pools.partition_count();
        if usize::from(kind) >= partitions {
            crate::ts_emit!(TS102);
            return Err(SlotError::PartitionOutOfRange {
                partition: usize::from(kind),
                partitions,
            });
        }
        self.spawn_inner(id, sub_id, Some(kind))
    }

    fn spawn_inner(
        &mut self,
        id: u32,
        sub_id: u32,
        kind: Option<TweenKind>,
    ) -> Result<TweenHandle, SlotError> {
        if self.active.contains_identity(&(id, sub_id)) {
            crate::ts_emit!(TS203);
            return Err(SlotError::DuplicateIdentity { id, sub_id });
        }

        let pooled = match kind {
            None => self.pool.try_dequeue(),
            Some(kind) => self.kind_pools.try_get(usize::from(kind)),
        };
        let handle = match pooled.and_then(|old| self.registry.recycle(&old, id, sub_id)) {
            Some(handle) => {
                self.stats.reused += 1;
                handle
            }
            None => {
                self.stats.minted += 1;
                self.registry.mint(id, sub_id, kind)
            }
        };

        self.active.add(handle);
        self.stats.spawned += 1;
        self.stats.active_growths = self.active.grow_count();
        self.stats.peak_active = self.stats.peak_active.max(self.active.len());
        Ok(handle)
    }

    /// Complete an active tween and recycle its instance.
    ///
    /// Returns false if `handle` is not active, including handles whose
    /// instance has since been recycled for another tween.
    pub fn complete(&mut self, handle: &TweenHandle) -> bool {
        if !handle.is_nil() && !self.registry.is_current(handle) {
            return false;
        }
        self.finish(handle)
    }

    fn finish(&mut self, handle: &TweenHandle) -> bool {
        let index = match self.active.position(handle) {
            Some(index) if self.active.get(index) == Some(handle) => index,
            _ => return false,
        };
        if let Some(handle) = self.active.remove_at(index) {
            self.recycle(handle);
        }
        true
    }

    /// Extract the first active tween matching `predicate` and recycle it.
    ///
    /// The last active tween moves into the freed slot.
    pub fn take_where<F>(&mut self, predicate: F) -> Option<TweenHandle>
    where
        F: FnMut(&TweenHandle) -> bool,
    {
        let handle = self.active.find(predicate)?;
        self.recycle(handle);
        Some(handle)
    }

    /// Complete every active tween. Returns how many were active.
    pub fn kill_all(&mut self) -> usize {
        let mut scratch = mem::take(&mut self.scratch);
        self.active.snapshot_into(&mut scratch);
        self.active.clear();
        let killed = scratch.len();
        for handle in scratch.drain(..) {
            self.recycle(handle);
        }
        self.scratch = scratch;
        killed
    }

    fn recycle(&mut self, handle: TweenHandle) {
        self.stats.completed += 1;
        let pooled = match handle.kind() {
            None => !self.pool.is_full() && self.pool.enqueue(handle).is_ok(),
            Some(kind) => {
                let p = usize::from(kind);
                !self.kind_pools.is_full(p) && self.kind_pools.add_to(p, handle).is_ok()
            }
        };
        if !pooled {
            self.registry.release(&handle);
            self.stats.pool_overflows += 1;
            crate::ts_emit!(TS101);
        }
    }

    /// A sender other threads can use to report completions.
    pub fn completion_sender(&self) -> DeferredCompletions {
        self.deferred.clone()
    }

    fn drain_deferred(&mut self) -> usize {
        let deferred = self.deferred.clone();
        let mut finished = 0;
        deferred.drain(|handle| {
            if self.finish(&handle) {
                finished += 1;
            }
        });
        self.stats.deferred_drained += finished as u64;
        finished
    }

    /// Advance every active tween by `dt`.
    ///
    /// Pending cross-thread completions are applied first. The active set is
    /// snapshotted into a reused buffer before `advance` runs, so tweens
    /// completed during the tick never disturb the iteration.
    pub fn tick<F>(&mut self, dt: f32, mut advance: F) -> TickSummary
    where
        F: FnMut(&TweenHandle, f32) -> TickOutcome,
    {
        increment_frame();
        self.stats.ticks += 1;
        let deferred = self.drain_deferred();

        let mut scratch = mem::take(&mut self.scratch);
        self.active.snapshot_into(&mut scratch);
        let mut completed = 0;
        for handle in &scratch {
            if advance(handle, dt) == TickOutcome::Complete && self.finish(handle) {
                completed += 1;
            }
        }
        let advanced = scratch.len();
        self.scratch = scratch;

        TickSummary {
            frame: self.stats.ticks,
            advanced,
            completed,
            deferred,
        }
    }

    /// Whether `handle` names a currently active tween.
    pub fn is_active(&self, handle: &TweenHandle) -> bool {
        self.registry.is_current(handle)
            && self
                .active
                .position(handle)
                .map_or(false, |index| self.active.get(index) == Some(handle))
    }

    /// Whether any active tween animates `id`, whatever its sub_id.
    pub fn is_id_active(&self, id: u32) -> bool {
        self.active.contains(&(id, 0))
    }

    /// Iterate active tweens in slot order.
    pub fn active(&self) -> Iter<'_, TweenHandle> {
        self.active.iter()
    }

    /// Number of active tweens.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Instances waiting in every pool.
    pub fn pooled_count(&self) -> usize {
        self.pool.len() + self.kind_pools.total_len()
    }

    /// Instances waiting in the pool of `kind`.
    pub fn pooled_kind_count(&self, kind: TweenKind) -> usize {
        self.kind_pools.len(usize::from(kind))
    }

    /// Add `delta` slots to the active array ahead of a known burst.
    pub fn reserve_active(&mut self, delta: isize) -> Result<(), SlotError> {
        self.active.resize(delta)
    }

    /// Snapshot of the scheduler counters.
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            active: self.active.len(),
            pooled: self.pooled_count(),
            ..self.stats.clone()
        }
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::with_defaults()
    }
}
