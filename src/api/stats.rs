//! Scheduler statistics.

/// Counters maintained by the tween scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Tweens currently active.
    pub active: usize,

    /// Peak number of active tweens (high water mark).
    pub peak_active: usize,

    /// Instances waiting in the generic and per-kind pools.
    pub pooled: usize,

    /// Total spawns.
    pub spawned: u64,

    /// Spawns served from a pool.
    pub reused: u64,

    /// Spawns that minted a fresh instance.
    pub minted: u64,

    /// Total completions (ticked, reported or killed).
    pub completed: u64,

    /// Completions that found their pool full and released the instance.
    pub pool_overflows: u64,

    /// Completions drained from the cross-thread queue.
    pub deferred_drained: u64,

    /// Times the active array had to grow.
    pub active_growths: u64,

    /// Ticks performed.
    pub ticks: u64,
}

impl SchedulerStats {
    /// Create empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of spawns served from a pool.
    pub fn reuse_ratio(&self) -> f64 {
        if self.spawned == 0 {
            return 0.0;
        }
        self.reused as f64 / self.spawned as f64
    }
}

impl std::fmt::Display for SchedulerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tween Scheduler Statistics:")?;
        writeln!(f, "  Active:          {} (peak {})", self.active, self.peak_active)?;
        writeln!(f, "  Pooled:          {}", self.pooled)?;
        writeln!(f, "  Spawned:         {}", self.spawned)?;
        writeln!(f, "  Reused:          {} ({:.1}%)", self.reused, self.reuse_ratio() * 100.0)?;
        writeln!(f, "  Minted:          {}", self.minted)?;
        writeln!(f, "  Completed:       {}", self.completed)?;
        writeln!(f, "  Pool overflows:  {}", self.pool_overflows)?;
        writeln!(f, "  Deferred:        {}", self.deferred_drained)?;
        writeln!(f, "  Active growths:  {}", self.active_growths)?;
        writeln!(f, "  Ticks:           {}", self.ticks)?;
        Ok(())
    }
}
