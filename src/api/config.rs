//! Scheduler configuration.

use super::error::SlotError;

/// Configuration for the tween scheduler's containers.
///
/// Every value is fixed at construction; only the active array can grow
/// afterwards, by `growth_increment` at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Initial capacity of the active tween array (default: 200)
    pub active_capacity: usize,

    /// Slots added each time the active array fills up (default: 50)
    pub growth_increment: usize,

    /// Capacity of the generic pool (default: 200)
    pub pool_capacity: usize,

    /// Number of per-kind pools (default: 4)
    pub kind_partitions: usize,

    /// Capacity of each per-kind pool (default: 50)
    pub per_kind_capacity: usize,

    /// Capacity of the cross-thread completion queue (default: 256)
    pub deferred_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            active_capacity: 200,
            growth_increment: 50,
            pool_capacity: 200,
            kind_partitions: 4,
            per_kind_capacity: 50,
            deferred_capacity: 256,
        }
    }
}

impl SchedulerConfig {
    /// Create a minimal config for testing or constrained environments.
    pub fn minimal() -> Self {
        Self {
            active_capacity: 8,
            growth_increment: 4,
            pool_capacity: 8,
            kind_partitions: 2,
            per_kind_capacity: 4,
            deferred_capacity: 16,
        }
    }

    /// Create a config sized for thousands of concurrent tweens.
    pub fn high_performance() -> Self {
        Self {
            active_capacity: 4096,
            growth_increment: 512,
            pool_capacity: 4096,
            kind_partitions: 8,
            per_kind_capacity: 512,
            deferred_capacity: 4096,
        }
    }

    /// Check the values a scheduler cannot work with.
    pub fn validate(&self) -> Result<(), SlotError> {
        let at_least_one = [
            (self.active_capacity, "active_capacity must be at least 1"),
            (self.growth_increment, "growth_increment must be at least 1"),
            (self.pool_capacity, "pool_capacity must be at least 1"),
            (self.kind_partitions, "kind_partitions must be at least 1"),
            (self.per_kind_capacity, "per_kind_capacity must be at least 1"),
            (self.deferred_capacity, "deferred_capacity must be at least 1"),
        ];
        if let Some(&(_, msg)) = at_least_one.iter().find(|(value, _)| *value == 0) {
            return Err(SlotError::InvalidArgument(msg));
        }
        if self.kind_partitions > usize::from(u16::MAX) {
            return Err(SlotError::InvalidArgument("kind_partitions must fit a tween kind"));
        }
        self.instance_capacity()?;
        Ok(())
    }

    /// Instances the active array and every pool hold together before the
    /// active array grows.
    pub fn instance_capacity(&self) -> Result<usize, SlotError> {
        self.kind_partitions
            .checked_mul(self.per_kind_capacity)
            .and_then(|kinds| kinds.checked_add(self.pool_capacity))
            .and_then(|pooled| pooled.checked_add(self.active_capacity))
            .ok_or(SlotError::InvalidArgument("total instance capacity overflows usize"))
    }

    /// Builder pattern: set active array capacity.
    pub fn with_active_capacity(mut self, capacity: usize) -> Self {
        self.active_capacity = capacity;
        self
    }

    /// Builder pattern: set active array growth increment.
    pub fn with_growth_increment(mut self, increment: usize) -> Self {
        self.growth_increment = increment;
        self
    }

    /// Builder pattern: set generic pool capacity.
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Builder pattern: set number and size of per-kind pools.
    pub fn with_kind_pools(mut self, partitions: usize, per_kind: usize) -> Self {
        self.kind_partitions = partitions;
        self.per_kind_capacity = per_kind;
        self
    }

    /// Builder pattern: set cross-thread completion queue capacity.
    pub fn with_deferred_capacity(mut self, capacity: usize) -> Self {
        self.deferred_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(SchedulerConfig::default().validate().is_ok());
        assert!(SchedulerConfig::minimal().validate().is_ok());
        assert!(SchedulerConfig::high_performance().validate().is_ok());
    }

    #[test]
    fn test_builder_and_validation() {
        let config = SchedulerConfig::minimal()
            .with_active_capacity(2)
            .with_kind_pools(3, 1)
            .with_growth_increment(0);

        assert_eq!(config.active_capacity, 2);
        assert_eq!((config.kind_partitions, config.per_kind_capacity), (3, 1));
        assert!(matches!(config.validate(), Err(SlotError::InvalidArgument(_))));
        assert!(config.with_growth_increment(1).validate().is_ok());
    }

    #[test]
    fn test_zero_capacities_rejected() {
        let base = SchedulerConfig::minimal();
        let zeroed = [
            base.clone().with_active_capacity(0),
            base.clone().with_pool_capacity(0),
            base.clone().with_kind_pools(0, 4),
            base.clone().with_kind_pools(2, 0),
            base.clone().with_kind_pools(0, 0),
            base.clone().with_deferred_capacity(0),
        ];
        for config in zeroed {
            assert!(
                matches!(config.validate(), Err(SlotError::InvalidArgument(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_oversized_config_rejected() {
        let config = SchedulerConfig::minimal().with_kind_pools(2, usize::MAX / 2 + 1);
        assert!(config.instance_capacity().is_err());
        assert!(matches!(config.validate(), Err(SlotError::InvalidArgument(_))));

        let config = SchedulerConfig::minimal().with_pool_capacity(usize::MAX);
        assert!(config.validate().is_err());

        assert_eq!(SchedulerConfig::minimal().instance_capacity(), Ok(8 + 8 + 2 * 4));
    }
}
