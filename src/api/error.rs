//! Structural errors reported by the containers and the scheduler.
//!
//! A miss (item not found, empty queue) is never an error; it is a `None` or
//! `false` on the expected path.

/// Errors that can occur when mutating a slot container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// A negative resize delta, a nil item, or an invalid configuration value.
    InvalidArgument(&'static str),
    /// Enqueue on a full fixed-capacity queue or partition.
    CapacityExceeded {
        /// Capacity of the queue (or partition) that rejected the item.
        capacity: usize,
    },
    /// Partition index outside `[0, partitions)`.
    PartitionOutOfRange {
        /// Requested partition.
        partition: usize,
        /// Number of partitions in the queue.
        partitions: usize,
    },
    /// A live tween already uses this `(id, sub_id)` pair.
    DuplicateIdentity {
        /// Primary identity.
        id: u32,
        /// Secondary identity.
        sub_id: u32,
    },
}

impl std::fmt::Display for SlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
            SlotError::CapacityExceeded { capacity } => {
                write!(f, "Capacity exceeded: queue holds at most {} items", capacity)
            }
            SlotError::PartitionOutOfRange { partition, partitions } => write!(
                f,
                "Partition {} out of range (queue has {} partitions)",
                partition, partitions
            ),
            SlotError::DuplicateIdentity { id, sub_id } => {
                write!(f, "Tween ({}, {}) is already active", id, sub_id)
            }
        }
    }
}

impl std::error::Error for SlotError {}
