//! Slot containers backing the tween scheduler.
//!
//! - [`DenseSlotArray`]: active set, dense prefix, additive growth
//! - [`ReverseBoundedQueue`]: fixed-capacity FIFO pool
//! - [`PartitionedQueue`]: per-kind pools in one allocation
//!
//! None of them allocate after construction except `DenseSlotArray` growth,
//! which is reported as diagnostic TS001.

pub mod deferred;
pub mod dense;
pub mod handles;
pub mod item;
pub mod partitioned;
pub mod queue;
pub(crate) mod region;

pub use deferred::DeferredCompletions;
pub use dense::{DenseSlotArray, PAIRWISE_SHIFT_THRESHOLD};
pub use handles::{HandleRegistry, TweenHandle, TweenKind};
pub use item::SlotItem;
pub use partitioned::{Partition, PartitionedQueue};
pub use queue::ReverseBoundedQueue;
pub use region::Iter;
