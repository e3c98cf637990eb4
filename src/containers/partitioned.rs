//! Partitioned queue - per-kind tween pools sharing one allocation.
//!
//! The backing slots are split into `partition_count` fixed regions of
//! `per_partition` slots. Each region behaves as an independent
//! [`ReverseBoundedQueue`](super::queue::ReverseBoundedQueue): enqueue shifts
//! and writes relative to the partition's own start offset, so one partition
//! can never write into a neighbour.

use crate::api::error::SlotError;

use super::item::SlotItem;
use super::region::{self, empty_slots, Iter};

/// Bookkeeping for one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    start: usize,
    count: usize,
}

impl Partition {
    /// Absolute index of the partition's first slot.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of queued items in the partition.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Several bounded FIFO queues in one backing array.
#[derive(Debug)]
pub struct PartitionedQueue<T> {
    slots: Box<[Option<T>]>,
    partitions: Box<[Partition]>,
    per_partition: usize,
}

impl<T> PartitionedQueue<T> {
    /// Create `partition_count` partitions of `per_partition` slots each.
    ///
    /// # Panics
    ///
    /// Panics if the total slot count overflows `usize`. Use
    /// [`try_new`](Self::try_new) to handle that case.
    pub fn new(partition_count: usize, per_partition: usize) -> Self {
        match Self::try_new(partition_count, per_partition) {
            Ok(queue) => queue,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create the partitions, or `InvalidArgument` if the total slot count
    /// overflows `usize`.
    pub fn try_new(partition_count: usize, per_partition: usize) -> Result<Self, SlotError> {
        let total = partition_count
            .checked_mul(per_partition)
            .ok_or(SlotError::InvalidArgument("partitioned queue size overflows usize"))?;
        let partitions = (0..partition_count)
            .map(|p| Partition {
                start: p * per_partition,
                count: 0,
            })
            .collect();
        Ok(Self {
            slots: empty_slots(total),
            partitions,
            per_partition,
        })
    }

    /// Number of partitions.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Capacity of each partition.
    pub fn partition_capacity(&self) -> usize {
        self.per_partition
    }

    /// Bookkeeping for partition `p`.
    pub fn partition(&self, p: usize) -> Option<Partition> {
        self.partitions.get(p).copied()
    }

    /// Queued items in partition `p` (zero for an unknown partition).
    pub fn len(&self, p: usize) -> usize {
        self.partitions.get(p).map_or(0, |part| part.count)
    }

    /// Whether partition `p` has no queued items.
    pub fn is_empty(&self, p: usize) -> bool {
        self.len(p) == 0
    }

    /// Whether the next `add_to(p, ..)` would be rejected for lack of room.
    pub fn is_full(&self, p: usize) -> bool {
        self.partitions
            .get(p)
            .map_or(true, |part| part.count >= self.per_partition)
    }

    /// Queued items across every partition.
    pub fn total_len(&self) -> usize {
        self.partitions.iter().map(|part| part.count).sum()
    }

    /// Raw view of every backing slot.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    fn region(&self, p: usize) -> Option<(&[Option<T>], usize)> {
        let part = self.partitions.get(p)?;
        Some((&self.slots[part.start..part.start + self.per_partition], part.count))
    }

    fn region_mut(&mut self, p: usize) -> Option<(&mut [Option<T>], &mut usize)> {
        let per_partition = self.per_partition;
        let part = self.partitions.get_mut(p)?;
        let region = &mut self.slots[part.start..part.start + per_partition];
        Some((region, &mut part.count))
    }

    /// Dequeue the oldest item of partition `p`.
    pub fn try_get(&mut self, p: usize) -> Option<T> {
        let (region, count) = self.region_mut(p)?;
        region::pop_back(region, count)
    }

    /// First item of partition `p` (newest first) matching `predicate`.
    ///
    /// Lookup only; the item stays queued.
    pub fn peek_where<F>(&self, p: usize, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        let (region, count) = self.region(p)?;
        region::peek_where(region, count, predicate)
    }

    /// Iterate partition `p` newest first. Unknown partitions are empty.
    pub fn iter(&self, p: usize) -> Iter<'_, T> {
        match self.region(p) {
            Some((region, count)) => Iter::new(&region[..count]),
            None => Iter::new(&[]),
        }
    }

    /// Drop every queued item in partition `p`.
    pub fn clear_partition(&mut self, p: usize) {
        if let Some((region, count)) = self.region_mut(p) {
            region::clear(region, count);
        }
    }

    /// Drop every queued item in every partition.
    pub fn clear(&mut self) {
        for p in 0..self.partitions.len() {
            self.clear_partition(p);
        }
    }
}

impl<T: SlotItem> PartitionedQueue<T> {
    /// Enqueue `item` at the head of partition `p`.
    pub fn add_to(&mut self, p: usize, item: T) -> Result<(), SlotError> {
        let partitions = self.partitions.len();
        if item.is_nil() {
            crate::ts_emit!(TS004);
            return Err(SlotError::InvalidArgument("cannot enqueue a nil item"));
        }
        let Some((region, count)) = self.region_mut(p) else {
            crate::ts_emit!(TS102);
            return Err(SlotError::PartitionOutOfRange {
                partition: p,
                partitions,
            });
        };
        region::push_front(region, count, item).map_err(|err| {
            crate::ts_emit!(TS002);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Item = (u32, u32);

    #[test]
    fn test_partition_isolation() {
        let (x, y): (Item, Item) = ((1, 0), (2, 0));
        let mut queue = PartitionedQueue::new(2, 4);
        queue.add_to(0, x).unwrap();
        queue.add_to(1, y).unwrap();

        assert_eq!(queue.iter(0).copied().collect::<Vec<_>>(), vec![x]);
        assert_eq!(queue.iter(1).copied().collect::<Vec<_>>(), vec![y]);
        assert_eq!(queue.slots()[0], Some(x));
        assert_eq!(queue.slots()[4], Some(y));
    }

    #[test]
    fn test_shift_stays_inside_partition() {
        let mut queue: PartitionedQueue<Item> = PartitionedQueue::new(3, 2);
        queue.add_to(1, (10, 0)).unwrap();
        queue.add_to(1, (11, 0)).unwrap();
        queue.add_to(0, (1, 0)).unwrap();
        queue.add_to(2, (20, 0)).unwrap();

        assert_eq!(
            queue.slots(),
            &[
                Some((1, 0)),
                None,
                Some((11, 0)),
                Some((10, 0)),
                Some((20, 0)),
                None
            ]
        );
        assert!(queue.is_full(1));
        assert_eq!(
            queue.add_to(1, (12, 0)),
            Err(SlotError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(queue.slots()[4], Some((20, 0)));
    }

    #[test]
    fn test_fifo_per_partition() {
        let mut queue: PartitionedQueue<Item> = PartitionedQueue::new(2, 3);
        for id in 1..=3 {
            queue.add_to(1, (id, 0)).unwrap();
        }
        queue.add_to(0, (99, 0)).unwrap();

        assert_eq!(queue.try_get(1), Some((1, 0)));
        assert_eq!(queue.try_get(1), Some((2, 0)));
        assert_eq!(queue.try_get(1), Some((3, 0)));
        assert_eq!(queue.try_get(1), None);
        assert_eq!(queue.try_get(0), Some((99, 0)));
    }

    #[test]
    fn test_out_of_range_partition() {
        let mut queue: PartitionedQueue<Item> = PartitionedQueue::new(2, 2);
        assert_eq!(
            queue.add_to(2, (1, 0)),
            Err(SlotError::PartitionOutOfRange {
                partition: 2,
                partitions: 2
            })
        );
        assert_eq!(queue.try_get(5), None);
        assert_eq!(queue.peek_where(5, |_| true), None);
        assert_eq!(queue.iter(5).count(), 0);
        assert_eq!(queue.len(5), 0);
        assert!(queue.is_full(5));
        assert_eq!(queue.partition(5), None);
    }

    #[test]
    fn test_peek_scoped_to_partition() {
        let mut queue: PartitionedQueue<Item> = PartitionedQueue::new(2, 2);
        queue.add_to(0, (1, 7)).unwrap();
        queue.add_to(1, (2, 7)).unwrap();

        assert_eq!(queue.peek_where(1, |item| item.1 == 7), Some(&(2, 7)));
        assert_eq!(queue.peek_where(0, |item| item.0 == 2), None);
        assert_eq!(queue.total_len(), 2);
    }

    #[test]
    fn test_empty_partition_sequence() {
        let mut queue: PartitionedQueue<Item> = PartitionedQueue::new(2, 2);
        assert_eq!(queue.iter(0).next(), None);
        queue.add_to(1, (1, 0)).unwrap();
        assert_eq!(queue.iter(0).next(), None);
    }

    #[test]
    fn test_oversized_layout_rejected() {
        let result = PartitionedQueue::<Item>::try_new(2, usize::MAX / 2 + 1);
        assert!(matches!(result, Err(SlotError::InvalidArgument(_))));

        let queue = PartitionedQueue::<Item>::try_new(3, 0).unwrap();
        assert_eq!(queue.partition_count(), 3);
        assert!(queue.is_full(0));
    }

    #[test]
    fn test_clear() {
        let mut queue: PartitionedQueue<Item> = PartitionedQueue::new(2, 2);
        queue.add_to(0, (1, 0)).unwrap();
        queue.add_to(1, (2, 0)).unwrap();

        queue.clear_partition(0);
        assert!(queue.is_empty(0));
        assert_eq!(queue.len(1), 1);

        queue.clear();
        assert_eq!(queue.total_len(), 0);
        assert!(queue.slots().iter().all(Option::is_none));
        assert_eq!(queue.partition(1).map(|p| p.start()), Some(2));
    }
}
