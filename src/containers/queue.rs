//! Reverse bounded queue - the generic tween pool.
//!
//! A fixed-capacity shifting array: the newest item sits at index 0 and
//! dequeue takes from the tail, so items leave in the order they arrived.
//! The capacity is fixed at construction; a full queue rejects new items
//! instead of growing.

use crate::api::error::SlotError;

use super::item::SlotItem;
use super::region::{self, empty_slots, Iter};

/// A fixed-capacity FIFO queue stored newest-first.
#[derive(Debug)]
pub struct ReverseBoundedQueue<T> {
    slots: Box<[Option<T>]>,
    count: usize,
}

impl<T> ReverseBoundedQueue<T> {
    /// Create a queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            count: 0,
        }
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the next enqueue would be rejected.
    pub fn is_full(&self) -> bool {
        self.count >= self.slots.len()
    }

    /// Fixed capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Raw view of every backing slot.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Dequeue the oldest item.
    pub fn try_dequeue(&mut self) -> Option<T> {
        region::pop_back(&mut self.slots, &mut self.count)
    }

    /// First queued item (newest first) matching `predicate`.
    ///
    /// Lookup only; the item stays queued.
    pub fn peek_where<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        region::peek_where(&self.slots, self.count, predicate)
    }

    /// Iterate queued items newest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.count])
    }

    /// Drop every queued item.
    pub fn clear(&mut self) {
        region::clear(&mut self.slots, &mut self.count);
    }
}

impl<T: SlotItem> ReverseBoundedQueue<T> {
    /// Enqueue an item at the head.
    ///
    /// Fails with [`SlotError::InvalidArgument`] for a nil item and with
    /// [`SlotError::CapacityExceeded`] when the queue is full. The item is
    /// dropped in both cases.
    pub fn enqueue(&mut self, item: T) -> Result<(), SlotError> {
        if item.is_nil() {
            crate::ts_emit!(TS004);
            return Err(SlotError::InvalidArgument("cannot enqueue a nil item"));
        }
        region::push_front(&mut self.slots, &mut self.count, item).map_err(|err| {
            crate::ts_emit!(TS002);
            err
        })
    }
}

impl<'a, T> IntoIterator for &'a ReverseBoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Item = (u32, u32);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Probe {
        id: u32,
        nil: bool,
    }

    impl SlotItem for Probe {
        fn id(&self) -> u32 {
            self.id
        }

        fn sub_id(&self) -> u32 {
            0
        }

        fn is_nil(&self) -> bool {
            self.nil
        }
    }

    #[test]
    fn test_fifo_order() {
        let (x, y, z): (Item, Item, Item) = ((1, 0), (2, 0), (3, 0));
        let mut queue: ReverseBoundedQueue<Item> = ReverseBoundedQueue::new(4);
        queue.enqueue(x).unwrap();
        queue.enqueue(y).unwrap();
        queue.enqueue(z).unwrap();

        assert_eq!(queue.slots(), &[Some(z), Some(y), Some(x), None]);
        assert_eq!(queue.try_dequeue(), Some(x));
        assert_eq!(queue.try_dequeue(), Some(y));
        assert_eq!(queue.try_dequeue(), Some(z));
        assert_eq!(queue.try_dequeue(), None);
        assert!(queue.slots().iter().all(Option::is_none));
    }

    #[test]
    fn test_full_queue_rejects() {
        let mut queue: ReverseBoundedQueue<Item> = ReverseBoundedQueue::new(2);
        queue.enqueue((1, 0)).unwrap();
        queue.enqueue((2, 0)).unwrap();
        assert!(queue.is_full());

        assert_eq!(
            queue.enqueue((3, 0)),
            Err(SlotError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.try_dequeue(), Some((1, 0)));
    }

    #[test]
    fn test_nil_item_rejected() {
        let mut queue: ReverseBoundedQueue<Probe> = ReverseBoundedQueue::new(2);
        let nil = Probe { id: 0, nil: true };

        assert!(matches!(queue.enqueue(nil), Err(SlotError::InvalidArgument(_))));
        assert!(queue.is_empty());
        queue.enqueue(Probe { id: 1, nil: false }).unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut queue: ReverseBoundedQueue<Item> = ReverseBoundedQueue::new(3);
        queue.enqueue((1, 0)).unwrap();
        queue.enqueue((2, 0)).unwrap();

        assert_eq!(queue.peek_where(|item| item.0 == 1), Some(&(1, 0)));
        assert_eq!(queue.peek_where(|item| item.0 == 9), None);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.try_dequeue(), Some((1, 0)));
    }

    #[test]
    fn test_empty_sequence_is_empty() {
        let queue: ReverseBoundedQueue<Item> = ReverseBoundedQueue::new(4);
        assert_eq!(queue.iter().next(), None);
        assert_eq!((&queue).into_iter().count(), 0);
    }

    #[test]
    fn test_iter_newest_first_and_clear() {
        let mut queue: ReverseBoundedQueue<Item> = ReverseBoundedQueue::new(3);
        queue.enqueue((1, 0)).unwrap();
        queue.enqueue((2, 0)).unwrap();
        let ids: Vec<u32> = queue.iter().map(|item| item.0).collect();
        assert_eq!(ids, vec![2, 1]);

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.slots().iter().all(Option::is_none));
    }

    #[test]
    fn test_interleaved_enqueue_dequeue() {
        let mut queue: ReverseBoundedQueue<Item> = ReverseBoundedQueue::new(2);
        queue.enqueue((1, 0)).unwrap();
        queue.enqueue((2, 0)).unwrap();
        assert_eq!(queue.try_dequeue(), Some((1, 0)));
        queue.enqueue((3, 0)).unwrap();
        assert_eq!(queue.try_dequeue(), Some((2, 0)));
        assert_eq!(queue.try_dequeue(), Some((3, 0)));
    }
}
