//! Dense slot array - the active tween registry.
//!
//! Live items are packed into `[0, count)` with no holes. Removal closes the
//! gap by shifting successors down, so iteration order is insertion order
//! until something is extracted with [`DenseSlotArray::find`].
//!
//! Growth is additive: a full array grows by a fixed `increment`, not by
//! doubling. Each reallocation stays small for the modest tween populations
//! this backs, at the price of O(n / increment) amortized pushes once the
//! array outgrows its configured capacity.

use crate::api::error::SlotError;

use super::item::SlotItem;
use super::region::{self, empty_slots, Iter};

/// Live count at which `remove` switches to the two-slots-per-step shift.
pub const PAIRWISE_SHIFT_THRESHOLD: usize = 60;

/// A growable array keeping live items in a contiguous prefix.
#[derive(Debug)]
pub struct DenseSlotArray<T> {
    /// Backing slots; `slots[count..]` are always `None`
    slots: Box<[Option<T>]>,

    /// Number of live slots
    count: usize,

    /// Additive growth step
    increment: usize,

    /// Number of reallocations triggered by `add`
    grow_count: u64,
}

impl<T> DenseSlotArray<T> {
    /// Create an array with `capacity` slots that grows by `increment`.
    ///
    /// An increment of zero is treated as one.
    pub fn new(capacity: usize, increment: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            count: 0,
            increment: increment.max(1),
            grow_count: 0,
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no items are live.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current backing capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Additive growth step.
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// How many times `add` had to grow the backing slots.
    pub fn grow_count(&self) -> u64 {
        self.grow_count
    }

    /// Live item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.slots[index].as_ref()
    }

    /// Raw view of every backing slot, live prefix included.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Append an item, growing by `increment` when full. Never fails.
    pub fn add(&mut self, item: T) {
        if self.count == self.slots.len() {
            self.grow(self.increment);
            self.grow_count += 1;
            crate::ts_emit!(TS001);
        }
        self.slots[self.count] = Some(item);
        self.count += 1;
    }

    /// Grow the backing capacity by `delta` slots.
    ///
    /// Shrinking is not supported: a negative delta fails with
    /// [`SlotError::InvalidArgument`] and leaves the array untouched.
    pub fn resize(&mut self, delta: isize) -> Result<(), SlotError> {
        if delta < 0 {
            crate::ts_emit!(TS003);
            return Err(SlotError::InvalidArgument("resize delta must be non-negative"));
        }
        if delta > 0 {
            self.grow(delta.unsigned_abs());
        }
        Ok(())
    }

    fn grow(&mut self, by: usize) {
        let capacity = self.slots.len() + by;
        let mut next = Vec::with_capacity(capacity);
        next.extend(self.slots.iter_mut().map(Option::take));
        next.resize_with(capacity, || None);
        self.slots = next.into_boxed_slice();
    }

    /// Extract the first live item matching `predicate`.
    ///
    /// The last live item moves into the vacated slot, so density holds but
    /// order is not preserved for that one item.
    pub fn find<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.slots[..self.count]
            .iter()
            .position(|slot| matches!(slot, Some(item) if predicate(item)))?;

        let last = self.count - 1;
        let taken = self.slots[index].take();
        if index != last {
            self.slots[index] = self.slots[last].take();
        }
        self.count = last;
        taken
    }

    /// Remove the live item at `index`, shifting its successors down.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        let taken = self.slots[index].take();
        self.close_hole(index);
        taken
    }

    /// Clear every live slot and reset the count (the `empty` operation).
    pub fn clear(&mut self) {
        region::clear(&mut self.slots, &mut self.count);
    }

    /// Iterate the live prefix in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.count])
    }

    /// Copy the live prefix into `out`, replacing its contents.
    ///
    /// Reusing one buffer across frames keeps this allocation-free once the
    /// buffer has reached the peak live count.
    pub fn snapshot_into(&self, out: &mut Vec<T>)
    where
        T: Clone,
    {
        out.clear();
        out.extend(self.iter().cloned());
    }

    /// Close the hole at `hole` by shifting `[hole + 1, count)` down one.
    fn close_hole(&mut self, hole: usize) {
        let last = self.count - 1;
        if self.count >= PAIRWISE_SHIFT_THRESHOLD {
            let mut i = hole;
            while i + 2 <= last {
                self.slots[i] = self.slots[i + 1].take();
                self.slots[i + 1] = self.slots[i + 2].take();
                i += 2;
            }
            if i < last {
                self.slots[i] = self.slots[i + 1].take();
            }
        } else {
            for i in hole..last {
                self.slots[i] = self.slots[i + 1].take();
            }
        }
        self.slots[last] = None;
        self.count = last;
    }
}

impl<T: SlotItem> DenseSlotArray<T> {
    /// Whether any live item shares `probe`'s id.
    ///
    /// Compares `id` only; two tweens on different sub-properties of one
    /// object both match.
    pub fn contains<I: SlotItem + ?Sized>(&self, probe: &I) -> bool {
        let id = probe.id();
        self.iter().any(|live| live.id() == id)
    }

    /// Whether a live item has exactly `probe`'s `(id, sub_id)` pair.
    pub fn contains_identity<I: SlotItem + ?Sized>(&self, probe: &I) -> bool {
        self.position(probe).is_some()
    }

    /// Slot index of the live item with `probe`'s `(id, sub_id)` pair.
    pub fn position<I: SlotItem + ?Sized>(&self, probe: &I) -> Option<usize> {
        self.slots[..self.count]
            .iter()
            .position(|slot| matches!(slot, Some(live) if live.same_identity(probe)))
    }

    /// Remove the live item with `probe`'s `(id, sub_id)` pair.
    ///
    /// Returns false (and changes nothing) if no such item is live.
    pub fn remove<I: SlotItem + ?Sized>(&mut self, probe: &I) -> bool {
        let Some(hole) = self.position(probe) else {
            return false;
        };
        self.close_hole(hole);
        true
    }
}

impl<'a, T> IntoIterator for &'a DenseSlotArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
