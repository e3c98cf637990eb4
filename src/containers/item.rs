//! Identity contract for items stored in slot containers.
//!
//! Containers never construct or destroy items. They only compare them by
//! identity, so anything that can report an `(id, sub_id)` pair can live in a
//! slot.

/// An opaque handle that can be tracked by the slot containers.
pub trait SlotItem {
    /// Primary identity, assigned by the owner.
    fn id(&self) -> u32;

    /// Secondary identity (e.g. one axis of an object animated under `id`).
    fn sub_id(&self) -> u32;

    /// Whether this item is the "absent" sentinel.
    ///
    /// Nil items are rejected by the queues and never occupy a live slot.
    fn is_nil(&self) -> bool {
        false
    }

    /// `(id, sub_id)` pair equality, across item types.
    #[inline]
    fn same_identity<O: SlotItem + ?Sized>(&self, other: &O) -> bool {
        self.id() == other.id() && self.sub_id() == other.sub_id()
    }
}

impl<T: SlotItem + ?Sized> SlotItem for &T {
    fn id(&self) -> u32 {
        (**self).id()
    }

    fn sub_id(&self) -> u32 {
        (**self).sub_id()
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl SlotItem for (u32, u32) {
    fn id(&self) -> u32 {
        self.0
    }

    fn sub_id(&self) -> u32 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_identity() {
        let item: (u32, u32) = (1, 2);
        assert!(item.same_identity(&(1u32, 2u32)));
        assert!(!item.same_identity(&(1u32, 3u32)));
        assert!(!item.is_nil());
        assert!((&item).same_identity(&item));
    }
}
