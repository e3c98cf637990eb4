//! Tween handles with generation-checked arena slots.
//!
//! A [`TweenHandle`] is a small `Copy` value: the owner's `(id, sub_id)`
//! identity plus the arena slot `(index, generation)` of the instance it
//! names. Recycling an instance bumps its slot generation, so handles held
//! from a previous life stop validating.

use super::item::SlotItem;

/// Generation counter for handle validation.
type Generation = u32;

/// Kind index of a tween instance, selecting its pool partition.
pub type TweenKind = u16;

/// A handle to one animation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle {
    id: u32,
    sub_id: u32,
    kind: Option<TweenKind>,
    index: u32,
    generation: Generation,
}

impl TweenHandle {
    /// Create a dangling handle (the nil item).
    pub const fn dangling() -> Self {
        Self {
            id: 0,
            sub_id: 0,
            kind: None,
            index: u32::MAX,
            generation: 0,
        }
    }

    /// Check if this is a dangling/nil handle.
    pub fn is_dangling(&self) -> bool {
        self.index == u32::MAX
    }

    /// Pool kind, or `None` for the generic pool.
    pub fn kind(&self) -> Option<TweenKind> {
        self.kind
    }

    /// Arena slot index (for debugging).
    pub fn raw_index(&self) -> u32 {
        self.index
    }

    /// Arena slot generation (for debugging).
    pub fn raw_generation(&self) -> u32 {
        self.generation
    }
}

impl Default for TweenHandle {
    fn default() -> Self {
        Self::dangling()
    }
}

impl SlotItem for TweenHandle {
    fn id(&self) -> u32 {
        self.id
    }

    fn sub_id(&self) -> u32 {
        self.sub_id
    }

    fn is_nil(&self) -> bool {
        self.is_dangling()
    }
}

/// Internal arena slot.
#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: Generation,
    in_use: bool,
}

/// Arena of instance slots handing out generation-checked handles.
#[derive(Debug, Default)]
pub struct HandleRegistry {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    live: usize,
}

impl HandleRegistry {
    /// Create a registry with room for `capacity` instances before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Number of instances currently alive (active or pooled).
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Allocate a fresh instance slot.
    pub fn mint(&mut self, id: u32, sub_id: u32, kind: Option<TweenKind>) -> TweenHandle {
        let (index, generation) = match self.free_list.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.generation = slot.generation.wrapping_add(1);
                slot.in_use = true;
                (index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    in_use: true,
                });
                (index, 0)
            }
        };
        self.live += 1;
        TweenHandle {
            id,
            sub_id,
            kind,
            index,
            generation,
        }
    }

    /// Reuse the instance behind `handle` under a new identity.
    ///
    /// Returns `None` if `handle` is stale.
    pub fn recycle(&mut self, handle: &TweenHandle, id: u32, sub_id: u32) -> Option<TweenHandle> {
        if !self.is_current(handle) {
            return None;
        }
        let slot = &mut self.slots[handle.index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        Some(TweenHandle {
            id,
            sub_id,
            kind: handle.kind,
            index: handle.index,
            generation: slot.generation,
        })
    }

    /// Free the instance slot behind `handle`.
    ///
    /// Returns false if `handle` is stale.
    pub fn release(&mut self, handle: &TweenHandle) -> bool {
        if !self.is_current(handle) {
            return false;
        }
        let slot = &mut self.slots[handle.index as usize];
        slot.in_use = false;
        self.free_list.push(handle.index);
        self.live -= 1;
        true
    }

    /// Whether `handle` names the current life of a live instance.
    pub fn is_current(&self, handle: &TweenHandle) -> bool {
        self.slots
            .get(handle.index as usize)
            .map_or(false, |slot| slot.in_use && slot.generation == handle.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_and_release() {
        let mut registry = HandleRegistry::with_capacity(4);
        let a = registry.mint(1, 0, None);
        let b = registry.mint(2, 0, Some(3));

        assert_ne!(a.raw_index(), b.raw_index());
        assert_eq!(b.kind(), Some(3));
        assert_eq!(registry.live_count(), 2);

        assert!(registry.release(&a));
        assert!(!registry.is_current(&a));
        assert!(!registry.release(&a));
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_released_slot_reused_with_new_generation() {
        let mut registry = HandleRegistry::default();
        let a = registry.mint(1, 0, None);
        registry.release(&a);

        let b = registry.mint(5, 0, None);
        assert_eq!(a.raw_index(), b.raw_index());
        assert_ne!(a.raw_generation(), b.raw_generation());
        assert!(registry.is_current(&b));
        assert!(!registry.is_current(&a));
    }

    #[test]
    fn test_recycle_invalidates_old_handle() {
        let mut registry = HandleRegistry::default();
        let a = registry.mint(1, 0, Some(1));
        let b = registry.recycle(&a, 2, 4).unwrap();

        assert_eq!((b.id(), b.sub_id(), b.kind()), (2, 4, Some(1)));
        assert_eq!(a.raw_index(), b.raw_index());
        assert!(!registry.is_current(&a));
        assert!(registry.is_current(&b));
        assert!(registry.recycle(&a, 3, 0).is_none());
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_dangling_is_nil() {
        let handle = TweenHandle::default();
        assert!(handle.is_dangling());
        assert!(handle.is_nil());
        assert!(!HandleRegistry::default().is_current(&handle));
    }
}
