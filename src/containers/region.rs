//! Slot region primitives shared by the containers.
//!
//! A region is a `[Option<T>]` slice plus a live count. Live entries always
//! occupy `region[..count]`; everything past `count` is `None`.

use std::iter::FusedIterator;
use std::slice;

use crate::api::error::SlotError;

/// Allocate `len` empty slots.
pub(crate) fn empty_slots<T>(len: usize) -> Box<[Option<T>]> {
    (0..len).map(|_| None).collect()
}

/// Write `item` at the head of the region, shifting live entries up by one.
///
/// The slot at `count` is always empty, so rotating `[0, count]` right by one
/// moves that hole to the head before the write.
pub(crate) fn push_front<T>(
    region: &mut [Option<T>],
    count: &mut usize,
    item: T,
) -> Result<(), SlotError> {
    if *count >= region.len() {
        return Err(SlotError::CapacityExceeded {
            capacity: region.len(),
        });
    }
    region[..=*count].rotate_right(1);
    region[0] = Some(item);
    *count += 1;
    Ok(())
}

/// Take the tail entry (the oldest in head-first order).
pub(crate) fn pop_back<T>(region: &mut [Option<T>], count: &mut usize) -> Option<T> {
    if *count == 0 {
        return None;
    }
    *count -= 1;
    region[*count].take()
}

/// First live entry matching `predicate`, without removing it.
pub(crate) fn peek_where<T, F>(region: &[Option<T>], count: usize, mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    region[..count]
        .iter()
        .filter_map(Option::as_ref)
        .find(|item| predicate(*item))
}

/// Clear live slots and reset the count.
pub(crate) fn clear<T>(region: &mut [Option<T>], count: &mut usize) {
    for slot in &mut region[..*count] {
        *slot = None;
    }
    *count = 0;
}

/// Iterator over the live entries of a slot region.
///
/// Borrowing the container for the iterator's lifetime rules out mutation
/// while it is alive. The iterator is `Clone`, so a sequence can be restarted
/// from any saved position.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self { inner: live.iter() }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_keeps_newest_at_head() {
        let mut region = empty_slots::<u32>(3);
        let mut count = 0;
        push_front(&mut region, &mut count, 1).unwrap();
        push_front(&mut region, &mut count, 2).unwrap();
        assert_eq!(&region[..], &[Some(2), Some(1), None]);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_push_front_full() {
        let mut region = empty_slots::<u32>(1);
        let mut count = 0;
        push_front(&mut region, &mut count, 1).unwrap();
        assert_eq!(
            push_front(&mut region, &mut count, 2),
            Err(SlotError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(&region[..], &[Some(1)]);
    }

    #[test]
    fn test_zero_sized_region() {
        let mut region = empty_slots::<u32>(0);
        let mut count = 0;
        assert!(push_front(&mut region, &mut count, 1).is_err());
        assert_eq!(pop_back(&mut region, &mut count), None);
        assert_eq!(Iter::new(&region[..count]).count(), 0);
    }

    #[test]
    fn test_iter_is_restartable() {
        let region = [Some(1u32), Some(2), None];
        let iter = Iter::new(&region[..2]);
        let first: Vec<_> = iter.clone().copied().collect();
        let second: Vec<_> = iter.copied().collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
    }
}
