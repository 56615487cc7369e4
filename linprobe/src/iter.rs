use std::{iter::FusedIterator, slice, vec};

use crate::{slot::Slot, OpenAddressSet};

// All three walk the table in ascending slot order and stop once the number of
// values counted at creation has been yielded.

#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], items: usize) -> Self {
        Iter {
            slots: slots.iter(),
            remaining: items,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.slots.find_map(Slot::occupied)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Slot<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Slot<T>>, items: usize) -> Self {
        IntoIter {
            slots: slots.into_iter(),
            remaining: items,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.slots.find_map(Slot::into_occupied)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Single pass over a set that may remove the value it yielded last.
///
/// Removal goes through the same tombstoning as
/// [`OpenAddressSet::remove`], so values not visited yet stay reachable and
/// the pass still visits each of them exactly once.
///
/// ```
/// use linprobe::OpenAddressSet;
///
/// let mut set: OpenAddressSet<u32> = (0..10).collect();
/// let mut cursor = set.cursor();
/// while let Some(&n) = cursor.next() {
///     if n % 2 == 1 {
///         cursor.remove();
///     }
/// }
/// assert_eq!(set.len(), 5);
/// ```
pub struct Cursor<'a, T> {
    set: &'a mut OpenAddressSet<T>,
    next_index: usize,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(set: &'a mut OpenAddressSet<T>) -> Self {
        let remaining = set.len();
        Cursor {
            set,
            next_index: 0,
            current: None,
            remaining,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        self.current = None;
        if self.remaining == 0 {
            return None;
        }
        let slots = self.set.slots();
        let index = (self.next_index..slots.len()).find(|&i| !slots[i].is_free())?;
        self.next_index = index + 1;
        self.current = Some(index);
        self.remaining -= 1;
        self.set.slots()[index].occupied()
    }

    /// Removes the value returned by the last [`next`](Self::next).
    ///
    /// Returns `false` when there is no such value, either because `next` has
    /// not yielded anything yet or because it was already removed.
    pub fn remove(&mut self) -> bool {
        self.current
            .take()
            .and_then(|index| self.set.tombstone(index))
            .is_some()
    }
}
