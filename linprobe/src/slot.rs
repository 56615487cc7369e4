use std::mem;

// Empty ends a probe walk, Tombstone does not
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Slot<T> {
    Empty,
    Tombstone,
    Occupied(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<T> Slot<T> {
    pub(crate) fn is_free(&self) -> bool {
        matches!(self, Slot::Empty | Slot::Tombstone)
    }

    pub(crate) fn occupied(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    pub(crate) fn into_occupied(self) -> Option<T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    // leaves a tombstone behind an occupied slot, other slots are untouched
    pub(crate) fn take(&mut self) -> Option<T> {
        match mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }
}

pub(crate) fn empty_table<T>(capacity: usize) -> Vec<Slot<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Slot::default);
    slots
}

// the largest table a Vec<Slot<T>> can hold
pub(crate) fn max_slots<T>() -> usize {
    isize::MAX as usize / mem::size_of::<Slot<T>>()
}
