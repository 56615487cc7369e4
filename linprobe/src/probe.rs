use std::{iter::Chain, ops::Range};

// linear probe order: home, home + 1, ..., capacity - 1, 0, ..., home - 1
// two plain ranges, so no index is ever computed past capacity
pub(crate) fn probe(home: usize, capacity: usize) -> Chain<Range<usize>, Range<usize>> {
    debug_assert!(home < capacity);
    (home..capacity).chain(0..home)
}
