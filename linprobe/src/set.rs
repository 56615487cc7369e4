#[cfg(feature = "debug")]
use std::collections::BTreeMap;
use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use itertools::Itertools;

use crate::{
    hasher::{hash_one, home_index},
    iter::{Cursor, IntoIter, Iter},
    probe::probe,
    slot::{empty_table, max_slots, Slot},
    SetConfig, SetError, LOAD_DENOMINATOR, LOAD_NUMERATOR,
};

/// A set of unique values stored directly in one table of slots.
///
/// Collisions are resolved by linear probing; removal leaves a tombstone so
/// that values placed further down the same probe chain stay reachable. The
/// table doubles once more than 70% of it is occupied.
#[derive(Clone)]
pub struct OpenAddressSet<T> {
    slots: Vec<Slot<T>>,
    items: usize,
    tombstones: usize,
    initial_capacity: usize,
    max_capacity: usize,
    max_capacity_reached: bool,
    #[cfg(feature = "debug")]
    pub probe_lengths: BTreeMap<usize, usize>,
}

impl<T> OpenAddressSet<T> {
    pub fn new() -> Self {
        Self::from_config(SetConfig::default())
    }

    // rounded up to a power of two, at least 1
    pub fn with_capacity(capacity: usize) -> Self {
        let initial_capacity = capacity
            .max(1)
            .checked_next_power_of_two()
            .expect("next power of 2 doesn't fit a usize");
        Self::from_config(SetConfig::default().with_initial_capacity(initial_capacity))
    }

    pub fn with_config(config: SetConfig) -> Result<Self, SetError> {
        config.validate()?;
        if config.initial_capacity > max_slots::<T>() {
            return Err(SetError::InvalidConfig(
                "initial capacity is larger than any table of this element type",
            ));
        }
        Ok(Self::from_config(config))
    }

    fn from_config(config: SetConfig) -> Self {
        let max_capacity = config
            .max_capacity
            .unwrap_or(usize::MAX)
            .min(max_slots::<T>())
            .max(config.initial_capacity);
        Self {
            slots: empty_table(config.initial_capacity),
            items: 0,
            tombstones: 0,
            initial_capacity: config.initial_capacity,
            max_capacity,
            max_capacity_reached: false,
            #[cfg(feature = "debug")]
            probe_lengths: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn max_capacity_reached(&self) -> bool {
        self.max_capacity_reached
    }

    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.slots.len() as f64
    }

    /// Drops every value and goes back to a fresh table of the initial
    /// capacity, which also lifts a previous saturation.
    pub fn clear(&mut self) {
        self.slots = empty_table(self.initial_capacity);
        self.items = 0;
        self.tombstones = 0;
        self.max_capacity_reached = false;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.items)
    }

    /// An iteration handle that can remove the value it just yielded.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    // the single place a live value turns into a tombstone
    pub(crate) fn tombstone(&mut self, index: usize) -> Option<T> {
        let value = self.slots[index].take()?;
        self.items -= 1;
        self.tombstones += 1;
        Some(value)
    }

    fn over_load_factor(&self) -> bool {
        self.items as u128 * LOAD_DENOMINATOR > self.slots.len() as u128 * LOAD_NUMERATOR
    }
}

impl<T: Hash + Eq> OpenAddressSet<T> {
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(value, hash_one(value)).is_some()
    }

    pub fn contains_opt<Q>(&self, value: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        value.map_or(false, |value| self.contains(value))
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(value, hash_one(value))?;
        self.slots[index].occupied()
    }

    /// Adds `value`, returning whether it was absent.
    ///
    /// Grows the table first when it is over the load factor. Fails with
    /// [`SetError::CapacityExhausted`] when that growth is refused because the
    /// table already sits at its maximum capacity.
    pub fn try_insert(&mut self, value: T) -> Result<bool, SetError> {
        if self.over_load_factor() {
            self.grow()?;
        }
        let hash = hash_one(&value);
        if self.find(&value, hash).is_some() {
            return Ok(false);
        }
        let capacity = self.slots.len();
        match place(
            &mut self.slots,
            value,
            home_index(hash, capacity),
            #[cfg(feature = "debug")]
            &mut self.probe_lengths,
        ) {
            Ok(reused_tombstone) => {
                if reused_tombstone {
                    self.tombstones -= 1;
                }
                self.items += 1;
                Ok(true)
            }
            Err(_) => Err(SetError::TableFull { capacity }),
        }
    }

    /// [`try_insert`](Self::try_insert), with a failed insertion reported as `false`.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.try_insert(value).unwrap_or(false)
    }

    pub fn insert_opt(&mut self, value: Option<T>) -> bool {
        value.map_or(false, |value| self.insert(value))
    }

    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    pub fn remove_opt<Q>(&mut self, value: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        value.map_or(false, |value| self.remove(value))
    }

    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(value, hash_one(value))?;
        self.tombstone(index)
    }

    // an Empty slot ends the walk, tombstones and other values are stepped over
    fn find<Q>(&self, value: &Q, hash: u64) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        for index in probe(home_index(hash, capacity), capacity) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(v) if <T as Borrow<Q>>::borrow(v) == value => return Some(index),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }

    fn grow(&mut self) -> Result<(), SetError> {
        if self.max_capacity_reached {
            return Err(SetError::CapacityExhausted {
                capacity: self.slots.len(),
            });
        }
        let capacity = match self.slots.len().checked_mul(2) {
            Some(doubled) if doubled <= self.max_capacity => doubled,
            _ => {
                self.max_capacity_reached = true;
                self.max_capacity
            }
        };
        self.rehash(capacity);
        Ok(())
    }

    fn rehash(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.slots, empty_table(capacity));
        self.tombstones = 0;
        for value in old.into_iter().filter_map(Slot::into_occupied) {
            let home = home_index(hash_one(&value), capacity);
            if place(
                &mut self.slots,
                value,
                home,
                #[cfg(feature = "debug")]
                &mut self.probe_lengths,
            )
            .is_err()
            {
                panic!(
                    "no free slot while rehashing {} values into {} slots",
                    self.items, capacity
                );
            }
        }
    }

    pub fn add_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(false, |changed, value| self.insert(value) | changed)
    }

    pub fn remove_all<'a, Q, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        values
            .into_iter()
            .fold(false, |changed, value| self.remove(value) | changed)
    }

    /// Keeps only the values found in `keep`.
    pub fn retain_all<'a, Q, I>(&mut self, keep: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let keep: OpenAddressSet<&Q> = keep.into_iter().collect();
        let mut changed = false;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            if !keep.contains(<T as Borrow<Q>>::borrow(value)) {
                cursor.remove();
                changed = true;
            }
        }
        changed
    }

    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    pub fn try_add_all<I>(&mut self, values: Option<I>) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.ok_or(SetError::MissingCollection)?;
        Ok(self.add_all(values))
    }

    pub fn try_remove_all<'a, Q, I>(&mut self, values: Option<I>) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let values = values.ok_or(SetError::MissingCollection)?;
        Ok(self.remove_all(values))
    }

    pub fn try_retain_all<'a, Q, I>(&mut self, keep: Option<I>) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let keep = keep.ok_or(SetError::MissingCollection)?;
        Ok(self.retain_all(keep))
    }

    pub fn try_contains_all<'a, Q, I>(&self, values: Option<I>) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let values = values.ok_or(SetError::MissingCollection)?;
        Ok(self.contains_all(values))
    }

    /// Wrapping sum of the hashes of the live values.
    ///
    /// Depends only on the contents, never on where the values sit in the
    /// table, so equal sets have equal hash codes.
    pub fn hash_code(&self) -> u64 {
        self.iter()
            .fold(0u64, |sum, value| sum.wrapping_add(hash_one(value)))
    }

    pub fn invariants(&self) -> bool {
        self.invariant1() && self.invariant2() && self.invariant3() && self.invariant4()
    }

    // counters agree with the table
    fn invariant1(&self) -> bool {
        let occupied = self.slots.iter().filter(|s| !s.is_free()).count();
        let tombstones = self
            .slots
            .iter()
            .filter(|s| matches!(s, Slot::Tombstone))
            .count();
        occupied == self.items && tombstones == self.tombstones
    }

    // every value is the first match on its own probe chain, which also rules out duplicates
    fn invariant2(&self) -> bool {
        self.slots.iter().enumerate().all(|(index, slot)| {
            slot.occupied()
                .map_or(true, |value| self.find(value, hash_one(value)) == Some(index))
        })
    }

    fn invariant3(&self) -> bool {
        self.max_capacity_reached || self.slots.len().is_power_of_two()
    }

    // the check runs before placing, so the last insertion may sit just over the threshold
    fn invariant4(&self) -> bool {
        self.max_capacity_reached
            || self.items.saturating_sub(1) as u128 * LOAD_DENOMINATOR
                <= self.slots.len() as u128 * LOAD_NUMERATOR
    }
}

// Ok(true) when the value went into a tombstone, Err hands the value back if every slot is taken
#[inline]
fn place<T>(
    slots: &mut [Slot<T>],
    value: T,
    home: usize,
    #[cfg(feature = "debug")] probe_lengths: &mut BTreeMap<usize, usize>,
) -> Result<bool, T> {
    let capacity = slots.len();
    #[cfg(feature = "debug")]
    let mut probes = 0;
    for index in probe(home, capacity) {
        let slot = &mut slots[index];
        if slot.is_free() {
            #[cfg(feature = "debug")]
            {
                *probe_lengths.entry(probes).or_insert(0) += 1;
            }
            let reused_tombstone = matches!(slot, Slot::Tombstone);
            *slot = Slot::Occupied(value);
            return Ok(reused_tombstone);
        }
        #[cfg(feature = "debug")]
        {
            probes += 1;
        }
    }
    Err(value)
}

impl<T> Default for OpenAddressSet<T> {
    fn default() -> Self {
        OpenAddressSet::new()
    }
}

impl<T: Hash + Eq> PartialEq for OpenAddressSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && other.iter().all(|value| self.contains(value))
    }
}

impl<T: Hash + Eq> Eq for OpenAddressSet<T> {}

impl<T: Hash + Eq> Hash for OpenAddressSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for OpenAddressSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OpenAddressSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

impl<T: Hash + Eq> FromIterator<T> for OpenAddressSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OpenAddressSet::new();
        set.add_all(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for OpenAddressSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for OpenAddressSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a OpenAddressSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for OpenAddressSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.slots, self.items)
    }
}
