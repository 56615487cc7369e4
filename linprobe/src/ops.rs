use std::{collections::HashSet, hash::Hash};

use crate::OpenAddressSet;

/// One step of a generated workload, replayable against an
/// [`OpenAddressSet`] and against `std`'s `HashSet` as a model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Op<T> {
    Insert(T),
    Remove(T),
    Contains(T),
    AddAll(Vec<T>),
    RemoveAll(Vec<T>),
    RetainAll(Vec<T>),
    Clear,
}

impl<T: Hash + Eq + Clone> Op<T> {
    pub fn apply(&self, set: &mut OpenAddressSet<T>) -> bool {
        match self {
            Op::Insert(t) => set.insert(t.clone()),
            Op::Remove(t) => set.remove(t),
            Op::Contains(t) => set.contains(t),
            Op::AddAll(ts) => set.add_all(ts.iter().cloned()),
            Op::RemoveAll(ts) => set.remove_all(ts),
            Op::RetainAll(ts) => set.retain_all(ts),
            Op::Clear => {
                set.clear();
                false
            }
        }
    }

    pub fn apply_to_model(&self, model: &mut HashSet<T>) -> bool {
        match self {
            Op::Insert(t) => model.insert(t.clone()),
            Op::Remove(t) => model.remove(t),
            Op::Contains(t) => model.contains(t),
            Op::AddAll(ts) => ts.iter().fold(false, |changed, t| model.insert(t.clone()) | changed),
            Op::RemoveAll(ts) => ts.iter().fold(false, |changed, t| model.remove(t) | changed),
            Op::RetainAll(ts) => {
                let before = model.len();
                model.retain(|t| ts.contains(t));
                model.len() != before
            }
            Op::Clear => {
                model.clear();
                false
            }
        }
    }
}
