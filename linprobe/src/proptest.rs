use std::{fmt::Debug, hash::Hash};

use proptest::{collection::vec, prelude::*};

use crate::{ops::Op, OpenAddressSet};

const MAX_SIZE: usize = 64;
const MAX_OPS: usize = 256;
const MAX_BULK: usize = 8;

pub fn arb_set<S>(element: S) -> impl Strategy<Value = OpenAddressSet<S::Value>>
where
    S: Strategy,
    S::Value: Hash + Eq,
{
    vec(element, 0..MAX_SIZE).prop_map(|values| values.into_iter().collect())
}

pub fn arb_op<S>(element: S) -> impl Strategy<Value = Op<S::Value>>
where
    S: Strategy + Clone,
    S::Value: Clone,
{
    prop_oneof![
        4 => element.clone().prop_map(Op::Insert),
        2 => element.clone().prop_map(Op::Remove),
        2 => element.clone().prop_map(Op::Contains),
        1 => vec(element.clone(), 0..MAX_BULK).prop_map(Op::AddAll),
        1 => vec(element.clone(), 0..MAX_BULK).prop_map(Op::RemoveAll),
        1 => vec(element, 0..MAX_BULK).prop_map(Op::RetainAll),
        1 => Just(Op::Clear),
    ]
}

pub fn arb_ops<S>(element: S) -> impl Strategy<Value = Vec<Op<S::Value>>>
where
    S: Strategy + Clone,
    S::Value: Clone + Debug,
{
    vec(arb_op(element), 0..MAX_OPS)
}
