use std::hash::Hash;

use arbitrary::{Arbitrary, Unstructured};

use crate::{ops::Op, OpenAddressSet};

pub fn arb_set<'a, T: Arbitrary<'a> + Hash + Eq>(
    u: &mut Unstructured<'a>,
) -> arbitrary::Result<OpenAddressSet<T>> {
    let mut set = OpenAddressSet::new();
    for _ in 0..u.int_in_range(0..=1_000)? {
        set.insert(u.arbitrary()?);
    }
    Ok(set)
}

pub fn arb_op<'a, T: Arbitrary<'a>>(u: &mut Unstructured<'a>) -> arbitrary::Result<Op<T>> {
    Ok(match u.int_in_range(0..=10)? {
        0..=3 => Op::Insert(u.arbitrary()?),
        4 | 5 => Op::Remove(u.arbitrary()?),
        6 => Op::Contains(u.arbitrary()?),
        7 => Op::AddAll(u.arbitrary()?),
        8 => Op::RemoveAll(u.arbitrary()?),
        9 => Op::RetainAll(u.arbitrary()?),
        _ => Op::Clear,
    })
}

pub fn arb_ops<'a, T: Arbitrary<'a>>(u: &mut Unstructured<'a>) -> arbitrary::Result<Vec<Op<T>>> {
    let mut ops = vec![];
    for _ in 0..u.int_in_range(0..=1_000)? {
        ops.push(arb_op(u)?);
    }
    Ok(ops)
}
