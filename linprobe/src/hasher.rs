use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

const HASH_SCAL: u64 = 107;

/// The fixed hasher every element goes through.
///
/// Deterministic across runs and processes, so equal contents always produce
/// equal [`hash_code`](crate::OpenAddressSet::hash_code)s.
#[derive(Clone, Copy, Debug, Default)]
pub struct MulHasher {
    state: u64,
}

impl MulHasher {
    #[inline]
    fn mix(&mut self, word: u64) {
        self.state = self.state.wrapping_mul(HASH_SCAL).wrapping_add(word);
    }
}

impl Hasher for MulHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.mix(u64::from(byte));
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.mix(u64::from(i));
    }

    fn write_u16(&mut self, i: u16) {
        self.mix(u64::from(i));
    }

    fn write_u32(&mut self, i: u32) {
        self.mix(u64::from(i));
    }

    fn write_u64(&mut self, i: u64) {
        self.mix(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.mix(i as u64);
    }

    // murmur3 finalizer, the multiply-add chain alone leaves the low bits clustered
    fn finish(&self) -> u64 {
        let mut h = self.state;
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        h ^= h >> 33;
        h
    }
}

pub(crate) fn hash_one<Q: Hash + ?Sized>(value: &Q) -> u64 {
    BuildHasherDefault::<MulHasher>::default().hash_one(value)
}

pub(crate) fn home_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    // the remainder is below capacity, so it fits back into a usize
    (hash % capacity as u64) as usize
}
