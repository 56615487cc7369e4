#![no_main]
use std::collections::HashSet;

use libfuzzer_sys::{arbitrary::Unstructured, fuzz_target};
use linprobe::{arbitrary::arb_ops, OpenAddressSet, SetConfig};

fuzz_target!(|bytes| {
    let mut u = Unstructured::new(bytes);
    if let Ok(ops) = arb_ops::<u8>(&mut u) {
        // start tiny so growth and tombstone reuse happen early
        let mut set =
            OpenAddressSet::with_config(SetConfig::default().with_initial_capacity(4)).unwrap();
        let mut model = HashSet::new();
        for op in &ops {
            assert_eq!(op.apply(&mut set), op.apply_to_model(&mut model), "{:?}", op);
            assert!(set.invariants());
        }
        assert_eq!(set.len(), model.len());
        assert!(model.iter().all(|t| set.contains(t)));
    }
});
