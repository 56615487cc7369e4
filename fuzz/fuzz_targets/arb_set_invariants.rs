#![no_main]
use libfuzzer_sys::{arbitrary::Unstructured, fuzz_target};
use linprobe::arbitrary::arb_set;

fuzz_target!(|bytes| {
    let mut u = Unstructured::new(bytes);
    if let Ok(set) = arb_set::<u16>(&mut u) {
        assert!(set.invariants());
        assert_eq!(set.iter().count(), set.len());
    }
});
