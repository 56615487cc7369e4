use cap_rand::{ambient_authority, prelude::*};
use criterion::{black_box, Criterion};
use linprobe::OpenAddressSet;

const SIZES: [usize; 3] = [1_000, 10_000, 150_000];

fn main() -> anyhow::Result<()> {
    let mut rng = CapRng::default(ambient_authority());
    let mut criterion = Criterion::default().configure_from_args();
    for size in SIZES {
        let values: Vec<String> = (0..size).map(|_| rng.gen::<i32>().to_string()).collect();
        criterion.bench_function(&format!("insert {}", size), |b| {
            b.iter(|| {
                let mut set = OpenAddressSet::new();
                set.add_all(values.iter().cloned());
                set
            });
        });
        let set: OpenAddressSet<String> = values.iter().cloned().collect();
        criterion.bench_function(&format!("contains {}", size), |b| {
            b.iter(|| values.iter().filter(|v| set.contains(black_box(v.as_str()))).count());
        });
        criterion.bench_function(&format!("remove then insert {}", size), |b| {
            b.iter_batched_ref(
                || set.clone(),
                |set| {
                    for v in &values {
                        set.remove(v);
                    }
                    set.add_all(values.iter().cloned());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    criterion.final_summary();
    Ok(())
}
