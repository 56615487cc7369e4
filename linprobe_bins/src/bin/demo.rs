use anyhow::ensure;
use cap_rand::{ambient_authority, prelude::*};
use linprobe::OpenAddressSet;

const KNOWN: &str = "-140088382";
const INSERTS: usize = 140_000;

fn main() -> anyhow::Result<()> {
    let mut rng = CapRng::default(ambient_authority());
    let mut set = OpenAddressSet::new();
    println!("empty before filling: {}", set.is_empty());

    set.try_insert(KNOWN.to_string())?;
    for _ in 0..INSERTS {
        set.try_insert(rng.gen::<i32>().to_string())?;
    }
    println!("size after filling: {}", set.len());
    println!("empty after filling: {}", set.is_empty());
    println!("capacity after filling: {}", set.capacity());
    println!("contains {:?}: {}", KNOWN, set.contains(KNOWN));
    println!("contains \"-sd\": {}", set.contains("-sd"));

    let values = set.to_vec();
    println!("to_vec length matches size: {}", values.len() == set.len());
    ensure!(values.len() == set.len(), "to_vec returned {} of {} values", values.len(), set.len());

    #[cfg(feature = "debug")]
    for (probes, count) in &set.probe_lengths {
        println!("placements after {} probes: {}", probes, count);
    }
    Ok(())
}
