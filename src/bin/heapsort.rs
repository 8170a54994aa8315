//! Heap sort benchmark driver
//!
//! Fills two identical arrays with random integers, sorts one with the
//! min-heap and the other with the standard library sort, and reports
//! whether the results agree.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --bin heapsort -- --count 100000 --seed 42
//! ```

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use min_heap_sort::scalar::IntMinHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sort random integers with a binary min-heap and check against `sort`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of values to sort
    #[arg(short = 'n', long, default_value_t = 100_000)]
    count: usize,

    /// Seed for the random number generator (defaults to the system clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Exclusive upper bound for generated values (defaults to the count, at least 1)
    #[arg(long)]
    max: Option<i32>,

    /// Print the first values of both sorted arrays
    #[arg(long)]
    show: bool,
}

impl Args {
    fn seed(&self) -> anyhow::Result<u64> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .context("system clock is before the Unix epoch")?;
                Ok(now.as_nanos() as u64)
            }
        }
    }

    fn max(&self) -> anyhow::Result<i32> {
        let max = match self.max {
            Some(max) => max,
            None => i32::try_from(self.count.max(1)).context("count does not fit in i32")?,
        };
        // No values are drawn when count is 0, so any bound will do.
        if self.count > 0 && max <= 0 {
            bail!("value bound must be positive, got {}", max);
        }
        Ok(max)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed()?;
    let max = args.max()?;
    let n = args.count;

    info!("generating {} values in [0, {}) with seed {}", n, max, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heap_sorted: Vec<i32> = (0..n).map(|_| rng.gen_range(0..max)).collect();
    let mut reference = heap_sorted.clone();

    info!("sorting with min-heap");
    let start = Instant::now();
    let mut heap = IntMinHeap::from_slice(&heap_sorted);
    heap.write_sorted(&mut heap_sorted)?;
    info!("min-heap sort took {:?}", start.elapsed());

    info!("sorting with reference sort");
    let start = Instant::now();
    reference.sort();
    info!("reference sort took {:?}", start.elapsed());

    if args.show {
        let k = n.min(10);
        println!("heap:      {:?}", &heap_sorted[..k]);
        println!("reference: {:?}", &reference[..k]);
    }

    let equal = heap_sorted == reference;
    println!(
        "The arrays {} equal!",
        if equal { "are" } else { "are not" }
    );

    if !equal {
        bail!("heap sort disagrees with reference sort");
    }
    Ok(())
}
