//! Job queue walkthrough
//!
//! Schedules string jobs by priority, copies the queue, drains the original
//! and shows that the copy is untouched. A second heap of random integers is
//! copied by assignment after the source is dropped.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run --example job_queue
//! ```

use log::info;
use min_heap_sort::min_heap::MinHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn show<T: std::fmt::Display>(label: &str, heap: &MinHeap<T>) {
    println!("{} size: {}", label, heap.len());
    println!("{}", heap);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut jobs: MinHeap<String> = MinHeap::new();
    show("Heap", &jobs);

    for (job, priority) in [
        ("job c", 3),
        ("job a", 1),
        ("job e", 5),
        ("job b", 2),
        ("job d", 4),
        ("RUSH!", -5),
    ] {
        jobs.insert(job.to_string(), priority);
        show("Heap", &jobs);
    }

    let snapshot = jobs.clone();
    info!("copied queue of {} jobs", snapshot.len());

    while !jobs.is_empty() {
        let job = jobs.remove_min()?;
        println!("Removed {}", job);
        show("Heap", &jobs);
    }

    show("Copy", &snapshot);
    show("Original", &jobs);

    let mut rng = StdRng::seed_from_u64(68333);
    let mut numbers: MinHeap<i32> = MinHeap::new();
    for _ in 0..15 {
        let x = rng.gen_range(0..200);
        numbers.insert(x, x);
    }
    show("Dynamic heap", &numbers);

    let mut assigned: MinHeap<i32> = MinHeap::new();
    assigned.clone_from(&numbers);
    drop(numbers);

    show("Assigned heap", &assigned);
    println!("Sorted: {:?}", assigned.into_sorted_vec());

    Ok(())
}
