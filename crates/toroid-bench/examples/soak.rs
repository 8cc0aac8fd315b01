//! Soak run: drive the stress profile for many generations and report
//! timing and population.
//!
//! Run with:
//!   RUST_LOG=info cargo run --release -p toroid-bench --example soak -- 5000

use std::time::Instant;

use toroid_bench::stress_profile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let generations: u64 = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(1000);

    let mut sim = stress_profile(42)?;
    let start = Instant::now();
    let mut worst_us = 0u64;
    let mut total_us = 0u64;

    for _ in 0..generations {
        if let Some(m) = sim.tick() {
            worst_us = worst_us.max(m.total_us);
            total_us += m.total_us;
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{generations} generations on {} in {:.2?}",
        sim.grid().dimensions(),
        elapsed
    );
    println!(
        "  mean {:.1}us/gen, worst {worst_us}us, final population {}",
        total_us as f64 / generations.max(1) as f64,
        sim.grid().population()
    );
    Ok(())
}
