//! Toroid quickstart: a lockstep simulator driven by a host frame loop.
//!
//! Demonstrates:
//!   1. Building a SimConfig and Simulator
//!   2. Drawing with point edits and a drag stroke
//!   3. Pausing, running and stepping generations
//!   4. Reading snapshots for rendering
//!   5. Randomizing and resetting
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use toroid_core::Cell;
use toroid_engine::{SimConfig, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Toroid Quickstart ===\n");

    // 1. A small grid. Sizes outside [10, 100] would be clamped.
    let config = SimConfig {
        width: 12,
        height: 10,
        ..SimConfig::default()
    };
    let mut sim = Simulator::new(config)?;
    println!(
        "Grid {} at {} Hz (budget {:?}), paused",
        sim.grid().dimensions(),
        sim.clock().tick_rate_hz(),
        sim.clock().tick_budget()
    );

    // 2. Draw a glider with point edits, and a blinker with a stroke.
    for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        sim.edit(x, y, Cell::Alive)?;
    }
    sim.begin_stroke(7, 6)?;
    sim.stroke_to(8, 6)?;
    sim.stroke_to(8, 6)?; // same cell again: no write
    sim.stroke_to(9, 6)?;
    sim.end_stroke();

    // Out-of-range edits are rejected and leave the grid alone.
    if let Err(e) = sim.edit(12, 0, Cell::Alive) {
        println!("Rejected edit: {e}");
    }

    println!("\nGeneration 0:\n{}", sim.snapshot());

    // 3. Paused ticks do nothing.
    assert!(sim.tick().is_none());

    sim.toggle_run();
    for _ in 0..4 {
        if let Some(m) = sim.tick() {
            println!(
                "gen {:>2}: +{} -{} = {} live ({}us)",
                m.generation, m.births, m.deaths, m.population, m.total_us
            );
        }
    }

    // 4. Snapshots are owned copies; render them at leisure.
    let snap = sim.snapshot();
    println!("\nGeneration {}:\n{snap}", snap.generation());

    // 5. Randomize, step, reset.
    sim.randomize();
    println!("Randomized: {} live", sim.grid().population());
    sim.tick();
    sim.reset();
    println!(
        "Reset: {} live, running={}",
        sim.grid().population(),
        sim.clock().is_running()
    );

    Ok(())
}
