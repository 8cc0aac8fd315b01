//! Toroid realtime example: a background tick thread with command
//! submission from the host.
//!
//! The tick thread owns the simulator and advances it at the configured
//! rate. The host sends edits as command batches and renders whatever
//! snapshot was published last.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example realtime_async

use std::thread;
use std::time::Duration;

use toroid_core::{Cell, Command};
use toroid_engine::{RealtimeSimulator, SimConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Toroid Realtime Example ===\n");

    let config = SimConfig {
        width: 20,
        height: 12,
        tick_rate_hz: 20.0,
        ..SimConfig::default()
    };
    let mut rt = RealtimeSimulator::new(config)?;
    println!("Tick thread running at {} Hz\n", rt.tick_rate_hz());

    // 1. Draw an R-pentomino and start the clock in one batch.
    let mut batch: Vec<Command> = [(9, 5), (10, 5), (8, 6), (9, 6), (9, 7)]
        .into_iter()
        .map(|(x, y)| Command::Set {
            x,
            y,
            state: Cell::Alive,
        })
        .collect();
    batch.push(Command::ToggleRun);

    let receipts = rt.submit(batch)?;
    let accepted = receipts.iter().filter(|r| r.accepted).count();
    println!("Batch applied: {accepted}/{} accepted", receipts.len());

    // 2. Render a few frames from the published snapshot.
    for _ in 0..5 {
        thread::sleep(Duration::from_millis(150));
        if let Some(snap) = rt.latest_snapshot() {
            println!(
                "generation {} ({} live):\n{snap}",
                snap.generation(),
                snap.population()
            );
        }
    }

    // 3. Pause, then shut down and inspect the final state.
    rt.submit(vec![Command::ToggleRun])?;
    println!("running={}", rt.is_running());

    let report = rt.shutdown();
    println!(
        "Shutdown in {}ms (drain {}ms), joined={}",
        report.total_ms, report.drain_ms, report.tick_joined
    );

    let sim = rt.into_simulator()?;
    println!(
        "Recovered simulator at generation {}",
        sim.grid().generation()
    );
    Ok(())
}
