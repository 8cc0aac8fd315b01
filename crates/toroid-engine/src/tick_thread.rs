//! Frame loop for [`RealtimeSimulator`](crate::RealtimeSimulator).
//!
//! The tick thread owns the [`Simulator`] exclusively (moved in via
//! `thread::Builder::spawn`). Commands arrive over a bounded crossbeam
//! channel and are applied between generation sweeps, so a sweep is
//! never interleaved with an edit. Replies go back via per-batch
//! channels.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{debug, trace};
use toroid_core::{Command, Receipt};

use crate::simulator::Simulator;
use crate::slot::SnapshotSlot;

/// A batch of commands submitted by a host thread, paired with a reply
/// channel for the resulting receipts.
pub(crate) struct IngressBatch {
    pub commands: Vec<Command>,
    pub reply: crossbeam_channel::Sender<Vec<Receipt>>,
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    sim: Simulator,
    slot: Arc<SnapshotSlot>,
    cmd_rx: Receiver<IngressBatch>,
    running: Arc<AtomicBool>,
    shutdown_flag: Arc<AtomicBool>,
    tick_stopped: Arc<AtomicBool>,
    tick_budget: Duration,
}

impl TickThreadState {
    pub fn new(
        sim: Simulator,
        slot: Arc<SnapshotSlot>,
        cmd_rx: Receiver<IngressBatch>,
        running: Arc<AtomicBool>,
        shutdown_flag: Arc<AtomicBool>,
        tick_stopped: Arc<AtomicBool>,
    ) -> Self {
        let tick_budget = sim.clock().tick_budget();
        Self {
            sim,
            slot,
            cmd_rx,
            running,
            shutdown_flag,
            tick_stopped,
            tick_budget,
        }
    }

    /// Main loop. Runs until `shutdown_flag` is set.
    ///
    /// Consumes self and returns the `Simulator` so the owner can recover
    /// it through the `JoinHandle`.
    pub fn run(mut self) -> Simulator {
        debug!("tick thread started, budget {:?}", self.tick_budget);
        self.publish();
        let mut next_tick = self.deadline_after(Instant::now());

        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                break;
            }

            // 1. Apply queued edits between sweeps.
            self.drain_command_channel();

            // 2. Advance once per budget while running.
            let now = Instant::now();
            if now >= next_tick {
                if let Some(metrics) = self.sim.tick() {
                    trace!(
                        "tick {} in {}us",
                        metrics.generation,
                        metrics.total_us
                    );
                    self.publish();
                }
                next_tick = self.deadline_after(now);
            }

            // 3. Sleep until the next deadline. park_timeout instead of
            // sleep so submissions and shutdown can wake the thread.
            let wait = next_tick.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                std::thread::park_timeout(wait);
            }
        }

        self.tick_stopped.store(true, Ordering::Release);
        debug!("tick thread stopped at generation {}", self.sim.grid().generation());
        self.sim
    }

    /// Apply all pending command batches.
    ///
    /// Each batch is published before its receipts are sent, so a host
    /// that reads the latest snapshot after `submit` returns sees its
    /// own edits.
    fn drain_command_channel(&mut self) {
        while let Ok(batch) = self.cmd_rx.try_recv() {
            let receipts = self.sim.submit(batch.commands);
            self.running
                .store(self.sim.clock().is_running(), Ordering::Release);
            self.publish();
            // Best-effort reply: the caller may have dropped its receiver.
            let _ = batch.reply.send(receipts);
        }
    }

    /// One budget after `now`. The budget is capped at
    /// [`MAX_TICK_BUDGET`](crate::clock::MAX_TICK_BUDGET), so the add only
    /// fails on a platform clock near its own limit.
    fn deadline_after(&self, now: Instant) -> Instant {
        now.checked_add(self.tick_budget).unwrap_or(now)
    }

    fn publish(&self) {
        self.slot.publish(self.sim.snapshot());
    }
}
