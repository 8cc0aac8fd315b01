//! Background frame driver for multi-threaded hosts.
//!
//! # Architecture
//!
//! ```text
//! Host thread(s)                      Tick thread ("toroid-tick")
//!     |                                   |
//!     |--submit()------------------------>| cmd_rx.try_recv()
//!     |   [cmd_tx: bounded(64)] + unpark  | sim.submit(commands)
//!     |<--receipts via reply_tx-----------| slot.publish(snapshot)
//!     |                                   |
//!     |                                   | sim.tick()  (every budget)
//!     |                                   | slot.publish(snapshot)
//!     |                                   | park_timeout(next deadline)
//!     |                                   |
//!     |--latest_snapshot()--> slot.latest()
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use toroid_core::{Command, Receipt};
use toroid_grid::GridSnapshot;

use crate::config::{ConfigError, SimConfig};
use crate::simulator::Simulator;
use crate::slot::SnapshotSlot;
use crate::tick_thread::{IngressBatch, TickThreadState};

/// Capacity of the command channel, in batches.
const COMMAND_QUEUE_CAPACITY: usize = 64;

/// How long [`RealtimeSimulator::shutdown`] waits for the tick thread to
/// acknowledge before joining it.
const DRAIN_BUDGET: Duration = Duration::from_millis(33);

// ── Error types ──────────────────────────────────────────────────

/// Error submitting commands to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down.
    Shutdown,
    /// The command channel is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "command channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── ShutdownReport ───────────────────────────────────────────────

/// Report from [`RealtimeSimulator::shutdown`].
#[derive(Debug)]
pub struct ShutdownReport {
    /// Total time spent in the shutdown sequence.
    pub total_ms: u64,
    /// Time spent waiting for the tick thread to stop.
    pub drain_ms: u64,
    /// Whether the tick thread was joined successfully.
    pub tick_joined: bool,
}

// ── RealtimeSimulator ────────────────────────────────────────────

/// A [`Simulator`] driven at its configured rate on a background thread.
///
/// All mutation goes through [`submit`](Self::submit) and is applied on
/// the tick thread between generations. Renderers on any thread read
/// [`latest_snapshot`](Self::latest_snapshot), which is republished after
/// every generation and every applied batch.
///
/// Dropping a `RealtimeSimulator` shuts the thread down.
pub struct RealtimeSimulator {
    slot: Arc<SnapshotSlot>,
    cmd_tx: Option<crossbeam_channel::Sender<IngressBatch>>,
    running: Arc<AtomicBool>,
    shutdown_flag: Arc<AtomicBool>,
    tick_stopped: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<Simulator>>,
    /// Recovered from the tick thread on shutdown. Wrapped in a Mutex so
    /// RealtimeSimulator is Sync (the boxed random source is Send but not
    /// Sync). Only touched through `&mut self`.
    recovered: Mutex<Option<Simulator>>,
    tick_rate_hz: f64,
}

// Compile-time assertion: hosts may share a RealtimeSimulator via Arc.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<RealtimeSimulator>();
};

impl RealtimeSimulator {
    /// Build a paused simulator from `config` and start its tick thread.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::from_simulator(Simulator::new(config)?)
    }

    /// Move an existing simulator onto a new tick thread.
    pub fn from_simulator(sim: Simulator) -> Result<Self, ConfigError> {
        let tick_rate_hz = sim.clock().tick_rate_hz();
        let slot = Arc::new(SnapshotSlot::new());
        let running = Arc::new(AtomicBool::new(sim.clock().is_running()));
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let tick_stopped = Arc::new(AtomicBool::new(false));
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(COMMAND_QUEUE_CAPACITY);

        let state = TickThreadState::new(
            sim,
            Arc::clone(&slot),
            cmd_rx,
            Arc::clone(&running),
            Arc::clone(&shutdown_flag),
            Arc::clone(&tick_stopped),
        );
        let tick_thread = thread::Builder::new()
            .name("toroid-tick".into())
            .spawn(move || state.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("toroid-tick: {e}"),
            })?;

        Ok(Self {
            slot,
            cmd_tx: Some(cmd_tx),
            running,
            shutdown_flag,
            tick_stopped,
            tick_thread: Some(tick_thread),
            recovered: Mutex::new(None),
            tick_rate_hz,
        })
    }

    /// Apply `commands` on the tick thread, in order, before its next
    /// generation.
    ///
    /// Blocks until the batch has been applied and returns one
    /// [`Receipt`] per command.
    pub fn submit(&self, commands: Vec<Command>) -> Result<Vec<Receipt>, SubmitError> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;

        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        let batch = IngressBatch {
            commands,
            reply: reply_tx,
        };

        cmd_tx.try_send(batch).map_err(|e| match e {
            crossbeam_channel::TrySendError::Full(_) => SubmitError::ChannelFull,
            crossbeam_channel::TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })?;

        // Wake the tick thread so edits do not wait out a full budget.
        if let Some(handle) = &self.tick_thread {
            handle.thread().unpark();
        }

        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }

    /// The most recently published generation.
    ///
    /// The tick thread publishes once on start, so this is `Some` as soon
    /// as the thread has run.
    pub fn latest_snapshot(&self) -> Option<Arc<GridSnapshot>> {
        self.slot.latest()
    }

    /// Number of snapshots published so far.
    pub fn published_count(&self) -> u64 {
        self.slot.published()
    }

    /// Whether the simulator is running, as of the last applied batch.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Configured generations per second.
    pub fn tick_rate_hz(&self) -> f64 {
        self.tick_rate_hz
    }

    /// Stop and join the tick thread.
    ///
    /// Sets the shutdown flag, unparks the thread so it leaves its budget
    /// sleep immediately, waits up to 33ms for it to acknowledge, then
    /// joins it and keeps the recovered [`Simulator`]. Idempotent.
    pub fn shutdown(&mut self) -> ShutdownReport {
        let Some(handle) = self.tick_thread.take() else {
            return ShutdownReport {
                total_ms: 0,
                drain_ms: 0,
                tick_joined: true,
            };
        };

        let start = Instant::now();
        self.shutdown_flag.store(true, Ordering::Release);
        handle.thread().unpark();

        let drain_deadline = Instant::now() + DRAIN_BUDGET;
        while !self.tick_stopped.load(Ordering::Acquire) {
            if Instant::now() > drain_deadline {
                break;
            }
            thread::yield_now();
        }
        let drain_ms = start.elapsed().as_millis() as u64;

        // Dropping the sender fails any submit racing with shutdown.
        self.cmd_tx.take();

        let tick_joined = match handle.join() {
            Ok(sim) => {
                *self
                    .recovered
                    .get_mut()
                    .unwrap_or_else(PoisonError::into_inner) = Some(sim);
                true
            }
            Err(_) => {
                warn!("tick thread panicked; simulator lost");
                false
            }
        };

        let total_ms = start.elapsed().as_millis() as u64;
        debug!("shutdown in {total_ms}ms (drain {drain_ms}ms)");
        ShutdownReport {
            total_ms,
            drain_ms,
            tick_joined,
        }
    }

    /// Shut down and hand back the simulator with its final state.
    pub fn into_simulator(mut self) -> Result<Simulator, ConfigError> {
        self.shutdown();
        self.recovered
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(ConfigError::EngineRecoveryFailed)
    }
}

impl Drop for RealtimeSimulator {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_core::{Cell, GenerationId};

    fn config(tick_rate_hz: f64) -> SimConfig {
        SimConfig {
            width: 10,
            height: 10,
            tick_rate_hz,
            ..SimConfig::default()
        }
    }

    fn wait_for(mut cond: impl FnMut() -> bool, within: Duration) -> bool {
        let deadline = Instant::now() + within;
        while !cond() {
            if Instant::now() > deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
        true
    }

    #[test]
    fn lifecycle_start_and_shutdown() {
        let mut rt = RealtimeSimulator::new(config(60.0)).unwrap();
        assert!(wait_for(
            || rt.latest_snapshot().is_some(),
            Duration::from_secs(2)
        ));
        assert!(!rt.is_running());
        let report = rt.shutdown();
        assert!(report.tick_joined);
        assert_eq!(rt.submit(vec![Command::ToggleRun]), Err(SubmitError::Shutdown));
    }

    #[test]
    fn submit_applies_before_reply() {
        let rt = RealtimeSimulator::new(config(1.0)).unwrap();
        let receipts = rt
            .submit(vec![
                Command::Set {
                    x: 2,
                    y: 3,
                    state: Cell::Alive,
                },
                Command::Set {
                    x: -1,
                    y: 0,
                    state: Cell::Alive,
                },
            ])
            .unwrap();
        assert!(receipts[0].accepted);
        assert!(!receipts[1].accepted);

        let snap = rt.latest_snapshot().unwrap();
        assert_eq!(snap.get(2, 3), Ok(Cell::Alive));
        assert_eq!(snap.generation(), GenerationId(0));
    }

    #[test]
    fn paused_thread_does_not_advance() {
        let mut rt = RealtimeSimulator::new(config(200.0)).unwrap();
        rt.submit(vec![Command::Toggle { x: 5, y: 5 }]).unwrap();
        thread::sleep(Duration::from_millis(50));
        let snap = rt.latest_snapshot().unwrap();
        assert_eq!(snap.generation(), GenerationId(0));
        assert_eq!(snap.population(), 1);
        rt.shutdown();
    }

    #[test]
    fn drop_triggers_shutdown() {
        let rt = RealtimeSimulator::new(config(60.0)).unwrap();
        thread::sleep(Duration::from_millis(20));
        drop(rt);
        // If this doesn't hang, shutdown worked.
    }

    #[test]
    fn shutdown_fast_with_slow_tick_rate() {
        let mut rt = RealtimeSimulator::new(config(0.5)).unwrap();
        rt.submit(vec![Command::ToggleRun]).unwrap();
        // Give the tick thread time to enter its 2-second budget sleep.
        thread::sleep(Duration::from_millis(50));

        let start = Instant::now();
        let report = rt.shutdown();
        let wall_ms = start.elapsed().as_millis();
        assert!(
            wall_ms < 500,
            "shutdown took {wall_ms}ms with 0.5Hz tick rate (drain={}ms)",
            report.drain_ms
        );
        assert!(report.tick_joined);
    }

    #[test]
    fn unusable_tick_rate_is_an_error_not_a_panic() {
        for rate in [1e-300, 1e-19] {
            assert!(matches!(
                RealtimeSimulator::new(config(rate)),
                Err(ConfigError::InvalidTickRate { .. })
            ));
        }
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut rt = RealtimeSimulator::new(config(60.0)).unwrap();
        assert!(rt.shutdown().tick_joined);
        let second = rt.shutdown();
        assert!(second.tick_joined);
        assert_eq!(second.total_ms, 0);
    }
}
