//! Lockstep (synchronous) simulator.
//!
//! [`Simulator`] owns the grid, the run clock and the random source. The
//! host's frame loop calls [`tick()`](Simulator::tick); input handlers
//! call the edit and stroke methods between ticks. Every mutating method
//! takes `&mut self`, so an edit can never land in the middle of a
//! generation sweep.

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use toroid_core::{Cell, Command, GridError, Receipt};
use toroid_grid::{GridSnapshot, GridState};

use crate::clock::SimulationClock;
use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;

// Compile-time assertion: Simulator must be Send so the realtime driver
// can move it onto its tick thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulator>();
    }
};

/// Single-owner Game of Life simulator.
///
/// Starts paused. While paused, [`tick`](Self::tick) is a no-op; edits,
/// [`randomize`](Self::randomize) and [`reset`](Self::reset) work in
/// either state.
///
/// # Examples
///
/// ```
/// use toroid_core::Cell;
/// use toroid_engine::{SimConfig, Simulator};
///
/// let mut sim = Simulator::new(SimConfig::default())?;
/// sim.edit(10, 10, Cell::Alive)?;
/// sim.edit(11, 10, Cell::Alive)?;
/// sim.edit(12, 10, Cell::Alive)?;
///
/// assert!(sim.tick().is_none()); // paused
/// sim.toggle_run();
/// let metrics = sim.tick().expect("running");
/// assert_eq!(metrics.population, 3);
/// assert_eq!(sim.grid().get(11, 9), Ok(Cell::Alive));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Simulator {
    grid: GridState,
    clock: SimulationClock,
    live_probability: f64,
    rng: Box<dyn RngCore + Send>,
    /// Last cell written by the active drag stroke.
    stroke: Option<(i32, i32)>,
    last_metrics: Option<StepMetrics>,
}

impl Simulator {
    /// Create a paused simulator with an OS-seeded random source.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a paused simulator drawing randomness from `rng`.
    pub fn with_rng<R>(config: SimConfig, rng: R) -> Result<Self, ConfigError>
    where
        R: RngCore + Send + 'static,
    {
        let dims = config.validate()?;
        info!(
            "simulator {dims} at {} Hz, live probability {}",
            config.tick_rate_hz, config.live_probability
        );
        Ok(Self {
            grid: GridState::with_dimensions(dims),
            clock: SimulationClock::new(config.tick_rate_hz),
            live_probability: config.live_probability,
            rng: Box::new(rng),
            stroke: None,
            last_metrics: None,
        })
    }

    // ── Run control ─────────────────────────────────────────────

    /// Flip between running and paused. Returns the new run state.
    pub fn toggle_run(&mut self) -> bool {
        let running = !self.clock.is_running();
        self.clock.set_running(running);
        info!(
            "{} at generation {}",
            if running { "running" } else { "paused" },
            self.grid.generation()
        );
        running
    }

    /// Advance one generation if running.
    ///
    /// Returns `None` without touching the grid while paused.
    pub fn tick(&mut self) -> Option<StepMetrics> {
        if !self.clock.is_running() {
            return None;
        }
        let start = Instant::now();
        let stats = self.grid.advance();
        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            generation: self.grid.generation(),
            births: stats.births,
            deaths: stats.deaths,
            population: stats.population,
        };
        self.last_metrics = Some(metrics);
        Some(metrics)
    }

    /// Pause and kill every cell, keeping the current size.
    pub fn reset(&mut self) {
        self.clock.set_running(false);
        self.grid.clear();
        self.stroke = None;
        self.last_metrics = None;
        info!("reset {} grid", self.grid.dimensions());
    }

    /// Reallocate the grid at a new (clamped) size. All cells die; the
    /// run state is kept.
    pub fn resize(&mut self, width: i64, height: i64) {
        self.grid.resize(width, height);
        self.stroke = None;
        self.last_metrics = None;
    }

    /// Refill the grid at the configured live probability.
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut *self.rng, self.live_probability);
    }

    // ── Edits ───────────────────────────────────────────────────

    /// Set the cell at `(x, y)`.
    pub fn edit(&mut self, x: i32, y: i32, state: Cell) -> Result<(), GridError> {
        self.grid.set(x, y, state)
    }

    /// Flip the cell at `(x, y)` and return its new state.
    pub fn edit_toggle(&mut self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.grid.toggle(x, y)
    }

    /// Start a drag stroke: flip the pressed cell and remember it.
    pub fn begin_stroke(&mut self, x: i32, y: i32) -> Result<Cell, GridError> {
        let cell = self.grid.toggle(x, y)?;
        self.stroke = Some((x, y));
        Ok(cell)
    }

    /// Extend the active stroke to `(x, y)`, painting it alive.
    ///
    /// Returns `Ok(true)` if a cell was written. Staying on the last
    /// stroke cell, or calling this with no active stroke, writes nothing.
    pub fn stroke_to(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        match self.stroke {
            Some(last) if last != (x, y) => {
                self.grid.set(x, y, Cell::Alive)?;
                self.stroke = Some((x, y));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Finish the active stroke.
    pub fn end_stroke(&mut self) {
        self.stroke = None;
    }

    /// Whether a drag stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    // ── Commands ────────────────────────────────────────────────

    /// Apply a single queued command.
    pub fn apply(&mut self, command: Command) -> Result<(), GridError> {
        match command {
            Command::Set { x, y, state } => self.edit(x, y, state),
            Command::Toggle { x, y } => self.edit_toggle(x, y).map(drop),
            Command::BeginStroke { x, y } => self.begin_stroke(x, y).map(drop),
            Command::StrokeTo { x, y } => self.stroke_to(x, y).map(drop),
            Command::EndStroke => {
                self.end_stroke();
                Ok(())
            }
            Command::ToggleRun => {
                self.toggle_run();
                Ok(())
            }
            Command::Randomize => {
                self.randomize();
                Ok(())
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::Resize { width, height } => {
                self.resize(width, height);
                Ok(())
            }
        }
    }

    /// Apply `commands` in order, one [`Receipt`] per command.
    ///
    /// A rejected command does not stop the rest of the batch.
    pub fn submit(&mut self, commands: Vec<Command>) -> Vec<Receipt> {
        commands
            .into_iter()
            .enumerate()
            .map(|(i, command)| {
                let result = self.apply(command);
                if let Err(e) = &result {
                    debug!("command {i} ({command:?}) rejected: {e}");
                }
                Receipt::from((i, result))
            })
            .collect()
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The authoritative grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Run state and tick rate.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Configured probability used by [`randomize`](Self::randomize).
    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }

    /// Owned copy of the current generation.
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Metrics from the most recent tick since the last reset or resize.
    pub fn last_metrics(&self) -> Option<StepMetrics> {
        self.last_metrics
    }
}
