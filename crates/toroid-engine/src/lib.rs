//! Frame drivers for Toroid simulations.
//!
//! Two ways to drive a [`GridState`](toroid_grid::GridState):
//!
//! - [`Simulator`]: lockstep. The host owns it and calls
//!   [`tick()`](Simulator::tick) from its own frame loop. Exclusive
//!   `&mut self` access keeps edits and generation sweeps from
//!   interleaving.
//! - [`RealtimeSimulator`]: a background `toroid-tick` thread owns a
//!   `Simulator`, ticks it at the configured rate and publishes an
//!   [`Arc<GridSnapshot>`](toroid_grid::GridSnapshot) after every change.
//!   Hosts submit [`Command`](toroid_core::Command) batches and read the
//!   latest snapshot from any thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod metrics;
pub mod realtime;
pub mod simulator;
mod slot;
mod tick_thread;

pub use clock::SimulationClock;
pub use config::{ConfigError, SimConfig};
pub use metrics::StepMetrics;
pub use realtime::{RealtimeSimulator, ShutdownReport, SubmitError};
pub use simulator::Simulator;
