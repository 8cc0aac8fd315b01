//! Toroid: a toroidal Game of Life simulation core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Toroid sub-crates. Adding `toroid` as a single dependency is
//! sufficient for most hosts.
//!
//! # Quick start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! let mut sim = Simulator::new(SimConfig {
//!     width: 10,
//!     height: 10,
//!     ..SimConfig::default()
//! })
//! .unwrap();
//!
//! // A block straddling the corner seam is a still-life on the torus.
//! for (x, y) in [(0, 0), (9, 0), (0, 9), (9, 9)] {
//!     sim.edit(x, y, Cell::Alive).unwrap();
//! }
//! sim.toggle_run();
//! let metrics = sim.tick().unwrap();
//! assert_eq!(metrics.population, 4);
//! assert_eq!(metrics.generation, GenerationId(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toroid-core` | cells, dimensions, commands, errors |
//! | [`grid`] | `toroid-grid` | double-buffered grid, rule, snapshots |
//! | [`engine`] | `toroid-engine` | lockstep and realtime simulators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`toroid-core`).
pub use toroid_core as types;

/// Grid storage and the transition rule (`toroid-grid`).
///
/// [`grid::GridState`] can be driven directly when no run clock is needed.
pub use toroid_grid as grid;

/// Frame drivers (`toroid-engine`).
///
/// [`engine::Simulator`] for host-driven frame loops,
/// [`engine::RealtimeSimulator`] for a background tick thread.
pub use toroid_engine as engine;

/// Common imports for typical Toroid usage.
///
/// ```rust
/// use toroid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use toroid_core::{Cell, Command, Dimensions, GenerationId, Receipt};

    // Errors
    pub use toroid_core::GridError;
    pub use toroid_engine::{ConfigError, SubmitError};

    // Grid
    pub use toroid_grid::{GridSnapshot, GridState};

    // Engine
    pub use toroid_engine::{
        RealtimeSimulator, ShutdownReport, SimConfig, SimulationClock, Simulator, StepMetrics,
    };
}
