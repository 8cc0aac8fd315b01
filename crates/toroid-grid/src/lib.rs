//! Double-buffered toroidal grid storage for Toroid.
//!
//! # Architecture
//!
//! ```text
//! GridState
//! ├── Dimensions (clamped to [10, 100] per axis)
//! ├── Torus (wraparound neighbour addressing)
//! └── PingPong
//!     ├── buffer_a ←── published / staging (roles swap every advance)
//!     └── buffer_b ←── staging / published
//! ```
//!
//! [`GridState::advance`] reads every neighbourhood from the published
//! buffer, writes successors into the staging buffer, then swaps the two
//! roles. No cell is ever read from a partially written generation and
//! no allocation happens after construction or resize.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hash;
mod pingpong;
pub mod rule;
pub mod snapshot;
pub mod torus;

pub use grid::{AdvanceStats, GridState, DEFAULT_LIVE_PROBABILITY};
pub use snapshot::GridSnapshot;
pub use torus::Torus;
