//! Test utilities for Toroid development.
//!
//! Provides canonical Life [`patterns`] and grid [`fixtures`]: ASCII
//! grid construction, pattern placement and seeded random sources.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod patterns;

pub use fixtures::{grid_from_ascii, live_cells, place, seeded_rng};
pub use patterns::{Pattern, BEACON, BLINKER, BLOCK, GLIDER, PATTERNS, TOAD};
