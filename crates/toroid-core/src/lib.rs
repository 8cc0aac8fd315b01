//! Core types for the Toroid cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell state, grid dimensions, generation counter, control
//! commands and the error types shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod command;
pub mod dims;
pub mod error;
pub mod id;

pub use cell::Cell;
pub use command::{Command, Receipt};
pub use dims::Dimensions;
pub use error::GridError;
pub use id::GenerationId;
