//! Control commands and receipts for queued simulator input.
//!
//! Threaded hosts do not mutate the grid directly. They submit
//! [`Command`] batches which the owning thread applies in order between
//! generation sweeps, answering each with a [`Receipt`].

use crate::cell::Cell;
use crate::error::GridError;

/// A single queued operation against a simulator.
///
/// # Examples
///
/// ```
/// use toroid_core::{Cell, Command};
///
/// let batch = vec![
///     Command::Set { x: 3, y: 4, state: Cell::Alive },
///     Command::Toggle { x: 5, y: 5 },
///     Command::ToggleRun,
/// ];
/// assert!(batch[0].is_edit());
/// assert!(!batch[2].is_edit());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Write `state` at `(x, y)`.
    Set {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
        /// New cell state.
        state: Cell,
    },
    /// Flip the cell at `(x, y)`.
    Toggle {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// Start a drag stroke at `(x, y)`; toggles that cell.
    BeginStroke {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// Extend the active stroke to `(x, y)`; paints the cell alive.
    StrokeTo {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// Finish the active stroke.
    EndStroke,
    /// Flip between running and paused.
    ToggleRun,
    /// Refill the grid at the configured live probability.
    Randomize,
    /// Pause and clear the grid.
    Reset,
    /// Reallocate the grid at a new (clamped) size.
    Resize {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
}

impl Command {
    /// Whether this command targets a single cell coordinate.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Set { .. } | Self::Toggle { .. } | Self::BeginStroke { .. } | Self::StrokeTo { .. }
        )
    }
}

/// Outcome of applying one [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Index of the command within its submitted batch.
    pub command_index: usize,
    /// Whether the command was applied.
    pub accepted: bool,
    /// Why the command was rejected, if it was.
    pub reason: Option<GridError>,
}

impl Receipt {
    /// Receipt for an applied command.
    pub fn accepted(command_index: usize) -> Self {
        Self {
            command_index,
            accepted: true,
            reason: None,
        }
    }

    /// Receipt for a rejected command.
    pub fn rejected(command_index: usize, reason: GridError) -> Self {
        Self {
            command_index,
            accepted: false,
            reason: Some(reason),
        }
    }
}

impl From<(usize, Result<(), GridError>)> for Receipt {
    fn from((command_index, result): (usize, Result<(), GridError>)) -> Self {
        match result {
            Ok(()) => Self::accepted(command_index),
            Err(e) => Self::rejected(command_index, e),
        }
    }
}
