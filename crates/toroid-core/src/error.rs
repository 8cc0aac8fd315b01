//! Error types for grid access.

use std::error::Error;
use std::fmt;

/// Errors from grid construction or cell access.
///
/// Callers that map external input onto the grid are expected to
/// validate coordinates first; a failing call never modifies state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the current grid.
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Grid width at the time of the call.
        width: u32,
        /// Grid height at the time of the call.
        height: u32,
    },
    /// The requested size cannot be clamped into a usable grid.
    InvalidDimensions {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds() {
        let e = GridError::OutOfBounds {
            x: -1,
            y: 4,
            width: 10,
            height: 20,
        };
        assert_eq!(
            e.to_string(),
            "coordinate (-1, 4) out of bounds: [0, 10) x [0, 20)"
        );
    }

    #[test]
    fn display_invalid_dimensions() {
        let e = GridError::InvalidDimensions {
            width: 0,
            height: -3,
        };
        assert_eq!(e.to_string(), "invalid grid dimensions 0x-3");
    }
}
