//! Grid dimensions and the clamp policy.

use crate::error::GridError;
use std::fmt;

/// Width and height of a toroidal grid, always within
/// `[Dimensions::MIN, Dimensions::MAX]` on both axes.
///
/// Requests outside the range are clamped rather than rejected: a
/// persisted size of `500` becomes `100`, a size of `0` becomes `10`.
///
/// # Examples
///
/// ```
/// use toroid_core::Dimensions;
///
/// let dims = Dimensions::clamped(4, 250);
/// assert_eq!((dims.width(), dims.height()), (10, 100));
/// assert_eq!(dims.cell_count(), 1000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Smallest permitted extent on either axis.
    pub const MIN: u32 = 10;

    /// Largest permitted extent on either axis.
    pub const MAX: u32 = 100;

    /// Clamp `width` and `height` independently into `[MIN, MAX]`.
    pub fn clamped(width: i64, height: i64) -> Self {
        Self {
            width: clamp_axis(width),
            height: clamp_axis(height),
        }
    }

    /// Clamp, then check that the result describes a usable grid.
    ///
    /// With the current clamp range this cannot fail; the check guards
    /// the invariant that every grid has at least one cell.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        let dims = Self::clamped(width, height);
        if dims.width == 0 || dims.height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(dims)
    }

    /// Number of columns.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub const fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major flat index of `(x, y)`.
    ///
    /// Returns `Err(GridError::OutOfBounds)` for coordinates outside the grid.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn clamp_axis(value: i64) -> u32 {
    value.clamp(Dimensions::MIN as i64, Dimensions::MAX as i64) as u32
}
