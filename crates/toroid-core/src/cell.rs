//! Binary cell state.

use std::fmt;
use std::ops::Not;

/// State of a single grid cell.
///
/// Cells carry no metadata beyond alive/dead. The `u8` representation
/// lets neighbour counting sum states directly.
///
/// # Examples
///
/// ```
/// use toroid_core::Cell;
///
/// assert_eq!(!Cell::Dead, Cell::Alive);
/// assert_eq!(Cell::from(true), Cell::Alive);
/// assert!(Cell::Alive.is_alive());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Dead = 0,
    /// Populated cell.
    Alive = 1,
}

impl Cell {
    /// Returns `true` for [`Cell::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// `1` when alive, `0` when dead.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Not for Cell {
    type Output = Cell;

    fn not(self) -> Cell {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> bool {
        cell.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "dead"),
            Self::Alive => write!(f, "alive"),
        }
    }
}
