//! The B3/S23 transition rule.

use toroid_core::Cell;

/// Successor state of a cell given its live Moore-neighbour count.
///
/// A live cell survives with 2 or 3 live neighbours and dies otherwise
/// (isolation or overcrowding). A dead cell is born with exactly 3.
#[inline]
pub fn next_state(cell: Cell, live_neighbours: u8) -> Cell {
    match (cell, live_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,
    }
}
