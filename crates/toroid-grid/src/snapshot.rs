//! Owned, immutable copies of a grid generation.

use std::fmt;

use toroid_core::{Cell, Dimensions, GenerationId, GridError};

/// A frozen copy of one grid generation.
///
/// Renderers hold a snapshot instead of borrowing the live grid, so the
/// main view and the overview display always draw the same generation
/// even when the simulator advances in between.
///
/// The [`Display`](fmt::Display) impl draws one text row per grid row,
/// `#` for alive and `.` for dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    dims: Dimensions,
    cells: Vec<Cell>,
    generation: GenerationId,
}

impl GridSnapshot {
    pub(crate) fn new(dims: Dimensions, cells: Vec<Cell>, generation: GenerationId) -> Self {
        debug_assert_eq!(cells.len(), dims.cell_count());
        Self {
            dims,
            cells,
            generation,
        }
    }

    /// Grid size at capture time.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Generation at capture time.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        Ok(self.cells[self.dims.index_of(x, y)?])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dims.width() as usize)
    }

    /// FNV-1a hash of dimensions and cells.
    pub fn fingerprint(&self) -> u64 {
        crate::hash::fingerprint(self.dims, &self.cells)
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
