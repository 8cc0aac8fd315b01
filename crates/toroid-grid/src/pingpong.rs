//! Two cell buffers that alternate between published and staging roles.

use toroid_core::Cell;

/// Double-buffered cell storage.
///
/// One buffer is *published* (readable, and the target of point edits);
/// the other is *staging* (the write target of the next sweep). After a
/// full sweep [`swap`](PingPong::swap) flips the roles by toggling a flag,
/// so the old published buffer is reused as the next staging buffer.
///
/// ```text
/// buffer_a: Vec<Cell>  ←─── published (b_is_staging) / staging (!b_is_staging)
/// buffer_b: Vec<Cell>  ←─── staging (b_is_staging) / published (!b_is_staging)
/// ```
#[derive(Clone, Debug)]
pub(crate) struct PingPong {
    buffer_a: Vec<Cell>,
    buffer_b: Vec<Cell>,
    /// Which buffer is currently staging (true = B staging, A published).
    b_is_staging: bool,
}

impl PingPong {
    /// Allocate both buffers with `len` dead cells.
    pub fn new(len: usize) -> Self {
        Self {
            buffer_a: vec![Cell::Dead; len],
            buffer_b: vec![Cell::Dead; len],
            b_is_staging: true,
        }
    }

    /// The readable buffer.
    pub fn published(&self) -> &[Cell] {
        if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Mutable access to the readable buffer, for point edits.
    pub fn published_mut(&mut self) -> &mut [Cell] {
        if self.b_is_staging {
            &mut self.buffer_a
        } else {
            &mut self.buffer_b
        }
    }

    /// Borrow `(published, staging)` at once for a sweep.
    pub fn split(&mut self) -> (&[Cell], &mut [Cell]) {
        if self.b_is_staging {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        }
    }

    /// Publish the staging buffer; the old published buffer becomes staging.
    pub fn swap(&mut self) {
        self.b_is_staging = !self.b_is_staging;
    }

    /// Overwrite every cell in both buffers.
    pub fn fill(&mut self, cell: Cell) {
        self.buffer_a.fill(cell);
        self.buffer_b.fill(cell);
    }
}
