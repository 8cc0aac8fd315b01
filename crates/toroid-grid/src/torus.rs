//! Toroidal addressing for the 8-connected (Moore) neighbourhood.

use toroid_core::{Cell, Dimensions};

/// A two-dimensional torus with 8-connected neighbourhood.
///
/// Each cell has coordinate `(x, y)` with `x` the column and `y` the row.
/// Both axes wrap independently: the left edge neighbours the right edge
/// and the top edge neighbours the bottom edge, so every cell has exactly
/// eight neighbours.
///
/// # Examples
///
/// ```
/// use toroid_core::{Cell, Dimensions};
/// use toroid_grid::Torus;
///
/// let torus = Torus::new(Dimensions::clamped(10, 12));
/// let mut cells = vec![Cell::Dead; 120];
/// cells[torus.index(9, 11)] = Cell::Alive; // NW of (0, 0) across both edges
/// cells[torus.index(9, 0)] = Cell::Alive; // W
/// cells[torus.index(0, 11)] = Cell::Alive; // N
/// assert_eq!(torus.live_neighbours(&cells, 0, 0), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Torus {
    width: u32,
    height: u32,
}

impl Torus {
    /// Build the torus for a grid of the given size.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            width: dims.width(),
            height: dims.height(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major flat index of an in-range coordinate.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Count live cells among the 8 wrapped neighbours of `(x, y)`.
    ///
    /// `cells` must be a row-major buffer of `width * height` cells.
    pub fn live_neighbours(&self, cells: &[Cell], x: u32, y: u32) -> u8 {
        debug_assert_eq!(cells.len(), (self.width as usize) * (self.height as usize));
        let left = if x == 0 { self.width - 1 } else { x - 1 };
        let right = if x + 1 == self.width { 0 } else { x + 1 };
        let up = if y == 0 { self.height - 1 } else { y - 1 };
        let down = if y + 1 == self.height { 0 } else { y + 1 };

        let mut count = 0u8;
        for ny in [up, y, down] {
            for nx in [left, x, right] {
                if nx == x && ny == y {
                    continue;
                }
                count += cells[self.index(nx, ny)].as_u8();
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// All 8 offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
    const OFFSETS_8: [(i32, i32); 8] = [
        (-1, 0),
        (1, 0),
        (0, -1),
        (0, 1),
        (-1, -1),
        (1, -1),
        (-1, 1),
        (1, 1),
    ];

    fn torus(w: i64, h: i64) -> Torus {
        Torus::new(Dimensions::clamped(w, h))
    }

    fn wrap_axis(val: i64, len: u32) -> u32 {
        let n = len as i64;
        (((val % n) + n) % n) as u32
    }

    /// The 8 wrapped neighbours of `(x, y)` in `OFFSETS_8` order.
    fn neighbours(t: &Torus, x: u32, y: u32) -> [(u32, u32); 8] {
        OFFSETS_8.map(|(dx, dy)| {
            (
                wrap_axis(x as i64 + dx as i64, t.width()),
                wrap_axis(y as i64 + dy as i64, t.height()),
            )
        })
    }

    // ── Wrap tests ──────────────────────────────────────────────

    #[test]
    fn wrap_axis_is_non_negative() {
        assert_eq!(wrap_axis(-1, 10), 9);
        assert_eq!(wrap_axis(-11, 10), 9);
        assert_eq!(wrap_axis(10, 10), 0);
        assert_eq!(wrap_axis(25, 10), 5);
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let t = torus(10, 10);
        let n = neighbours(&t, 5, 5);
        for (dx, dy) in OFFSETS_8 {
            let expected = ((5 + dx) as u32, (5 + dy) as u32);
            assert!(n.contains(&expected));
        }
        assert!(!n.contains(&(5, 5)));
    }

    #[test]
    fn neighbours_wrap_far_corner() {
        let t = torus(12, 15);
        let n = neighbours(&t, 11, 14);
        assert!(n.contains(&(0, 0))); // SE wraps on both axes
        assert!(n.contains(&(0, 14))); // E wraps
        assert!(n.contains(&(11, 0))); // S wraps
    }

    #[test]
    fn live_neighbours_counts_diagonal_wrap() {
        let t = torus(10, 10);
        let mut cells = vec![Cell::Dead; 100];
        cells[t.index(9, 9)] = Cell::Alive;
        assert_eq!(t.live_neighbours(&cells, 0, 0), 1);

        let mut cells = vec![Cell::Dead; 100];
        cells[t.index(0, 0)] = Cell::Alive;
        assert_eq!(t.live_neighbours(&cells, 9, 9), 1);
    }

    #[test]
    fn live_neighbours_excludes_self() {
        let t = torus(10, 10);
        let mut cells = vec![Cell::Alive; 100];
        assert_eq!(t.live_neighbours(&cells, 3, 3), 8);
        cells[t.index(3, 3)] = Cell::Dead;
        assert_eq!(t.live_neighbours(&cells, 3, 3), 8);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(
            w in 10i64..=30,
            h in 10i64..=30,
            x in 0u32..30,
            y in 0u32..30,
        ) {
            let t = torus(w, h);
            let x = x % t.width();
            let y = y % t.height();
            for nb in neighbours(&t, x, y) {
                prop_assert!(
                    neighbours(&t, nb.0, nb.1).contains(&(x, y)),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb, (x, y),
                );
            }
        }

        #[test]
        fn live_neighbours_matches_offset_sum(
            seed_bits in proptest::collection::vec(any::<bool>(), 100),
            x in 0u32..10,
            y in 0u32..10,
        ) {
            let t = torus(10, 10);
            let cells: Vec<Cell> = seed_bits.into_iter().map(Cell::from).collect();
            let expected: u8 = neighbours(&t, x, y)
                .iter()
                .map(|&(nx, ny)| cells[t.index(nx, ny)].as_u8())
                .sum();
            prop_assert_eq!(t.live_neighbours(&cells, x, y), expected);
        }
    }
}
