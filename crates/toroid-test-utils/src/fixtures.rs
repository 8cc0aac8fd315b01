//! Grid construction helpers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use toroid_core::Cell;
use toroid_grid::GridState;

use crate::patterns::Pattern;

/// Build a grid from rows of `#` (alive) and `.` (dead).
///
/// Blank lines and surrounding whitespace are ignored. The grid is sized
/// from the text and clamped like any other grid, so the text should be
/// at least 10x10 to round-trip exactly.
///
/// # Panics
///
/// On characters other than `#` and `.`, or on ragged rows.
pub fn grid_from_ascii(text: &str) -> GridState {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut grid = GridState::new(width as i64, height as i64).expect("fixture grid");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged row {y} in fixture");
        for (x, ch) in row.chars().enumerate() {
            let state = match ch {
                '#' => Cell::Alive,
                '.' => Cell::Dead,
                other => panic!("unexpected fixture character {other:?}"),
            };
            grid.set(x as i32, y as i32, state).expect("fixture cell in range");
        }
    }
    grid
}

/// Stamp `pattern` alive with its top-left corner at `(x, y)`, wrapping
/// around the torus edges.
pub fn place(grid: &mut GridState, pattern: &Pattern, x: i32, y: i32) {
    let dims = grid.dimensions();
    let (w, h) = (dims.width() as i32, dims.height() as i32);
    for &(dx, dy) in pattern.cells {
        let px = (x + dx).rem_euclid(w);
        let py = (y + dy).rem_euclid(h);
        grid.set(px, py, Cell::Alive).expect("wrapped coordinate in range");
    }
}

/// Coordinates of every live cell in row-major order.
pub fn live_cells(grid: &GridState) -> Vec<(i32, i32)> {
    let w = grid.dimensions().width() as usize;
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| ((i % w) as i32, (i / w) as i32))
        .collect()
}

/// Deterministic random source for reproducible fills.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, GLIDER};

    #[test]
    fn ascii_round_trip() {
        let grid = grid_from_ascii(
            "
            #.........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            .........#
            ",
        );
        assert_eq!(live_cells(&grid), vec![(0, 0), (9, 9)]);
    }

    #[test]
    fn place_wraps_edges() {
        let mut grid = GridState::new(10, 10).unwrap();
        place(&mut grid, &BLINKER, 8, 0);
        assert_eq!(live_cells(&grid), vec![(0, 0), (8, 0), (9, 0)]);
    }

    #[test]
    fn place_glider() {
        let mut grid = GridState::new(10, 10).unwrap();
        place(&mut grid, &GLIDER, 2, 2);
        assert_eq!(grid.population(), 5);
    }
}
