//! The authoritative grid and its generation step.

use log::{debug, info, trace};
use rand::Rng;
use toroid_core::{Cell, Dimensions, GenerationId, GridError};

use crate::pingpong::PingPong;
use crate::rule::next_state;
use crate::snapshot::GridSnapshot;
use crate::torus::Torus;

/// Live probability used when none is configured.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.3;

/// Cell transitions produced by one [`GridState::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    /// Cells that went from dead to alive.
    pub births: usize,
    /// Cells that went from alive to dead.
    pub deaths: usize,
    /// Live cells in the new generation.
    pub population: usize,
}

/// A dense, double-buffered toroidal grid of [`Cell`]s.
///
/// Point edits write the published buffer and are visible immediately to
/// [`get`](Self::get) and to the next [`advance`](Self::advance).
/// `advance` sweeps the published buffer into the staging buffer and then
/// swaps them, so every successor is computed from one consistent
/// generation.
///
/// # Examples
///
/// ```
/// use toroid_core::Cell;
/// use toroid_grid::GridState;
///
/// let mut grid = GridState::new(10, 10).unwrap();
/// for x in 4..7 {
///     grid.set(x, 5, Cell::Alive).unwrap();
/// }
/// grid.advance();
/// assert_eq!(grid.get(5, 4), Ok(Cell::Alive));
/// assert_eq!(grid.get(4, 5), Ok(Cell::Dead));
/// ```
#[derive(Clone, Debug)]
pub struct GridState {
    dims: Dimensions,
    torus: Torus,
    buffers: PingPong,
    generation: GenerationId,
}

impl GridState {
    /// Create an all-dead grid. Each dimension is clamped into
    /// `[Dimensions::MIN, Dimensions::MAX]`.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        let dims = Dimensions::new(width, height)?;
        Ok(Self::with_dimensions(dims))
    }

    /// Create an all-dead grid of already-clamped dimensions.
    pub fn with_dimensions(dims: Dimensions) -> Self {
        Self {
            dims,
            torus: Torus::new(dims),
            buffers: PingPong::new(dims.cell_count()),
            generation: GenerationId::default(),
        }
    }

    /// The cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        let i = self.dims.index_of(x, y)?;
        Ok(self.buffers.published()[i])
    }

    /// Overwrite the cell at `(x, y)`. Out-of-range coordinates leave the
    /// grid unchanged.
    pub fn set(&mut self, x: i32, y: i32, state: Cell) -> Result<(), GridError> {
        let i = self.dims.index_of(x, y)?;
        self.buffers.published_mut()[i] = state;
        Ok(())
    }

    /// Flip the cell at `(x, y)` and return its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Cell, GridError> {
        let i = self.dims.index_of(x, y)?;
        let cell = &mut self.buffers.published_mut()[i];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Set every cell independently alive with probability
    /// `live_probability`, dead otherwise.
    ///
    /// The probability is clamped into `[0, 1]`; NaN counts as 0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, live_probability: f64) {
        let p = if live_probability.is_nan() {
            0.0
        } else {
            live_probability.clamp(0.0, 1.0)
        };
        for cell in self.buffers.published_mut() {
            *cell = Cell::from(rng.random::<f64>() < p);
        }
        debug!(
            "randomized {} grid at p={p}: population {}",
            self.dims,
            self.population()
        );
    }

    /// Reallocate at a new (clamped) size with every cell dead and the
    /// generation counter reset.
    pub fn resize(&mut self, width: i64, height: i64) {
        let dims = Dimensions::clamped(width, height);
        if i64::from(dims.width()) != width || i64::from(dims.height()) != height {
            info!("resize {width}x{height} clamped to {dims}");
        } else {
            info!("resize to {dims}");
        }
        *self = Self::with_dimensions(dims);
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.buffers.fill(Cell::Dead);
        self.generation = GenerationId::default();
    }

    /// Compute the next generation and make it current.
    pub fn advance(&mut self) -> AdvanceStats {
        let torus = self.torus;
        let mut stats = AdvanceStats::default();
        let (published, staging) = self.buffers.split();

        for y in 0..torus.height() {
            for x in 0..torus.width() {
                let i = torus.index(x, y);
                let before = published[i];
                let after = next_state(before, torus.live_neighbours(published, x, y));
                staging[i] = after;
                match (before, after) {
                    (Cell::Dead, Cell::Alive) => stats.births += 1,
                    (Cell::Alive, Cell::Dead) => stats.deaths += 1,
                    _ => {}
                }
                stats.population += after.as_u8() as usize;
            }
        }

        self.buffers.swap();
        self.generation = self.generation.next();
        trace!(
            "generation {}: +{} -{} = {}",
            self.generation,
            stats.births,
            stats.deaths,
            stats.population
        );
        stats
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.buffers.published().iter().filter(|c| c.is_alive()).count()
    }

    /// Current grid size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of completed [`advance`](Self::advance) calls since the last
    /// clear or resize.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[Cell] {
        self.buffers.published()
    }

    /// Copy the current generation into an owned [`GridSnapshot`].
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.dims, self.cells().to_vec(), self.generation)
    }

    /// FNV-1a hash of dimensions and cells.
    pub fn fingerprint(&self) -> u64 {
        crate::hash::fingerprint(self.dims, self.cells())
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::with_dimensions(Dimensions::default())
    }
}
