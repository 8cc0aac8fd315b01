//! Benchmark profiles for the Toroid simulation core.
//!
//! - [`reference_profile`]: 50x50 grid seeded at the default density
//! - [`stress_profile`]: 100x100 grid, the largest permitted size
//! - [`seeded_grid`]: any size, deterministic fill

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use toroid_engine::{ConfigError, SimConfig, Simulator};
use toroid_grid::{GridState, DEFAULT_LIVE_PROBABILITY};

/// A grid of the given size filled from `seed` at the default density.
pub fn seeded_grid(width: i64, height: i64, seed: u64) -> GridState {
    let mut grid = GridState::with_dimensions(toroid_core::Dimensions::clamped(width, height));
    grid.randomize(&mut ChaCha8Rng::seed_from_u64(seed), DEFAULT_LIVE_PROBABILITY);
    grid
}

/// Reference profile: a running 50x50 simulator, randomized from `seed`.
pub fn reference_profile(seed: u64) -> Result<Simulator, ConfigError> {
    profile(50, seed)
}

/// Stress profile: a running 100x100 simulator, randomized from `seed`.
pub fn stress_profile(seed: u64) -> Result<Simulator, ConfigError> {
    profile(100, seed)
}

fn profile(side: i64, seed: u64) -> Result<Simulator, ConfigError> {
    let config = SimConfig {
        width: side,
        height: side,
        ..SimConfig::default()
    };
    let mut sim = Simulator::with_rng(config, ChaCha8Rng::seed_from_u64(seed))?;
    sim.randomize();
    sim.toggle_run();
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(42).unwrap();
        let b = reference_profile(42).unwrap();
        assert_eq!(a.grid().fingerprint(), b.grid().fingerprint());
        assert!(a.clock().is_running());
    }

    #[test]
    fn stress_profile_is_max_size() {
        let sim = stress_profile(1).unwrap();
        assert_eq!(sim.grid().cells().len(), 10_000);
        assert!(sim.grid().population() > 0);
    }

    #[test]
    fn seeded_grid_matches_profile_fill() {
        let grid = seeded_grid(50, 50, 42);
        let sim = reference_profile(42).unwrap();
        assert_eq!(grid.fingerprint(), sim.grid().fingerprint());
    }
}
