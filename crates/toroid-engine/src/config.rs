//! Simulator configuration, validation, and error types.
//!
//! [`SimConfig`] is the construction input for both
//! [`Simulator`](crate::Simulator) and
//! [`RealtimeSimulator`](crate::RealtimeSimulator).
//! [`validate()`](SimConfig::validate) checks it before anything is
//! allocated or spawned.

use std::error::Error;
use std::fmt;

use toroid_core::{Dimensions, GridError};
use toroid_grid::DEFAULT_LIVE_PROBABILITY;

use crate::clock::{budget_for, MIN_TICK_RATE_HZ};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a simulator.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// tick_rate_hz is NaN, infinite, or below
    /// [`MIN_TICK_RATE_HZ`](crate::clock::MIN_TICK_RATE_HZ).
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// live_probability is NaN or outside `[0, 1]`.
    InvalidLiveProbability {
        /// The invalid value.
        value: f64,
    },
    /// The grid could not be constructed.
    Grid(GridError),
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// The simulator could not be recovered from the tick thread
    /// (the thread panicked).
    EngineRecoveryFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTickRate { value } => {
                write!(
                    f,
                    "tick_rate_hz must be finite and at least {MIN_TICK_RATE_HZ}, got {value}"
                )
            }
            Self::InvalidLiveProbability { value } => {
                write!(f, "live_probability must be within [0, 1], got {value}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
            Self::EngineRecoveryFailed => {
                write!(f, "simulator could not be recovered from tick thread")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Construction parameters for a simulator.
///
/// Grid dimensions outside `[Dimensions::MIN, Dimensions::MAX]` are
/// clamped, never rejected, so a stale persisted size still yields a
/// usable grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Requested grid width. Default: 50.
    pub width: i64,
    /// Requested grid height. Default: 50.
    pub height: i64,
    /// Generations per second while running. Default: 10.
    pub tick_rate_hz: f64,
    /// Probability that [`randomize`](crate::Simulator::randomize) makes a
    /// cell alive. Default: 0.3.
    pub live_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            tick_rate_hz: 10.0,
            live_probability: DEFAULT_LIVE_PROBABILITY,
        }
    }
}

impl SimConfig {
    /// Check every invariant and return the clamped grid size.
    pub fn validate(&self) -> Result<Dimensions, ConfigError> {
        if budget_for(self.tick_rate_hz).is_none() {
            return Err(ConfigError::InvalidTickRate {
                value: self.tick_rate_hz,
            });
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::InvalidLiveProbability {
                value: self.live_probability,
            });
        }
        Ok(Dimensions::new(self.width, self.height)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let dims = SimConfig::default().validate().unwrap();
        assert_eq!(dims, Dimensions::clamped(50, 50));
    }

    #[test]
    fn dimensions_are_clamped_not_rejected() {
        let cfg = SimConfig {
            width: 0,
            height: 9000,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate().unwrap(), Dimensions::clamped(10, 100));
    }

    #[test]
    fn bad_tick_rates_rejected() {
        for value in [0.0, -1.0, f64::INFINITY, 1e-300, 1e-19, 5e-7] {
            let cfg = SimConfig {
                tick_rate_hz: value,
                ..SimConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidTickRate { value }));
        }
        let nan = SimConfig {
            tick_rate_hz: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidTickRate { .. })
        ));
    }

    #[test]
    fn bad_live_probability_rejected() {
        for value in [-0.1, 1.5, f64::NAN] {
            let cfg = SimConfig {
                live_probability: value,
                ..SimConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidLiveProbability { .. })
            ));
        }
    }

    #[test]
    fn grid_error_has_source() {
        let err = ConfigError::from(GridError::InvalidDimensions {
            width: 0,
            height: 0,
        });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("grid: "));
        assert!(ConfigError::EngineRecoveryFailed.source().is_none());
    }
}
