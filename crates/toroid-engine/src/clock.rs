//! Run state and frame pacing.

use std::time::Duration;

/// Slowest accepted tick rate (one generation every ~11.6 days).
pub const MIN_TICK_RATE_HZ: f64 = 1e-6;

/// Longest wall-clock budget between generations, at [`MIN_TICK_RATE_HZ`].
pub const MAX_TICK_BUDGET: Duration = Duration::from_secs(1_000_000);

/// Whether the simulation is advancing, and how often.
///
/// The tick rate is fixed at construction. `running` starts `false` and
/// changes only through [`Simulator::toggle_run`](crate::Simulator::toggle_run)
/// and [`Simulator::reset`](crate::Simulator::reset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationClock {
    running: bool,
    tick_rate_hz: f64,
}

impl SimulationClock {
    /// A paused clock. `tick_rate_hz` must already be validated.
    pub(crate) fn new(tick_rate_hz: f64) -> Self {
        Self {
            running: false,
            tick_rate_hz,
        }
    }

    /// Whether [`tick`](crate::Simulator::tick) advances the grid.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target generations per second.
    pub fn tick_rate_hz(&self) -> f64 {
        self.tick_rate_hz
    }

    /// Wall-clock time between generations at the configured rate.
    ///
    /// Never longer than [`MAX_TICK_BUDGET`].
    pub fn tick_budget(&self) -> Duration {
        budget_for(self.tick_rate_hz).unwrap_or(MAX_TICK_BUDGET)
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

/// The budget for `tick_rate_hz`, or `None` if the rate is not a usable
/// frame rate.
pub(crate) fn budget_for(tick_rate_hz: f64) -> Option<Duration> {
    if !tick_rate_hz.is_finite() || tick_rate_hz < MIN_TICK_RATE_HZ {
        return None;
    }
    Duration::try_from_secs_f64(1.0 / tick_rate_hz)
        .ok()
        .map(|budget| budget.min(MAX_TICK_BUDGET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        let clock = SimulationClock::new(10.0);
        assert!(!clock.is_running());
        assert_eq!(clock.tick_rate_hz(), 10.0);
    }

    #[test]
    fn budget_is_reciprocal_of_rate() {
        assert_eq!(SimulationClock::new(10.0).tick_budget(), Duration::from_millis(100));
        assert_eq!(SimulationClock::new(0.5).tick_budget(), Duration::from_secs(2));
    }

    #[test]
    fn budget_never_panics_or_exceeds_cap() {
        for rate in [1e-300, 1e-19, 0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(SimulationClock::new(rate).tick_budget(), MAX_TICK_BUDGET);
        }
        assert!(SimulationClock::new(MIN_TICK_RATE_HZ).tick_budget() <= MAX_TICK_BUDGET);
    }

    #[test]
    fn budget_for_rejects_unusable_rates() {
        assert!(budget_for(1e-300).is_none());
        assert!(budget_for(1e-19).is_none());
        assert!(budget_for(MIN_TICK_RATE_HZ / 2.0).is_none());
        assert!(budget_for(MIN_TICK_RATE_HZ).is_some());
        assert_eq!(budget_for(4.0), Some(Duration::from_millis(250)));
    }
}
