//! Per-generation metrics.

use toroid_core::GenerationId;

/// Timing and population data for a single [`tick`](crate::Simulator::tick).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the generation sweep, in microseconds.
    pub total_us: u64,
    /// Generation reached by this tick.
    pub generation: GenerationId,
    /// Cells born this tick.
    pub births: usize,
    /// Cells that died this tick.
    pub deaths: usize,
    /// Live cells after this tick.
    pub population: usize,
}
