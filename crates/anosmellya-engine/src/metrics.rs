//! Per-tick counters and timings.

/// Timing and event counts collected during a single
/// [`World::simulate`](crate::World::simulate) call.
///
/// Durations are in microseconds. Read the most recent tick's values with
/// [`World::last_metrics`](crate::World::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time of the whole tick.
    pub total_us: u64,
    /// Time spent updating the four smell fields, including the wait for workers.
    pub fluid_us: u64,
    /// Time spent in the row-major animal pass.
    pub animal_us: u64,
    /// Children placed this tick.
    pub births: u32,
    /// Animals that died of age or hunger this tick.
    pub deaths: u32,
    /// Collisions between a carnivore and a herbivore.
    pub attacks: u32,
    /// Random plant placements.
    pub plant_placements: u32,
}
