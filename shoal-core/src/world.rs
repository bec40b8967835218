use alloc::vec::Vec;

use crate::school::School;

/// Largest delta a single step will integrate, in seconds.
pub const MAX_DELTA: f32 = 0.1;

/// Clamp a host-supplied frame delta into `[0, MAX_DELTA]`.
///
/// Non-finite and negative deltas become zero.
pub fn clamp_delta(delta: f32) -> f32 {
    if !delta.is_finite() || delta <= 0.0 {
        return 0.0;
    }
    if delta > MAX_DELTA {
        log::trace!("clamping frame delta {} to {}", delta, MAX_DELTA);
        return MAX_DELTA;
    }
    delta
}

/// Outcome of one [`World::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tick {
    /// The delta actually integrated.
    pub delta: f32,
    /// Number of agents that wrapped this frame.
    pub wraps: usize,
}

/// Every school in the simulation plus the accumulated clock
#[derive(Debug, Clone, Default)]
pub struct World {
    pub schools: Vec<School>,
    time: f32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schools(schools: Vec<School>) -> Self {
        Self { schools, time: 0.0 }
    }

    pub fn add_school(&mut self, school: School) {
        self.schools.push(school);
    }

    /// Seconds accumulated from clamped deltas.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn agent_count(&self) -> usize {
        self.schools.iter().map(School::len).sum()
    }

    /// Step every school at an explicit `time`; the clock is left untouched.
    /// Returns the total number of wraps.
    pub fn step(&mut self, time: f32, delta: f32) -> usize {
        self.schools
            .iter_mut()
            .map(|school| school.step(time, delta))
            .sum()
    }

    /// Clamp `raw_delta`, advance the clock by it and step every school.
    pub fn advance(&mut self, raw_delta: f32) -> Tick {
        let delta = clamp_delta(raw_delta);
        self.time += delta;
        let wraps = self.step(self.time, delta);
        Tick { delta, wraps }
    }
}
