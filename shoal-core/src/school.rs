use alloc::vec::Vec;

use crate::agent::Agent;
#[cfg(feature = "std")]
use crate::agent::{AgentConfig, Pulse};
use crate::behavior::{self, Steering};
use crate::vector::Vector3;
use crate::world::clamp_delta;

/// Half-range of the uniform initial velocity on the x and y axes.
pub const INITIAL_VELOCITY_RANGE: f32 = 0.01;

/// A group of agents sharing one bounds volume
#[derive(Debug, Clone)]
pub struct School {
    pub agents: Vec<Agent>,
    /// Half-extents of the origin-centered box the agents wrap within.
    pub bounds: Vector3,
}

impl School {
    pub fn new(bounds: Vector3) -> Self {
        Self {
            agents: Vec::new(),
            bounds,
        }
    }

    pub fn with_agents(bounds: Vector3, agents: Vec<Agent>) -> Self {
        Self { agents, bounds }
    }

    /// Spawn `count` agents at random positions inside `bounds` with small
    /// random planar velocities.
    #[cfg(feature = "std")]
    pub fn spawn<R: rand::Rng>(
        rng: &mut R,
        count: usize,
        width: f32,
        bounds: Vector3,
        config: AgentConfig,
    ) -> Self {
        let agents: Vec<Agent> = (0..count)
            .map(|_| {
                let position = Vector3::new(
                    sample_axis(rng, bounds.x),
                    sample_axis(rng, bounds.y),
                    sample_axis(rng, bounds.z),
                );
                let velocity = Vector3::new(
                    rng.gen_range(-INITIAL_VELOCITY_RANGE..INITIAL_VELOCITY_RANGE),
                    rng.gen_range(-INITIAL_VELOCITY_RANGE..INITIAL_VELOCITY_RANGE),
                    0.0,
                );
                let pulse = Pulse::with_phase(rng.gen_range(0.0..core::f32::consts::TAU));
                Agent::new(position, velocity, width, config).with_pulse(pulse)
            })
            .collect();

        log::debug!(
            "spawned school of {} agents (width {}, bounds {:?})",
            agents.len(),
            width,
            bounds
        );
        Self::with_agents(bounds, agents)
    }

    pub fn add_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Steering for every agent, computed from the current snapshot.
    pub fn steering(&self) -> Vec<Steering> {
        (0..self.agents.len())
            .map(|index| behavior::steering(&self.agents, index))
            .collect()
    }

    /// Advance every agent by one frame.
    ///
    /// All steering is computed before any agent moves. `delta` is clamped
    /// with [`clamp_delta`]. Returns the number of agents that wrapped.
    pub fn step(&mut self, time: f32, delta: f32) -> usize {
        let delta = clamp_delta(delta);
        let forces = self.steering();
        let bounds = self.bounds;

        self.agents
            .iter_mut()
            .zip(forces.iter())
            .map(|(agent, steering)| agent.step(steering, time, delta, bounds))
            .filter(|wrapped| *wrapped)
            .count()
    }
}

#[cfg(feature = "std")]
fn sample_axis<R: rand::Rng>(rng: &mut R, half_extent: f32) -> f32 {
    let half_extent = crate::math::abs(half_extent);
    if half_extent > 0.0 {
        rng.gen_range(-half_extent..=half_extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: Vector3 = Vector3::new(5.0, 3.0, 1.0);

    fn school(seed: u64, count: usize) -> School {
        let mut rng = StdRng::seed_from_u64(seed);
        School::spawn(&mut rng, count, 0.3, BOUNDS, AgentConfig::default())
    }

    #[test]
    fn test_spawn_inside_bounds() {
        let school = school(7, 15);
        assert_eq!(school.len(), 15);
        for agent in &school.agents {
            assert!(bounds::contains(&agent.position, BOUNDS));
            assert!(agent.velocity.x.abs() <= INITIAL_VELOCITY_RANGE);
            assert!(agent.velocity.y.abs() <= INITIAL_VELOCITY_RANGE);
            assert_eq!(agent.velocity.z, 0.0);
        }
    }

    #[test]
    fn test_spawn_is_reproducible_with_seed() {
        let a = school(42, 10);
        let b = school(42, 10);
        for (x, y) in a.agents.iter().zip(b.agents.iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
        }
    }

    #[test]
    fn test_spawn_flat_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let flat = Vector3::new(5.0, 3.0, 0.0);
        let school = School::spawn(&mut rng, 6, 0.3, flat, AgentConfig::default());
        assert!(school.agents.iter().all(|a| a.position.z == 0.0));
    }

    #[test]
    fn test_step_moves_agents() {
        let mut school = school(3, 10);
        let before: Vec<Vector3> = school.agents.iter().map(|a| a.position).collect();

        school.step(1.0 / 60.0, 1.0 / 60.0);

        let changed = school
            .agents
            .iter()
            .zip(before.iter())
            .any(|(a, p)| a.position != *p);
        assert!(changed);
    }

    #[test]
    fn test_step_reads_a_snapshot() {
        // Moving the first agent first must not change the second agent's steering.
        let agents = vec![
            Agent::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.05, 0.0, 0.0), 0.3, AgentConfig::default()),
            Agent::new(Vector3::new(0.3, 0.0, 0.0), Vector3::new(0.0, 0.05, 0.0), 0.3, AgentConfig::default()),
        ];
        let mut forward = School::with_agents(BOUNDS, agents.clone());
        let mut reversed = School::with_agents(BOUNDS, agents.into_iter().rev().collect());

        forward.step(0.5, 1.0 / 60.0);
        reversed.step(0.5, 1.0 / 60.0);

        assert_eq!(forward.agents[0].position, reversed.agents[1].position);
        assert_eq!(forward.agents[1].position, reversed.agents[0].position);
    }

    #[test]
    fn test_add_agent() {
        let mut school = school(4, 6);
        school.add_agent(Agent::new(Vector3::zero(), Vector3::zero(), 0.3, AgentConfig::default()));
        assert_eq!(school.len(), 7);
    }

    #[test]
    fn test_empty_school_step() {
        let mut school = School::new(BOUNDS);
        assert_eq!(school.step(0.0, 0.016), 0);
        assert!(school.is_empty());
    }
}
