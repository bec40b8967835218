//! Separation, alignment and cohesion steering.
//!
//! Every rule returns a steering vector already clamped to the agent's
//! `max_force`. Rules skip their contribution instead of normalizing a
//! zero-length vector.

use crate::agent::Agent;
use crate::vector::Vector3;

/// Separation radius as a multiple of the agent's width.
pub const SEPARATION_RADIUS: f32 = 2.0;
/// Alignment radius as a multiple of the agent's width.
pub const ALIGNMENT_RADIUS: f32 = 5.0;
/// Cohesion radius as a multiple of the agent's width.
pub const COHESION_RADIUS: f32 = 10.0;

pub const SEPARATION_WEIGHT: f32 = 1.5;
pub const ALIGNMENT_WEIGHT: f32 = 1.0;
pub const COHESION_WEIGHT: f32 = 1.0;

/// The three flocking contributions for one agent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    pub separation: Vector3,
    pub alignment: Vector3,
    pub cohesion: Vector3,
}

impl Steering {
    /// Weighted sum fed into the agent's acceleration.
    pub fn combined(&self) -> Vector3 {
        self.separation * SEPARATION_WEIGHT
            + self.alignment * ALIGNMENT_WEIGHT
            + self.cohesion * COHESION_WEIGHT
    }
}

/// Every agent in `agents` except the one at `index`.
pub fn neighbors(agents: &[Agent], index: usize) -> impl Iterator<Item = &Agent> + Clone {
    agents
        .iter()
        .enumerate()
        .filter(move |(i, _)| *i != index)
        .map(|(_, agent)| agent)
}

/// All three rules for the agent at `index`, read from the same snapshot.
pub fn steering(agents: &[Agent], index: usize) -> Steering {
    let agent = &agents[index];
    let others = neighbors(agents, index);
    Steering {
        separation: separation(agent, others.clone()),
        alignment: alignment(agent, others.clone()),
        cohesion: cohesion(agent, others),
    }
}

/// Push away from neighbors inside the separation radius. Each one adds its
/// unit offset divided by distance, so closer agents push harder.
pub fn separation<'a, I>(agent: &Agent, others: I) -> Vector3
where
    I: Iterator<Item = &'a Agent>,
{
    let radius = agent.width * SEPARATION_RADIUS;
    let mut steering = Vector3::zero();
    let mut count = 0;

    for other in others {
        let distance = agent.position.distance(&other.position);
        if distance > 0.0 && distance < radius {
            let diff = (agent.position - other.position).normalize() / distance;
            if !diff.is_finite() {
                continue;
            }
            steering += diff;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::zero();
    }
    steering = steering / count as f32;
    if steering.is_zero() {
        return Vector3::zero();
    }

    let desired = steering.normalize() * agent.max_speed;
    (desired - agent.velocity).limit(agent.max_force)
}

pub fn alignment<'a, I>(agent: &Agent, others: I) -> Vector3
where
    I: Iterator<Item = &'a Agent>,
{
    let radius = agent.width * ALIGNMENT_RADIUS;
    let mut sum = Vector3::zero();
    let mut count = 0;

    for other in others {
        if agent.position.distance(&other.position) < radius {
            sum += other.velocity;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::zero();
    }
    let average = sum / count as f32;
    if average.is_zero() {
        return Vector3::zero();
    }

    let desired = average.normalize() * agent.max_speed;
    (desired - agent.velocity).limit(agent.max_force)
}

pub fn cohesion<'a, I>(agent: &Agent, others: I) -> Vector3
where
    I: Iterator<Item = &'a Agent>,
{
    let radius = agent.width * COHESION_RADIUS;
    let mut sum = Vector3::zero();
    let mut count = 0;

    for other in others {
        if agent.position.distance(&other.position) < radius {
            sum += other.position;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::zero();
    }
    seek(agent, sum / count as f32)
}

/// Steer toward `target` at full speed; zero if already there.
pub fn seek(agent: &Agent, target: Vector3) -> Vector3 {
    let offset = target - agent.position;
    if offset.is_zero() {
        return Vector3::zero();
    }

    let desired = offset.normalize() * agent.max_speed;
    (desired - agent.velocity).limit(agent.max_force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentConfig;

    fn agent_at(x: f32, y: f32, velocity: Vector3) -> Agent {
        Agent::new(Vector3::new(x, y, 0.0), velocity, 0.3, AgentConfig::default())
    }

    #[test]
    fn test_single_agent_has_no_steering() {
        let agents = [agent_at(0.0, 0.0, Vector3::new(0.01, 0.0, 0.0))];
        assert_eq!(steering(&agents, 0), Steering::default());
    }

    #[test]
    fn test_neighbors_excludes_self_by_index() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(1.0, 0.0, Vector3::zero()),
        ];
        assert_eq!(neighbors(&agents, 1).count(), 2);
    }

    #[test]
    fn test_separation_pushes_away() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(0.2, 0.0, Vector3::zero()),
        ];
        let force = separation(&agents[0], neighbors(&agents, 0));
        assert!(force.x < 0.0);
        assert!((force.magnitude() - agents[0].max_force).abs() < 1e-6);
    }

    #[test]
    fn test_separation_weights_closer_neighbors_more() {
        // Unweighted unit offsets would cancel; 1/d weighting favors the near one.
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(-0.1, 0.0, Vector3::zero()),
            agent_at(0.5, 0.0, Vector3::zero()),
        ];
        let force = separation(&agents[0], neighbors(&agents, 0));
        assert!(force.x > 0.0);
        assert!(force.y.abs() < 1e-9);
    }

    #[test]
    fn test_separation_ignores_coincident_agents() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(0.0, 0.0, Vector3::zero()),
        ];
        assert_eq!(separation(&agents[0], neighbors(&agents, 0)), Vector3::zero());
    }

    #[test]
    fn test_separation_ignores_distant_agents() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(0.7, 0.0, Vector3::zero()),
        ];
        assert_eq!(separation(&agents[0], neighbors(&agents, 0)), Vector3::zero());
    }

    #[test]
    fn test_alignment_matches_heading() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(1.0, 0.0, Vector3::new(0.0, 0.04, 0.0)),
        ];
        let force = alignment(&agents[0], neighbors(&agents, 0));
        assert!(force.y > 0.0);
        assert!(force.x.abs() < 1e-9);
        assert!(force.magnitude() <= agents[0].max_force + 1e-9);
    }

    #[test]
    fn test_alignment_skips_motionless_neighbors() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::new(0.01, 0.0, 0.0)),
            agent_at(1.0, 0.0, Vector3::zero()),
        ];
        assert_eq!(alignment(&agents[0], neighbors(&agents, 0)), Vector3::zero());
    }

    #[test]
    fn test_cohesion_pulls_toward_center() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(2.0, 1.0, Vector3::zero()),
            agent_at(2.0, -1.0, Vector3::zero()),
        ];
        let force = cohesion(&agents[0], neighbors(&agents, 0));
        assert!(force.x > 0.0);
        assert!(force.y.abs() < 1e-9);
    }

    #[test]
    fn test_cohesion_out_of_range() {
        let agents = [
            agent_at(0.0, 0.0, Vector3::zero()),
            agent_at(3.5, 0.0, Vector3::zero()),
        ];
        assert_eq!(cohesion(&agents[0], neighbors(&agents, 0)), Vector3::zero());
    }

    #[test]
    fn test_seek_at_target_is_zero() {
        let a = agent_at(1.0, 1.0, Vector3::new(0.02, 0.0, 0.0));
        assert_eq!(seek(&a, a.position), Vector3::zero());
    }

    #[test]
    fn test_combined_weights() {
        let s = Steering {
            separation: Vector3::new(1.0, 0.0, 0.0),
            alignment: Vector3::new(0.0, 1.0, 0.0),
            cohesion: Vector3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(s.combined(), Vector3::new(1.5, 1.0, 1.0));
    }
}
