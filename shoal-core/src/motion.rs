//! Integration, heading smoothing and the stateless procedural motion terms.

use crate::agent::Agent;
use crate::math;
use crate::vector::Vector3;

/// Per-step multiplicative velocity damping.
pub const DAMPING: f32 = 0.99;

/// Velocities are expressed in units per frame at this rate.
pub const REFERENCE_FPS: f32 = 60.0;

/// Below this speed the target heading is left unchanged.
pub const HEADING_EPSILON: f32 = 0.001;

/// Amplitude of the vertical wave term.
pub const WAVE_VERTICAL: f32 = 0.0005;

/// Amplitude of the horizontal wave term.
pub const WAVE_HORIZONTAL: f32 = 0.0003;

const TILT_AMPLITUDE: f32 = 0.1;

/// Wave perturbation for an agent at `position` at global `time`.
///
/// Independent of neighbors; gives idle agents some micro-motion.
pub fn wave(time: f32, position: Vector3) -> Vector3 {
    Vector3::new(
        math::cos(time * 1.5 + position.y * 0.5) * WAVE_HORIZONTAL,
        math::sin(time * 2.0 + position.x * 0.5) * WAVE_VERTICAL,
        0.0,
    )
}

/// Cosmetic roll derived from time and x-position; never integrated.
pub fn tilt(time: f32, position: Vector3) -> f32 {
    math::sin(time * 2.0 + position.x) * TILT_AMPLITUDE
}

/// Advance velocity and position by the accumulated acceleration, then clear it.
pub fn integrate(agent: &mut Agent, delta: f32) {
    agent.velocity += agent.acceleration;
    agent.velocity = agent.velocity.limit(agent.max_speed);
    agent.velocity *= DAMPING;
    agent.position += agent.velocity * (delta * REFERENCE_FPS);
    agent.acceleration = Vector3::zero();
}

/// Ease the heading toward the direction of travel.
pub fn smooth_heading(agent: &mut Agent) {
    if agent.velocity.magnitude() > HEADING_EPSILON {
        agent.target_heading = math::atan2(agent.velocity.y, agent.velocity.x);
    }
    agent.heading += (agent.target_heading - agent.heading) * agent.config.turn_speed;
}
