use core::f32::consts::TAU;

use crate::behavior::Steering;
use crate::bounds;
use crate::math;
use crate::motion;
use crate::trail::{Trail, TrailPoint, TrailSample, MAX_TRAIL_LENGTH};
use crate::vector::Vector3;

/// Creation-time tunables for an agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Maximum speed in units per reference frame.
    pub speed: f32,
    /// Cap on any single steering contribution.
    pub max_force: f32,
    /// Heading smoothing factor in `[0, 1]`.
    pub turn_speed: f32,
    pub wiggle_speed: f32,
    pub wiggle_amplitude: f32,
    /// `0xRRGGBB`
    pub color: u32,
    pub glow_strength: f32,
    pub trail_length: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: 0.05,
            max_force: 0.002,
            turn_speed: 0.1,
            wiggle_speed: 3.0,
            wiggle_amplitude: 0.1,
            color: 0xffffff,
            glow_strength: 1.5,
            trail_length: 20,
        }
    }
}

/// Caller-supplied options; `None` keeps the default
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgentOverrides {
    pub speed: Option<f32>,
    pub max_force: Option<f32>,
    pub turn_speed: Option<f32>,
    pub wiggle_speed: Option<f32>,
    pub wiggle_amplitude: Option<f32>,
    pub color: Option<u32>,
    pub glow_strength: Option<f32>,
    pub trail_length: Option<usize>,
}

impl AgentConfig {
    /// Merge `overrides` over the defaults.
    ///
    /// Negative or non-finite numbers fall back to the default, `turn_speed`
    /// is clamped to `[0, 1]` and `trail_length` to [`MAX_TRAIL_LENGTH`].
    pub fn with_overrides(overrides: &AgentOverrides) -> Self {
        Self::default().merge(overrides)
    }

    pub fn merge(self, overrides: &AgentOverrides) -> Self {
        Self {
            speed: pick(overrides.speed, self.speed),
            max_force: pick(overrides.max_force, self.max_force),
            turn_speed: pick(overrides.turn_speed, self.turn_speed).min(1.0),
            wiggle_speed: pick(overrides.wiggle_speed, self.wiggle_speed),
            wiggle_amplitude: pick(overrides.wiggle_amplitude, self.wiggle_amplitude),
            color: overrides.color.unwrap_or(self.color) & 0xffffff,
            glow_strength: pick(overrides.glow_strength, self.glow_strength),
            trail_length: overrides
                .trail_length
                .unwrap_or(self.trail_length)
                .min(MAX_TRAIL_LENGTH),
        }
    }
}

fn pick(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

/// Breathing oscillator driving the agent's display scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub phase: f32,
    pub amplitude: f32,
    /// Radians per second.
    pub frequency: f32,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            phase: 0.0,
            amplitude: 0.05,
            frequency: 2.0,
        }
    }
}

impl Pulse {
    pub fn with_phase(phase: f32) -> Self {
        Self {
            phase: phase % TAU,
            ..Self::default()
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.phase = (self.phase + delta * self.frequency) % TAU;
    }

    pub fn scale(&self) -> f32 {
        1.0 + self.amplitude * math::sin(self.phase)
    }
}

/// A single simulated agent
#[derive(Debug, Clone)]
pub struct Agent {
    pub position: Vector3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
    pub max_speed: f32,
    pub max_force: f32,
    pub heading: f32,
    pub target_heading: f32,
    /// Body width; neighbor radii scale with it.
    pub width: f32,
    pub config: AgentConfig,
    pub pulse: Pulse,
    trail: Trail,
}

impl Agent {
    pub fn new(position: Vector3, velocity: Vector3, width: f32, config: AgentConfig) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector3::zero(),
            max_speed: config.speed,
            max_force: config.max_force,
            heading: 0.0,
            target_heading: 0.0,
            width,
            config,
            pulse: Pulse::default(),
            trail: Trail::new(),
        }
    }

    pub fn with_pulse(mut self, pulse: Pulse) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn apply_force(&mut self, force: Vector3) {
        self.acceleration += force;
    }

    /// Advance one frame given this frame's flocking steering.
    ///
    /// Returns `true` if the agent wrapped across a face of `bounds`, in
    /// which case its trail has been cleared.
    pub fn step(&mut self, steering: &Steering, time: f32, delta: f32, bounds: Vector3) -> bool {
        self.apply_force(steering.combined());
        self.apply_force(motion::wave(time, self.position).limit(self.max_force));

        motion::integrate(self, delta);
        motion::smooth_heading(self);
        self.pulse.advance(delta);

        self.trail.record(
            TrailPoint {
                position: self.position,
                time,
            },
            self.config.trail_length,
        );

        if bounds::wrap(&mut self.position, bounds) {
            self.trail.clear();
            log::trace!("agent wrapped to {:?}", self.position);
            return true;
        }
        false
    }

    /// Cosmetic roll at `time`.
    pub fn tilt(&self, time: f32) -> f32 {
        motion::tilt(time, self.position)
    }

    pub fn scale(&self) -> f32 {
        self.pulse.scale()
    }

    pub fn wiggle_phase(&self, time: f32) -> f32 {
        time * self.config.wiggle_speed
    }

    /// Shader distortion term shared by every agent at `time`.
    pub fn distortion(time: f32) -> f32 {
        math::sin(time) * 0.1
    }

    /// Reveal progress oscillating in `[0, 1]`.
    pub fn progress(time: f32) -> f32 {
        math::sin(time * 0.5) * 0.5 + 0.5
    }

    pub fn trail_samples(&self, time: f32) -> impl Iterator<Item = TrailSample> + '_ {
        self.trail.samples(time, self.config.wiggle_speed)
    }
}
