//! Fixed-capacity, newest-first position history for an agent.
//!
//! Index 0 is always the most recent point. The buffer's storage is a
//! `heapless::Deque` sized by [`MAX_TRAIL_LENGTH`]; the per-agent capacity
//! (`AgentConfig::trail_length`) is applied on every push.

use heapless::Deque;

use crate::math;
use crate::vector::Vector3;

/// Hard upper bound on any agent's trail length.
pub const MAX_TRAIL_LENGTH: usize = 64;

/// Size of the newest trail point before decay and wobble.
pub const TRAIL_BASE_SIZE: f32 = 2.0;

const WOBBLE_AMPLITUDE: f32 = 0.1;
const WOBBLE_INDEX_PHASE: f32 = 0.5;

/// A recorded position together with the simulation time it was taken at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vector3,
    pub time: f32,
}

/// A trail point with its derived display size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Vector3,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Trail {
    points: Deque<TrailPoint, MAX_TRAIL_LENGTH>,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: Deque::new(),
        }
    }

    /// Push `point` to the front, dropping the oldest entries beyond `capacity`.
    pub fn record(&mut self, point: TrailPoint, capacity: usize) {
        let capacity = capacity.min(MAX_TRAIL_LENGTH);
        if capacity == 0 {
            self.points.clear();
            return;
        }

        while self.points.len() >= capacity {
            self.points.pop_back();
        }
        // len < capacity <= MAX_TRAIL_LENGTH, so there is always room
        let _ = self.points.push_front(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    pub fn oldest(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    /// Points from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    /// Points paired with their display size at `time`.
    pub fn samples(&self, time: f32, wiggle_speed: f32) -> impl Iterator<Item = TrailSample> + '_ {
        let len = self.points.len();
        self.points
            .iter()
            .enumerate()
            .map(move |(index, point)| TrailSample {
                position: point.position,
                size: point_size(index, len, time, wiggle_speed),
            })
    }
}

/// Display size of the trail point at `index` in a trail of `len` points.
///
/// Decays linearly with age from [`TRAIL_BASE_SIZE`] and is modulated by a
/// small time-dependent wobble.
pub fn point_size(index: usize, len: usize, time: f32, wiggle_speed: f32) -> f32 {
    if len == 0 {
        return 0.0;
    }
    let decay = 1.0 - index as f32 / len as f32;
    decay * TRAIL_BASE_SIZE * wobble(time, index, wiggle_speed)
}

fn wobble(time: f32, index: usize, wiggle_speed: f32) -> f32 {
    1.0 + WOBBLE_AMPLITUDE * math::sin(time * wiggle_speed + index as f32 * WOBBLE_INDEX_PHASE)
}
