use js_sys::Float32Array;
use shoal_core::{Agent, School, World};
use shoal_shared::{FrameSnapshot, SimulationSettings};
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

/// Floats per agent in [`ShoalSimulation::transforms`]: x, y, z, heading, tilt, scale.
pub const TRANSFORM_STRIDE: usize = 6;

/// Floats per point in [`ShoalSimulation::trail`]: x, y, z, size.
pub const TRAIL_STRIDE: usize = 4;

#[wasm_bindgen]
pub struct ShoalSimulation {
    world: World,
    frame: u64,
}

#[wasm_bindgen]
impl ShoalSimulation {
    /// Build a world from a JSON settings document; an empty string uses the
    /// default scene.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<ShoalSimulation, JsValue> {
        let settings = parse_settings(settings_json).map_err(|e| JsValue::from_str(&e))?;
        let world = settings.build_world();
        console_log!(
            "Initializing shoal with {} agents in {} schools",
            world.agent_count(),
            world.schools.len()
        );

        Ok(ShoalSimulation { world, frame: 0 })
    }

    /// Advance by the host's raw frame delta in seconds. Returns the
    /// simulation time after the step.
    pub fn tick(&mut self, delta: f32) -> f32 {
        self.world.advance(delta);
        self.frame += 1;
        self.world.time()
    }

    pub fn time(&self) -> f32 {
        self.world.time()
    }

    pub fn school_count(&self) -> usize {
        self.world.schools.len()
    }

    pub fn agent_count(&self, school: usize) -> usize {
        self.world.schools.get(school).map_or(0, School::len)
    }

    /// Flat per-agent transforms for one school, [`TRANSFORM_STRIDE`] floats each.
    pub fn transforms(&self, school: usize) -> Float32Array {
        let packed = self
            .world
            .schools
            .get(school)
            .map(|school| pack_transforms(school, self.world.time()))
            .unwrap_or_default();
        Float32Array::from(&packed[..])
    }

    /// Flat trail points for one agent, newest first, [`TRAIL_STRIDE`] floats each.
    pub fn trail(&self, school: usize, agent: usize) -> Float32Array {
        let packed = self
            .world
            .schools
            .get(school)
            .and_then(|school| school.agents.get(agent))
            .map(|agent| pack_trail(agent, self.world.time()))
            .unwrap_or_default();
        Float32Array::from(&packed[..])
    }

    /// Full frame snapshot as JSON.
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let snapshot = FrameSnapshot::capture(&self.world, self.frame);
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

pub fn parse_settings(json: &str) -> Result<SimulationSettings, String> {
    if json.trim().is_empty() {
        return Ok(SimulationSettings::default());
    }
    SimulationSettings::from_json(json).map_err(|e| format!("invalid settings: {}", e))
}

pub fn pack_transforms(school: &School, time: f32) -> Vec<f32> {
    let mut packed = Vec::with_capacity(school.len() * TRANSFORM_STRIDE);
    for agent in &school.agents {
        packed.extend_from_slice(&[
            agent.position.x,
            agent.position.y,
            agent.position.z,
            agent.heading,
            agent.tilt(time),
            agent.scale(),
        ]);
    }
    packed
}

pub fn pack_trail(agent: &Agent, time: f32) -> Vec<f32> {
    let mut packed = Vec::with_capacity(agent.trail().len() * TRAIL_STRIDE);
    for sample in agent.trail_samples(time) {
        packed.extend_from_slice(&[
            sample.position.x,
            sample.position.y,
            sample.position.z,
            sample.size,
        ]);
    }
    packed
}
