use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use shoal_core::{Agent, AgentConfig, AgentOverrides, School, Vector3, World};

/// Per-agent options as they appear in a settings document.
/// Every field is optional; missing ones take the agent defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_force: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiggle_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiggle_amplitude: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_length: Option<usize>,
}

impl From<&AgentSettings> for AgentOverrides {
    fn from(settings: &AgentSettings) -> Self {
        Self {
            speed: settings.speed,
            max_force: settings.max_force,
            turn_speed: settings.turn_speed,
            wiggle_speed: settings.wiggle_speed,
            wiggle_amplitude: settings.wiggle_amplitude,
            color: settings.color,
            glow_strength: settings.glow_strength,
            trail_length: settings.trail_length,
        }
    }
}

impl AgentSettings {
    pub fn config(&self) -> AgentConfig {
        AgentConfig::with_overrides(&AgentOverrides::from(self))
    }
}

/// One school in a settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolSettings {
    pub count: usize,
    pub width: f32,
    pub agent: AgentSettings,
}

impl Default for SchoolSettings {
    fn default() -> Self {
        Self {
            count: 10,
            width: 0.3,
            agent: AgentSettings::default(),
        }
    }
}

/// Top-level simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Seed for spawning; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Half-extents shared by every school.
    pub bounds: [f32; 3],
    pub schools: Vec<SchoolSettings>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let schools = (0..3)
            .map(|i| SchoolSettings {
                count: (10 + i * 5).min(15),
                width: 0.3 + i as f32 * 0.2,
                agent: AgentSettings::default(),
            })
            .collect();

        Self {
            seed: None,
            bounds: [5.0, 3.0, 1.0],
            schools,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn bounds(&self) -> Vector3 {
        Vector3::from(self.bounds)
    }

    pub fn total_agents(&self) -> usize {
        self.schools.iter().map(|s| s.count).sum()
    }

    /// Spawn every configured school into a fresh world.
    pub fn build_world(&self) -> World {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bounds = self.bounds();

        let schools = self
            .schools
            .iter()
            .map(|school| {
                School::spawn(
                    &mut rng,
                    school.count,
                    school.width,
                    bounds,
                    school.agent.config(),
                )
            })
            .collect();
        World::with_schools(schools)
    }
}

/// A trail point as handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailFrame {
    pub position: [f32; 3],
    pub size: f32,
}

/// Everything the renderer needs to draw one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentFrame {
    pub position: [f32; 3],
    pub heading: f32,
    pub tilt: f32,
    pub scale: f32,
    pub color: u32,
    pub glow_strength: f32,
    pub wiggle_phase: f32,
    pub wiggle_amplitude: f32,
    pub distortion: f32,
    pub progress: f32,
    pub trail: Vec<TrailFrame>,
}

impl AgentFrame {
    pub fn capture(agent: &Agent, time: f32) -> Self {
        Self {
            position: agent.position.to_array(),
            heading: agent.heading,
            tilt: agent.tilt(time),
            scale: agent.scale(),
            color: agent.config.color,
            glow_strength: agent.config.glow_strength,
            wiggle_phase: agent.wiggle_phase(time),
            wiggle_amplitude: agent.config.wiggle_amplitude,
            distortion: Agent::distortion(time),
            progress: Agent::progress(time),
            trail: agent
                .trail_samples(time)
                .map(|sample| TrailFrame {
                    position: sample.position.to_array(),
                    size: sample.size,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolFrame {
    pub agents: Vec<AgentFrame>,
}

/// Per-frame output of the whole world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub time: f32,
    pub schools: Vec<SchoolFrame>,
}

impl FrameSnapshot {
    pub fn capture(world: &World, frame: u64) -> Self {
        let time = world.time();
        let schools = world
            .schools
            .iter()
            .map(|school| SchoolFrame {
                agents: school
                    .agents
                    .iter()
                    .map(|agent| AgentFrame::capture(agent, time))
                    .collect(),
            })
            .collect();

        Self {
            frame,
            time,
            schools,
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub school_count: usize,
    pub agent_count: usize,
    pub simulated_seconds: f32,
    pub wraps: usize,
}
