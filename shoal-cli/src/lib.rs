use anyhow::{Context, Result};
use shoal_core::{Tick, World};
use shoal_shared::{FrameSnapshot, RunSummary, SimulationSettings};
use std::io::Write;
use std::path::Path;

/// Read settings from `path`, or fall back to the default scene.
pub fn load_settings(path: Option<&Path>) -> Result<SimulationSettings> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            SimulationSettings::from_json(&text)
                .with_context(|| format!("Invalid settings in {}", path.display()))
        }
        None => Ok(SimulationSettings::default()),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Number of frames to simulate.
    pub frames: u64,
    /// Fixed host frame rate; each frame advances the world by `1 / fps`.
    pub fps: f32,
    /// Write a snapshot every this many frames; 0 writes none.
    pub every: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            fps: 60.0,
            every: 1,
        }
    }
}

impl RunOptions {
    pub fn frame_delta(&self) -> Result<f32> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            anyhow::bail!("Frame rate must be a positive number, got {}", self.fps);
        }
        Ok(1.0 / self.fps)
    }
}

/// Drives a world at a fixed frame rate and streams snapshots as JSON lines
pub struct Runner {
    world: World,
    options: RunOptions,
    frame: u64,
    wraps: usize,
}

impl Runner {
    pub fn new(world: World, options: RunOptions) -> Self {
        Self {
            world,
            options,
            frame: 0,
            wraps: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance a single frame of `delta` seconds.
    pub fn tick(&mut self, delta: f32) -> Tick {
        let tick = self.world.advance(delta);
        self.frame += 1;
        self.wraps += tick.wraps;
        tick
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let delta = self.options.frame_delta()?;
        log::info!(
            "Simulating {} frames at {} fps ({} agents in {} schools)",
            self.options.frames,
            self.options.fps,
            self.world.agent_count(),
            self.world.schools.len()
        );

        for _ in 0..self.options.frames {
            let tick = self.tick(delta);
            if tick.wraps > 0 {
                log::debug!("frame {}: {} agents wrapped", self.frame, tick.wraps);
            }

            if self.options.every > 0 && self.frame % self.options.every == 0 {
                let snapshot = FrameSnapshot::capture(&self.world, self.frame);
                serde_json::to_writer(&mut *out, &snapshot).context("Failed to encode snapshot")?;
                out.write_all(b"\n").context("Failed to write snapshot")?;
            }
        }
        out.flush().context("Failed to flush output")?;

        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frame,
            school_count: self.world.schools.len(),
            agent_count: self.world.agent_count(),
            simulated_seconds: self.world.time(),
            wraps: self.wraps,
        }
    }
}
