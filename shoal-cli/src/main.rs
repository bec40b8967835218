use anyhow::{Context, Result};
use clap::Parser;
use shoal_cli::{load_settings, RunOptions, Runner};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless flocking simulation", long_about = None)]
struct Args {
    /// JSON settings file; the default scene is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for spawning, overriding the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Host frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Write a snapshot every N frames (0 for none)
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Snapshot output file (JSON lines); stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut settings = load_settings(args.config.as_deref())?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    log::info!("Bounds: {:?}", settings.bounds);
    match settings.seed {
        Some(seed) => log::info!("Seed: {}", seed),
        None => log::info!("Seed: entropy"),
    }

    let options = RunOptions {
        frames: args.frames,
        fps: args.fps,
        every: args.every,
    };
    let mut runner = Runner::new(settings.build_world(), options);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = runner.run(&mut out).context("Simulation error")?;
    log::info!(
        "Done: {} frames, {:.2}s simulated, {} wraps",
        summary.frames,
        summary.simulated_seconds,
        summary.wraps
    );

    Ok(())
}
