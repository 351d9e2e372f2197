//! Headless chase runner.
//!
//! Drives a simulation at a fixed step with a scripted movement intent and
//! prints the HUD line once per simulated second.
//!
//! Run with: `cargo run --release -- --intent 0,1 --seconds 60`

use clap::Parser;
use flockchase::{Arena, ChaseConfig, Phase, Simulation, Vec2};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flockchase", about = "Run a headless predator-prey chase")]
struct Args {
    /// JSON config file; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed, overriding the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Arena width.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Arena height.
    #[arg(long, default_value_t = 480.0)]
    height: f32,

    /// Fixed time step in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    step: f32,

    /// Simulated seconds before giving up.
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Prey movement intent as `x,y`.
    #[arg(long, default_value = "0,0", value_parser = parse_intent)]
    intent: Vec2,
}

fn parse_intent(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match ChaseConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!(%err, path = %path.display(), "failed to load config");
                return ExitCode::FAILURE;
            }
        },
        None => ChaseConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let arena = Arena::new(args.width, args.height);
    let mut sim = match Simulation::new(config, arena) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "failed to start simulation");
            return ExitCode::FAILURE;
        }
    };

    let mut next_report = 1.0;
    while sim.elapsed() < args.seconds {
        let report = sim.tick(args.step, args.intent, arena);
        if sim.elapsed() >= next_report {
            println!("{}", sim.snapshot().status_line());
            next_report += 1.0;
        }
        if report.phase == Phase::Terminal {
            println!("Game over! {}", sim.snapshot().status_line());
            return ExitCode::SUCCESS;
        }
        if report.dt <= 0.0 {
            error!(step = args.step, "time step does not advance the simulation");
            return ExitCode::FAILURE;
        }
    }

    info!(elapsed = sim.elapsed(), "prey survived");
    ExitCode::SUCCESS
}
