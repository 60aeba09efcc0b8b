use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use vigil_core::config::Rect;
use vigil_sim::SimConfig;

mod logging;
mod runner;

/// Headless sentinel patrol simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file. Runs the built-in demo when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Extra intruders scattered at random
    #[arg(long, default_value_t = 0)]
    random_intruders: usize,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut scenario = runner::load_scenario(args.scenario.as_deref())?;
    if args.random_intruders > 0 {
        scenario.random_intruders += args.random_intruders;
        scenario
            .random_area
            .get_or_insert(Rect::new(-20.0, -20.0, 20.0, 20.0));
    }

    let config = SimConfig {
        seed: args.seed,
        ..SimConfig::default()
    };
    let (snapshot, report) = runner::run_scenario(&scenario, config, args.ticks)?;

    info!(
        "ran {} ticks ({:.1}s): {} state changes, {} attacks, {} destroyed",
        snapshot.time.tick,
        snapshot.time.elapsed_secs,
        report.state_changes,
        report.attacks,
        report.destroyed
    );
    for view in &snapshot.sentinels {
        info!(
            "sentinel {} at ({:.1}, {:.1}) {} health {:.0}",
            view.id, view.position.x, view.position.y, view.label, view.health
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
