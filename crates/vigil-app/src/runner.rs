//! Headless scenario runner: loads a scenario, drives the engine for a
//! fixed number of ticks and reports what happened.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use vigil_core::config::{IntruderSpawn, ScenarioConfig, SentinelSpawn};
use vigil_core::events::SimEvent;
use vigil_core::state::WorldSnapshot;
use vigil_core::types::Position;
use vigil_sim::{SimConfig, SimulationEngine};

/// Read and validate a scenario file, or fall back to the built-in demo.
pub fn load_scenario(path: Option<&Path>) -> Result<ScenarioConfig> {
    let Some(path) = path else {
        return Ok(demo_scenario());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    ScenarioConfig::from_json_str(&json)
        .with_context(|| format!("loading scenario {}", path.display()))
}

/// Two sentinels patrolling a square with one intruder walking across it.
pub fn demo_scenario() -> ScenarioConfig {
    let square = vec![
        Position::new(-6.0, -6.0, 0.0),
        Position::new(6.0, -6.0, 0.0),
        Position::new(6.0, 6.0, 0.0),
        Position::new(-6.0, 6.0, 0.0),
    ];
    let mut opposite = square.clone();
    opposite.rotate_left(2);

    ScenarioConfig {
        sentinels: vec![
            SentinelSpawn::new(square[0], square),
            SentinelSpawn::new(opposite[0], opposite),
        ],
        intruders: vec![IntruderSpawn {
            destination: Some(Position::new(15.0, 2.0, 0.0)),
            speed: 1.5,
            ..IntruderSpawn::stationary(Position::new(-15.0, 2.0, 0.0))
        }],
        ..ScenarioConfig::default()
    }
}

/// Summary of a finished run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub state_changes: usize,
    pub attacks: usize,
    pub destroyed: usize,
}

/// Build an engine and run it for `ticks` ticks, logging state changes.
/// Returns the final snapshot and a tally of the events seen.
pub fn run_scenario(
    scenario: &ScenarioConfig,
    config: SimConfig,
    ticks: u64,
) -> Result<(WorldSnapshot, RunReport)> {
    let mut engine = SimulationEngine::from_scenario(config, scenario)?;
    let mut report = RunReport::default();
    let mut last = engine.snapshot();

    for _ in 0..ticks {
        last = engine.tick();
        for event in &last.events {
            match event {
                SimEvent::StateChanged { entity, from, to } => {
                    report.state_changes += 1;
                    info!(
                        "t={:.2}s sentinel {entity}: {} -> {}",
                        last.time.elapsed_secs,
                        from.label(),
                        to.label()
                    );
                }
                SimEvent::AttackLanded { .. } => report.attacks += 1,
                SimEvent::EntityDestroyed { .. } => report.destroyed += 1,
                SimEvent::ThreatSpotted { .. } | SimEvent::AlertDelivered { .. } => {}
            }
        }
    }

    Ok((last, report))
}
