//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems at a fixed tick rate and produces `WorldSnapshot`s.
//! Headless and deterministic for a given seed and command stream.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vigil_core::commands::SimCommand;
use vigil_core::components::{Awareness, Health, NavAgent, Vitality};
use vigil_core::config::{ConfigError, IntruderSpawn, Rect, ScenarioConfig, SentinelSpawn};
use vigil_core::constants::TICK_RATE;
use vigil_core::enums::AlertState;
use vigil_core::events::{entity_id, EntityId, SimEvent};
use vigil_core::state::WorldSnapshot;
use vigil_core::types::{Position, SimTime};
use vigil_terrain::OcclusionGrid;

use crate::motion::MotionDriver;
use crate::scheduler::Scheduler;
use crate::spatial::WorldSpatial;
use crate::systems::{self, TickContext};
use crate::world_setup;

const DEFAULT_CELL_SIZE: f64 = 0.25;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per simulated second.
    pub tick_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    tick_rate: u32,
    rng: ChaCha8Rng,
    grid: OcclusionGrid,
    scheduler: Scheduler,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an empty world with no blocking geometry.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            tick_rate: config.tick_rate.max(1),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            grid: OcclusionGrid::open(DEFAULT_CELL_SIZE),
            scheduler: Scheduler::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Validate a scenario and build a world from it.
    pub fn from_scenario(config: SimConfig, scenario: &ScenarioConfig) -> Result<Self, ConfigError> {
        scenario.validate()?;
        let mut engine = Self::new(config);
        engine.grid = OcclusionGrid::from_rects(&scenario.obstacles, scenario.grid_cell_size);
        world_setup::setup_scenario(&mut engine.world, &mut engine.rng, scenario, 0.0);
        info!(
            "scenario loaded: {} sentinels, {} intruders, {} obstacles",
            scenario.sentinels.len(),
            scenario.intruders.len() + scenario.random_intruders,
            scenario.obstacles.len()
        );
        Ok(engine)
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance(self.tick_rate);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Run `ticks` ticks and return the last snapshot.
    pub fn run_ticks(&mut self, ticks: u64) -> WorldSnapshot {
        let mut snapshot = self.snapshot();
        for _ in 0..ticks {
            snapshot = self.tick();
        }
        snapshot
    }

    /// Current state without advancing time. Pending events are not
    /// consumed.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.events.clone())
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        SimTime::dt(self.tick_rate)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Replace the blocking geometry.
    pub fn set_obstacles(&mut self, obstacles: &[Rect], cell_size: f64) {
        self.grid = OcclusionGrid::from_rects(obstacles, cell_size);
    }

    /// Spawn a sentinel after validating its parameters.
    pub fn spawn_sentinel(&mut self, spawn: &SentinelSpawn) -> Result<Entity, ConfigError> {
        spawn.params.validate()?;
        Ok(world_setup::spawn_sentinel(
            &mut self.world,
            spawn,
            self.time.elapsed_secs,
        ))
    }

    pub fn spawn_intruder(&mut self, spawn: &IntruderSpawn) -> Entity {
        world_setup::spawn_intruder(&mut self.world, spawn)
    }

    /// Remove an entity immediately, cancelling every task it owns.
    /// Returns false if it did not exist.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let cancelled = self.scheduler.cancel_owner(entity);
        if self.world.despawn(entity).is_err() {
            return false;
        }
        info!("{entity:?} despawned ({cancelled} pending tasks cancelled)");
        self.events.push(SimEvent::EntityDestroyed {
            entity: entity_id(entity),
        });
        true
    }

    /// Damage an entity. Returns the remaining health, or None if it has
    /// no vitality. Removal of the dead happens at the end of the tick.
    pub fn apply_damage(&mut self, entity: Entity, amount: f64) -> Option<f64> {
        self.world
            .get::<&mut Health>(entity)
            .ok()
            .map(|mut health| health.apply_damage(amount))
    }

    pub fn state_of(&self, entity: Entity) -> Option<AlertState> {
        systems::controller::state_of(&self.world, entity)
    }

    pub fn target_of(&self, entity: Entity) -> Option<Entity> {
        self.world.get::<&Awareness>(entity).ok().and_then(|aw| aw.target)
    }

    /// Deliver a threat report to a sentinel from outside the tick.
    /// Only a guarding sentinel reacts.
    pub fn notify_threat_spotted(&mut self, sentinel: Entity, threat: Entity) -> bool {
        let spatial = WorldSpatial::new(&self.world, &self.grid);
        let mut ctx = TickContext {
            spatial: &spatial,
            scheduler: &mut self.scheduler,
            events: &mut self.events,
            now: self.time.elapsed_secs,
            dt: SimTime::dt(self.tick_rate),
        };
        systems::alert::notify_threat_spotted(&self.world, &mut ctx, sentinel, threat)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SpawnSentinel { spawn } => {
                if let Err(err) = self.spawn_sentinel(&spawn) {
                    warn!("rejected sentinel spawn: {err}");
                }
            }
            SimCommand::SpawnIntruder { spawn } => {
                self.spawn_intruder(&spawn);
            }
            SimCommand::ApplyDamage { entity, amount } => {
                match self.resolve(entity) {
                    Some(e) => {
                        self.apply_damage(e, amount);
                    }
                    None => warn!("damage for unknown entity {entity}"),
                }
            }
            SimCommand::Despawn { entity } => match self.resolve(entity) {
                Some(e) => {
                    self.despawn(e);
                }
                None => warn!("despawn for unknown entity {entity}"),
            },
            SimCommand::SetDestination {
                entity,
                destination,
            } => self.set_destination(entity, destination),
        }
    }

    fn set_destination(&mut self, id: EntityId, destination: Position) {
        let Some(entity) = self.resolve(id) else {
            warn!("destination for unknown entity {id}");
            return;
        };
        if let Ok(mut nav) = self.world.get::<&mut NavAgent>(entity) {
            nav.set_destination(destination);
        }
    }

    fn resolve(&self, id: EntityId) -> Option<Entity> {
        Entity::from_bits(id).filter(|e| self.world.contains(*e))
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = SimTime::dt(self.tick_rate);
        {
            let spatial = WorldSpatial::new(&self.world, &self.grid);
            let mut ctx = TickContext {
                spatial: &spatial,
                scheduler: &mut self.scheduler,
                events: &mut self.events,
                now: self.time.elapsed_secs,
                dt,
            };
            // 1. Delayed tasks due this tick
            systems::tasks::run(&self.world, &mut ctx);
            // 2. Periodic scans
            systems::perception::run(&self.world, &mut ctx);
            // 3. Separation, tracking and state behaviour per sentinel
            systems::controller::run(&self.world, &mut ctx);
        }
        // 4. Movement
        systems::navigation::run(&mut self.world, dt);
        // 5. Remove the dead
        systems::cleanup::run(
            &mut self.world,
            &mut self.scheduler,
            &mut self.events,
            &mut self.despawn_buffer,
        );
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

