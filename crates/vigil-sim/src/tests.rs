//! Scenario tests for the simulation engine and sentinel systems.

use hecs::Entity;

use vigil_core::commands::SimCommand;
use vigil_core::components::{Awareness, Intruder, Perception};
use vigil_core::config::{ConfigError, IntruderSpawn, Rect, ScenarioConfig, SentinelParams, SentinelSpawn};
use vigil_core::enums::{AlertState, CategoryMask};
use vigil_core::events::{entity_id, SimEvent};
use vigil_core::state::WorldSnapshot;
use vigil_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::scheduler::{Scheduler, TaskKind};
use crate::spatial::{SpatialQuery, WorldSpatial};
use crate::systems::{self, TickContext};
use crate::world_setup;

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default())
}

fn idle_sentinel(engine: &mut SimulationEngine, x: f64, y: f64) -> Entity {
    engine
        .spawn_sentinel(&SentinelSpawn::new(Position::new(x, y, 0.0), Vec::new()))
        .unwrap()
}

fn intruder(engine: &mut SimulationEngine, x: f64, y: f64, max_health: f64) -> Entity {
    engine.spawn_intruder(&IntruderSpawn {
        max_health,
        ..IntruderSpawn::stationary(Position::new(x, y, 0.0))
    })
}

fn run(engine: &mut SimulationEngine, ticks: usize) -> Vec<WorldSnapshot> {
    (0..ticks).map(|_| engine.tick()).collect()
}

fn all_events(snapshots: &[WorldSnapshot]) -> Vec<SimEvent> {
    snapshots.iter().flat_map(|s| s.events.clone()).collect()
}

// ---- Scheduler ----

#[test]
fn test_scheduler_fires_in_due_then_insertion_order() {
    let mut world = hecs::World::new();
    let a = world.spawn(());
    let b = world.spawn(());
    let mut scheduler = Scheduler::new();
    scheduler.schedule(a, TaskKind::AttackCooldown, 2.0);
    let first = scheduler.schedule(b, TaskKind::AttackCooldown, 1.0);
    let second = scheduler.schedule(a, TaskKind::IdentifyThreat { target: b }, 1.0);

    assert!(scheduler.take_due(0.5).is_empty());
    let due = scheduler.take_due(1.0);
    assert_eq!(due.iter().map(|t| t.seq).collect::<Vec<_>>(), vec![first, second]);
    assert_eq!(scheduler.len(), 1);

    assert_eq!(scheduler.cancel_owner(a), 1);
    assert!(scheduler.is_empty());
}

// ---- Detection and confirmation ----

#[test]
fn test_close_range_detection_then_attack_after_identify_delay() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    // Behind the sentinel (it faces north), inside the close-range radius.
    let threat = intruder(&mut engine, 0.0, -2.0, 100.0);

    let first = engine.tick();
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Danger));
    assert_eq!(engine.target_of(sentinel), Some(threat));
    assert!(first.events.contains(&SimEvent::ThreatSpotted {
        sentinel: entity_id(sentinel),
        threat: entity_id(threat),
    }));
    assert_eq!(engine.scheduler().pending_identify(sentinel), 1);

    // Identify delay is 1 s = 60 ticks; it fires at the start of tick 60.
    run(&mut engine, 59);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Danger));

    let snap = engine.tick();
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));
    let view = snap.sentinel(entity_id(sentinel)).unwrap();
    assert_eq!(view.label, "Attack");
    assert_eq!(view.view_angle_deg, 360.0);
    assert_eq!(view.target, Some(entity_id(threat)));
}

#[test]
fn test_sentinel_does_not_move_while_in_danger() {
    let mut engine = engine();
    let sentinel = engine.spawn_sentinel(&SentinelSpawn::new(
        Position::new(0.0, 0.0, 0.0),
        vec![Position::new(0.0, 8.0, 0.0)],
    ))
    .unwrap();
    intruder(&mut engine, 0.0, -2.0, 100.0);

    let start = engine.tick();
    let before = start.sentinel(entity_id(sentinel)).unwrap().position;
    let later = run(&mut engine, 30).pop().unwrap();
    let after = later.sentinel(entity_id(sentinel)).unwrap().position;

    assert_eq!(engine.state_of(sentinel), Some(AlertState::Danger));
    assert!(before.range_to(&after) < 1e-9);
}

#[test]
fn test_target_despawned_during_identify_returns_to_guard() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    let threat = intruder(&mut engine, 0.0, -2.0, 100.0);

    engine.tick();
    assert!(engine.despawn(threat));
    run(&mut engine, 60);

    assert_eq!(engine.state_of(sentinel), Some(AlertState::Guard));
    assert_eq!(engine.target_of(sentinel), None);
}

#[test]
fn test_owner_despawned_with_pending_identify_is_harmless() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    intruder(&mut engine, 0.0, -2.0, 100.0);

    engine.tick();
    assert_eq!(engine.scheduler().pending_identify(sentinel), 1);
    assert!(engine.despawn(sentinel));
    assert!(engine.scheduler().is_empty());

    let snaps = run(&mut engine, 120);
    assert!(snaps.last().unwrap().sentinels.is_empty());
}

#[test]
fn test_owner_killed_with_pending_identify_has_task_cancelled() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    let threat = intruder(&mut engine, 0.0, -2.0, 100.0);

    engine.tick();
    assert_eq!(engine.scheduler().pending_identify(sentinel), 1);

    assert_eq!(engine.apply_damage(sentinel, 500.0), Some(-400.0));
    let snap = engine.tick();
    assert!(snap
        .events
        .contains(&SimEvent::EntityDestroyed { entity: entity_id(sentinel) }));
    assert!(snap.sentinels.is_empty());
    assert_eq!(engine.scheduler().pending_identify(sentinel), 0);
    assert!(engine.scheduler().is_empty());

    // Past the identify delay nothing touches the threat.
    let snap = run(&mut engine, 90).pop().unwrap();
    let view = snap.intruders.iter().find(|i| i.id == entity_id(threat)).unwrap();
    assert_eq!(view.health, 100.0);
}

// ---- Scan clock ----

#[test]
fn test_spawn_rejects_vanishing_scan_interval() {
    let mut engine = engine();
    for interval in [0.0, 1e-18] {
        let mut spawn = SentinelSpawn::new(Position::default(), Vec::new());
        spawn.params.scan_interval_secs = interval;
        assert!(matches!(
            engine.spawn_sentinel(&spawn),
            Err(ConfigError::InvalidParameter { field: "scan_interval_secs", .. })
        ));
    }
    assert!(engine.tick().sentinels.is_empty());
}

#[test]
fn test_tiny_scan_interval_does_not_stall_the_tick() {
    let mut world = hecs::World::new();
    let mut spawn = SentinelSpawn::new(Position::default(), Vec::new());
    spawn.params.scan_interval_secs = 1e-18;
    let sentinel = world_setup::spawn_sentinel(&mut world, &spawn, 0.0);

    let grid = vigil_terrain::OcclusionGrid::open(0.25);
    let mut scheduler = Scheduler::new();
    let mut events = Vec::new();
    for tick in 0..5u32 {
        let spatial = WorldSpatial::new(&world, &grid);
        let mut ctx = TickContext {
            spatial: &spatial,
            scheduler: &mut scheduler,
            events: &mut events,
            now: f64::from(tick) / 60.0,
            dt: 1.0 / 60.0,
        };
        systems::perception::run(&world, &mut ctx);
    }

    let next = world.get::<&Perception>(sentinel).unwrap().next_scan_secs;
    assert!(next > 4.0 / 60.0);
}

#[test]
fn test_scan_runs_once_per_interval() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);

    run(&mut engine, 1);
    let after_first = engine.world().get::<&Perception>(sentinel).unwrap().next_scan_secs;
    assert!((after_first - 0.5).abs() < 1e-12);

    run(&mut engine, 30);
    let after_second = engine.world().get::<&Perception>(sentinel).unwrap().next_scan_secs;
    assert!((after_second - 1.0).abs() < 1e-12);
}

// ---- Spatial seam ----

/// Sees nothing and is blocked everywhere.
struct Blindfold;

impl SpatialQuery for Blindfold {
    fn query_radius(&self, _center: &Position, _radius: f64, _mask: CategoryMask) -> Vec<(Entity, Position)> {
        Vec::new()
    }

    fn line_of_sight_clear(&self, _from: &Position, _to: &Position) -> bool {
        false
    }
}

#[test]
fn test_systems_only_see_through_the_spatial_query() {
    let mut world = hecs::World::new();
    let sentinel = world_setup::spawn_sentinel(
        &mut world,
        &SentinelSpawn::new(Position::default(), Vec::new()),
        0.0,
    );
    world_setup::spawn_intruder(
        &mut world,
        &IntruderSpawn::stationary(Position::new(0.0, 1.0, 0.0)),
    );
    let grid = vigil_terrain::OcclusionGrid::open(0.25);
    let mut scheduler = Scheduler::new();
    let mut events = Vec::new();

    let blind = Blindfold;
    let mut ctx = TickContext {
        spatial: &blind,
        scheduler: &mut scheduler,
        events: &mut events,
        now: 0.0,
        dt: 1.0 / 60.0,
    };
    systems::perception::run(&world, &mut ctx);
    systems::controller::run(&world, &mut ctx);
    assert_eq!(systems::controller::state_of(&world, sentinel), Some(AlertState::Guard));
    assert!(world.get::<&Awareness>(sentinel).unwrap().tracked.is_empty());

    // Same world, real queries: the intruder a metre ahead is spotted.
    world.get::<&mut Perception>(sentinel).unwrap().next_scan_secs = 0.0;
    let spatial = WorldSpatial::new(&world, &grid);
    let mut ctx = TickContext {
        spatial: &spatial,
        scheduler: &mut scheduler,
        events: &mut events,
        now: 0.0,
        dt: 1.0 / 60.0,
    };
    systems::perception::run(&world, &mut ctx);
    assert_eq!(systems::controller::state_of(&world, sentinel), Some(AlertState::Danger));
    assert_eq!(scheduler.pending_identify(sentinel), 1);
}

// ---- Engagement ----

#[test]
fn test_kill_clears_target_then_reselects_nearest() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    let weak = intruder(&mut engine, 0.0, -2.0, 15.0);
    let next = intruder(&mut engine, 0.0, -5.0, 100.0);

    run(&mut engine, 60);
    let strike = engine.tick();
    assert!(strike.events.contains(&SimEvent::AttackLanded {
        attacker: entity_id(sentinel),
        target: entity_id(weak),
        damage: 15.0,
        remaining: 0.0,
    }));
    assert!(strike
        .events
        .contains(&SimEvent::EntityDestroyed { entity: entity_id(weak) }));
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));
    assert_eq!(engine.target_of(sentinel), None);

    engine.tick();
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));
    assert_eq!(engine.target_of(sentinel), Some(next));
}

#[test]
fn test_last_kill_returns_to_guard() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    intruder(&mut engine, 0.0, -2.0, 15.0);

    run(&mut engine, 62);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Guard));
    let view = engine.snapshot();
    let view = view.sentinel(entity_id(sentinel)).unwrap();
    assert_eq!(view.label, "Patrol");
    assert_eq!(view.view_angle_deg, 120.0);
}

#[test]
fn test_obstructed_target_is_dropped_after_lose_delay() {
    let mut engine = engine();
    let params = SentinelParams {
        attack_speed: 0.0,
        ..SentinelParams::default()
    };
    let sentinel = engine.spawn_sentinel(&SentinelSpawn {
        params,
        ..SentinelSpawn::new(Position::new(0.0, 0.0, 0.0), Vec::new())
    })
    .unwrap();
    intruder(&mut engine, 0.0, -2.5, 100.0);

    run(&mut engine, 61);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));

    engine.set_obstacles(&[Rect::new(-1.0, -1.6, 1.0, -1.0)], 0.25);

    // Lose delay is 2 s; the watchdog tolerates shorter obstruction.
    run(&mut engine, 100);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));

    run(&mut engine, 30);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Guard));
    assert_eq!(engine.target_of(sentinel), None);

    let perception = engine.world().get::<&Perception>(sentinel).unwrap();
    assert_eq!(perception.view_angle_deg, perception.base_view_angle_deg);
}

#[test]
fn test_at_most_one_identify_and_one_cooldown_pending() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    let threat = intruder(&mut engine, 0.0, -2.0, 1000.0);

    for _ in 0..400 {
        engine.tick();
        assert!(engine.scheduler().pending_identify(sentinel) <= 1);
        assert!(engine.scheduler().pending_cooldown(sentinel) <= 1);
        // Repeated external alerts never stack confirmations.
        engine.notify_threat_spotted(sentinel, threat);
        assert!(engine.scheduler().pending_identify(sentinel) <= 1);
    }
}

#[test]
fn test_state_invariants_hold_every_tick() {
    let scenario = ScenarioConfig {
        sentinels: vec![
            SentinelSpawn::new(
                Position::new(-4.0, 0.0, 0.0),
                vec![Position::new(-4.0, 6.0, 0.0), Position::new(4.0, 6.0, 0.0)],
            ),
            SentinelSpawn::new(Position::new(4.0, 0.0, 0.0), vec![Position::new(4.0, -6.0, 0.0)]),
        ],
        random_intruders: 4,
        random_area: Some(Rect::new(-8.0, -8.0, 8.0, 8.0)),
        ..ScenarioConfig::default()
    };
    let mut engine = SimulationEngine::from_scenario(SimConfig::default(), &scenario).unwrap();

    for _ in 0..900 {
        let snap = engine.tick();
        for view in &snap.sentinels {
            match view.state {
                AlertState::Guard => {
                    assert_eq!(view.target, None);
                    assert_eq!(view.view_angle_deg, 120.0);
                }
                AlertState::Danger => {
                    assert!(view.target.is_some());
                    assert_eq!(view.view_angle_deg, 120.0);
                }
                AlertState::Attack => assert_eq!(view.view_angle_deg, 360.0),
            }
            assert_eq!(view.label, view.state.label());
        }

        let mut query = engine.world().query::<(&Awareness, &Perception)>();
        for (_, (aw, perception)) in query.iter() {
            if aw.state == AlertState::Guard {
                assert_eq!(perception.view_radius, perception.base_view_radius);
                assert_eq!(perception.view_angle_deg, perception.base_view_angle_deg);
            }
            if aw.state == AlertState::Attack {
                assert_eq!(perception.view_radius, perception.base_view_radius);
            }
        }
    }
}

// ---- Alerts ----

#[test]
fn test_confirmed_threat_alerts_guarding_ally() {
    let mut engine = engine();
    let a = idle_sentinel(&mut engine, 0.0, 0.0);
    let b = idle_sentinel(&mut engine, 5.0, 0.0);
    let threat = intruder(&mut engine, 0.0, -2.0, 100.0);

    let mut snaps = run(&mut engine, 60);
    assert_eq!(engine.state_of(a), Some(AlertState::Danger));
    assert_eq!(engine.state_of(b), Some(AlertState::Guard));

    snaps.push(engine.tick());
    assert_eq!(engine.state_of(a), Some(AlertState::Attack));
    assert_eq!(engine.state_of(b), Some(AlertState::Danger));
    assert_eq!(engine.target_of(b), Some(threat));

    // B runs its own confirmation before engaging.
    snaps.extend(run(&mut engine, 59));
    assert_eq!(engine.state_of(b), Some(AlertState::Danger));
    snaps.push(engine.tick());
    assert_eq!(engine.state_of(b), Some(AlertState::Attack));
    assert_eq!(engine.target_of(b), Some(threat));

    let delivered = all_events(&snaps)
        .into_iter()
        .filter(|e| matches!(e, SimEvent::AlertDelivered { to, .. } if *to == entity_id(b)))
        .count();
    assert_eq!(delivered, 1);
}

#[test]
fn test_alert_is_ignored_outside_guard() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    let threat = intruder(&mut engine, 0.0, -2.0, 100.0);
    let other = intruder(&mut engine, 0.0, -2.5, 100.0);

    engine.tick();
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Danger));
    assert!(!engine.notify_threat_spotted(sentinel, other));
    assert_eq!(engine.target_of(sentinel), Some(threat));
    assert_eq!(engine.scheduler().pending_identify(sentinel), 1);

    run(&mut engine, 60);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));
    assert!(!engine.notify_threat_spotted(sentinel, other));
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));
}

#[test]
fn test_external_alert_moves_guard_to_danger() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 0.0, 0.0);
    let far = intruder(&mut engine, 0.0, 30.0, 100.0);

    assert!(engine.notify_threat_spotted(sentinel, far));
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Danger));
    assert_eq!(engine.target_of(sentinel), Some(far));

    // Out of sight radius, but line of sight is open: confirmation holds.
    run(&mut engine, 61);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Attack));
}

// ---- Patrol and movement ----

#[test]
fn test_patrol_cycles_through_route() {
    let mut engine = engine();
    let sentinel = engine.spawn_sentinel(&SentinelSpawn::new(
        Position::new(0.0, 0.0, 0.0),
        vec![Position::new(2.0, 0.0, 0.0), Position::new(2.0, 2.0, 0.0)],
    ))
    .unwrap();

    let mut indices = vec![0usize];
    for snap in run(&mut engine, 300) {
        let index = snap.sentinel(entity_id(sentinel)).unwrap().patrol_index;
        if indices.last() != Some(&index) {
            indices.push(index);
        }
    }

    assert!(indices.len() >= 4, "indices: {indices:?}");
    assert_eq!(&indices[..4], &[0, 1, 0, 1]);
    assert_eq!(engine.state_of(sentinel), Some(AlertState::Guard));
}

#[test]
fn test_empty_route_idles_in_place() {
    let mut engine = engine();
    let sentinel = idle_sentinel(&mut engine, 3.0, 3.0);

    let snap = run(&mut engine, 120).pop().unwrap();
    let view = snap.sentinel(entity_id(sentinel)).unwrap();
    assert_eq!(view.position, Position::new(3.0, 3.0, 0.0));
    assert_eq!(view.patrol_index, 0);
    assert_eq!(view.state, AlertState::Guard);
}

#[test]
fn test_separation_pushes_sentinels_apart() {
    let mut engine = engine();
    let a = idle_sentinel(&mut engine, 0.0, 0.0);
    let b = idle_sentinel(&mut engine, 0.5, 0.0);

    let snap = run(&mut engine, 30).pop().unwrap();
    let pa = snap.sentinel(entity_id(a)).unwrap().position;
    let pb = snap.sentinel(entity_id(b)).unwrap().position;
    let gap = pa.range_to(&pb);
    assert!(gap > 0.9 && gap < 2.0, "gap {gap}");
    assert!(pa.x < 0.0 && pb.x > 0.5);
}

#[test]
fn test_intruder_walks_to_destination() {
    let mut engine = engine();
    let walker = engine.spawn_intruder(&IntruderSpawn {
        destination: Some(Position::new(3.5, 0.0, 0.0)),
        ..IntruderSpawn::stationary(Position::new(0.0, 0.0, 0.0))
    });

    let snap = run(&mut engine, 90).pop().unwrap();
    let view = snap.intruders.iter().find(|i| i.id == entity_id(walker)).unwrap();
    assert!(view.position.range_to(&Position::new(3.5, 0.0, 0.0)) <= 0.1 + 1e-9);
}

// ---- Commands ----

#[test]
fn test_commands_spawn_damage_and_despawn() {
    let mut engine = engine();
    engine.queue_command(SimCommand::SpawnIntruder {
        spawn: IntruderSpawn::stationary(Position::new(50.0, 50.0, 0.0)),
    });
    let snap = engine.tick();
    assert_eq!(snap.intruders.len(), 1);
    let id = snap.intruders[0].id;

    engine.queue_command(SimCommand::ApplyDamage { entity: id, amount: 40.0 });
    let snap = engine.tick();
    assert_eq!(snap.intruders[0].health, 60.0);

    engine.queue_command(SimCommand::ApplyDamage { entity: id, amount: 60.0 });
    let snap = engine.tick();
    assert!(snap.intruders.is_empty());
    assert!(snap.events.contains(&SimEvent::EntityDestroyed { entity: id }));

    // Commands naming a gone entity are dropped.
    engine.queue_commands([
        SimCommand::Despawn { entity: id },
        SimCommand::SetDestination {
            entity: id,
            destination: Position::default(),
        },
    ]);
    engine.tick();
    let count = engine.world().query::<&Intruder>().iter().count();
    assert_eq!(count, 0);
}

#[test]
fn test_invalid_sentinel_spawn_command_is_rejected() {
    let mut engine = engine();
    let mut spawn = SentinelSpawn::new(Position::default(), Vec::new());
    spawn.params.view_angle_deg = 0.0;
    engine.queue_command(SimCommand::SpawnSentinel { spawn });
    assert!(engine.tick().sentinels.is_empty());
}

#[test]
fn test_scenario_from_json() {
    let json = r#"{
        "sentinels": [
            { "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
              "route": [ { "x": 0.0, "y": 5.0, "z": 0.0 } ],
              "params": { "view_radius": 12.0 } }
        ],
        "intruders": [ { "position": { "x": 1.0, "y": -1.0, "z": 0.0 } } ],
        "obstacles": [ { "min_x": 5.0, "min_y": 5.0, "max_x": 6.0, "max_y": 6.0 } ]
    }"#;
    let scenario = ScenarioConfig::from_json_str(json).unwrap();
    let mut engine = SimulationEngine::from_scenario(SimConfig::default(), &scenario).unwrap();

    let snap = engine.tick();
    assert_eq!(snap.sentinels.len(), 1);
    assert_eq!(snap.intruders.len(), 1);
    assert_eq!(snap.sentinels[0].view_radius, 12.0);
    assert_eq!(snap.sentinels[0].state, AlertState::Danger);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let scenario = ScenarioConfig {
        sentinels: vec![
            SentinelSpawn::new(Position::new(0.0, 0.0, 0.0), vec![Position::new(0.0, 6.0, 0.0)]),
            SentinelSpawn::new(Position::new(3.0, 0.0, 0.0), Vec::new()),
        ],
        random_intruders: 5,
        random_area: Some(Rect::new(-10.0, -10.0, 10.0, 10.0)),
        ..ScenarioConfig::default()
    };
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::from_scenario(config, &scenario).unwrap();
    let mut engine_b = SimulationEngine::from_scenario(config, &scenario).unwrap();

    for _ in 0..300 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_different_seeds_place_intruders_differently() {
    let scenario = ScenarioConfig {
        random_intruders: 3,
        ..ScenarioConfig::default()
    };
    let a = SimulationEngine::from_scenario(SimConfig { seed: 1, ..Default::default() }, &scenario)
        .unwrap()
        .snapshot();
    let b = SimulationEngine::from_scenario(SimConfig { seed: 2, ..Default::default() }, &scenario)
        .unwrap()
        .snapshot();

    let positions = |s: &WorldSnapshot| s.intruders.iter().map(|i| i.position).collect::<Vec<_>>();
    assert_ne!(positions(&a), positions(&b));
    for view in &a.intruders {
        assert!(Rect::new(-20.0, -20.0, 20.0, 20.0).contains(view.position.x, view.position.y));
    }
}
