//! Entity spawn factories for setting up the simulation world.
//!
//! Creates sentinel and intruder entities with their component bundles.

use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vigil_core::components::*;
use vigil_core::config::{IntruderSpawn, Rect, ScenarioConfig, SentinelSpawn};
use vigil_core::constants::DEFAULT_STOPPING_DISTANCE;
use vigil_core::enums::{Category, CategoryMask};
use vigil_core::types::Position;

use crate::motion::MotionDriver;

/// Area used for random intruders when the scenario names none.
pub const DEFAULT_RANDOM_AREA: Rect = Rect {
    min_x: -20.0,
    min_y: -20.0,
    max_x: 20.0,
    max_y: 20.0,
};

/// Populate the world from a scenario. Sentinels scan first at `now`.
pub fn setup_scenario(world: &mut World, rng: &mut ChaCha8Rng, scenario: &ScenarioConfig, now: f64) {
    for spawn in &scenario.sentinels {
        spawn_sentinel(world, spawn, now);
    }
    for spawn in &scenario.intruders {
        spawn_intruder(world, spawn);
    }
    if scenario.random_intruders > 0 {
        let area = scenario.random_area.unwrap_or(DEFAULT_RANDOM_AREA);
        spawn_random_intruders(world, rng, scenario.random_intruders, &area);
    }
}

/// Spawn a guarding sentinel heading for the first waypoint of its route.
pub fn spawn_sentinel(world: &mut World, spawn: &SentinelSpawn, now: f64) -> Entity {
    let params = &spawn.params;

    let perception = Perception {
        view_radius: params.view_radius,
        view_angle_deg: params.view_angle_deg,
        close_range_radius: params.close_range_radius,
        base_view_radius: params.view_radius,
        base_view_angle_deg: params.view_angle_deg,
        enemy_mask: CategoryMask::INTRUDER,
        ally_mask: CategoryMask::SENTINEL,
        scan_interval_secs: params.scan_interval_secs,
        next_scan_secs: now,
    };

    let mut nav = NavAgent::new(params.patrol_speed, params.stopping_distance);
    if let Some(first) = spawn.route.first() {
        nav.set_destination(*first);
    }

    let entity = world.spawn((
        Sentinel,
        Category::Sentinel,
        spawn.position,
        Heading { yaw: spawn.heading },
        Health::full(params.max_health),
        perception,
        Reaction {
            threat_identify_secs: params.threat_identify_secs,
            target_lose_secs: params.target_lose_secs,
        },
        Awareness::default(),
        Patrol {
            route: spawn.route.clone(),
            index: 0,
        },
        Mobility {
            patrol_speed: params.patrol_speed,
            attack_speed: params.attack_speed,
        },
        Weapon {
            damage: params.attack_damage,
            range: params.attack_range,
            cooldown_secs: params.attack_cooldown_secs,
        },
        Separation {
            radius: params.avoid_radius,
            force: params.avoid_force,
        },
        nav,
    ));
    debug!("spawned sentinel {entity:?} at {:?}", spawn.position);
    entity
}

/// Spawn an intruder, walking to its destination if it has one.
pub fn spawn_intruder(world: &mut World, spawn: &IntruderSpawn) -> Entity {
    let mut nav = NavAgent::new(spawn.speed, DEFAULT_STOPPING_DISTANCE);
    if let Some(destination) = spawn.destination {
        nav.set_destination(destination);
    }

    let entity = world.spawn((
        Intruder,
        Category::Intruder,
        spawn.position,
        Heading::default(),
        Health::full(spawn.max_health),
        nav,
    ));
    debug!("spawned intruder {entity:?} at {:?}", spawn.position);
    entity
}

/// Scatter stationary intruders uniformly over `area`.
pub fn spawn_random_intruders(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: usize,
    area: &Rect,
) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let position = Position::new(
                rng.gen_range(area.min_x..=area.max_x),
                rng.gen_range(area.min_y..=area.max_y),
                0.0,
            );
            spawn_intruder(world, &IntruderSpawn::stationary(position))
        })
        .collect()
}
