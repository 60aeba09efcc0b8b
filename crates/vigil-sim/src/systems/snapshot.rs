//! Snapshot system: queries the ECS world and builds a `WorldSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::World;

use vigil_core::components::*;
use vigil_core::events::{entity_id, SimEvent};
use vigil_core::state::{IntruderView, SentinelView, WorldSnapshot};
use vigil_core::types::{Position, SimTime};

pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<SimEvent>) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        sentinels: build_sentinels(world),
        intruders: build_intruders(world),
        events,
    }
}

fn build_sentinels(world: &World) -> Vec<SentinelView> {
    let mut views: Vec<SentinelView> = world
        .query::<(
            &Sentinel,
            &Position,
            &Awareness,
            &Perception,
            Option<&Heading>,
            Option<&Health>,
            Option<&Patrol>,
        )>()
        .iter()
        .map(|(entity, (_, pos, aw, perception, heading, health, patrol))| SentinelView {
            id: entity_id(entity),
            position: *pos,
            heading: heading.map(|h| h.yaw).unwrap_or(0.0),
            state: aw.state,
            label: aw.state.label().to_string(),
            target: aw.target.map(entity_id),
            health: health.map(|h| h.current).unwrap_or(0.0),
            patrol_index: patrol.map(|p| p.index).unwrap_or(0),
            view_radius: perception.view_radius,
            view_angle_deg: perception.view_angle_deg,
            tracked_count: aw.tracked.len(),
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_intruders(world: &World) -> Vec<IntruderView> {
    let mut views: Vec<IntruderView> = world
        .query::<(&Intruder, &Position, Option<&Health>)>()
        .iter()
        .map(|(entity, (_, pos, health))| IntruderView {
            id: entity_id(entity),
            position: *pos,
            health: health.map(|h| h.current).unwrap_or(0.0),
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}
