//! Periodic field-of-view scan.
//!
//! Each sentinel scans on its own clock (`Perception::next_scan_secs`),
//! and only while guarding. A hit moves the sentinel to Danger with the
//! detected entity as candidate.

use hecs::{Entity, World};
use log::debug;

use vigil_ai::fsm::{self, Trigger};
use vigil_ai::perception::{first_detection, next_scan_time};
use vigil_core::components::{Awareness, Heading, Perception, Sentinel};
use vigil_core::constants::TIME_EPSILON;
use vigil_core::events::{entity_id, SimEvent};
use vigil_core::types::{forward_from_yaw, Position};

use crate::spatial::{is_alive, EntityKey};
use crate::systems::{controller, TickContext};

pub fn run(world: &World, ctx: &mut TickContext) {
    let mut due: Vec<Entity> = {
        let mut query = world.query::<(&Sentinel, &mut Perception)>();
        query
            .iter()
            .filter_map(|(entity, (_, perception))| {
                if perception.next_scan_secs > ctx.now + TIME_EPSILON {
                    return None;
                }
                perception.next_scan_secs =
                    next_scan_time(perception.next_scan_secs, perception.scan_interval_secs, ctx.now);
                Some(entity)
            })
            .collect()
    };
    due.sort_by_key(|e| e.to_bits());

    for entity in due {
        let guarding = world
            .get::<&Awareness>(entity)
            .map(|aw| fsm::scans_in(aw.state))
            .unwrap_or(false);
        if !guarding {
            continue;
        }
        if let Some(threat) = scan(world, ctx, entity) {
            ctx.events.push(SimEvent::ThreatSpotted {
                sentinel: entity_id(entity),
                threat: entity_id(threat),
            });
            controller::transition(world, ctx, entity, Trigger::ThreatSighted, Some(threat));
        }
    }
}

/// Cone stage then close-range stage; the nearest live hostile in sight
/// wins.
fn scan(world: &World, ctx: &TickContext, entity: Entity) -> Option<Entity> {
    let origin = *world.get::<&Position>(entity).ok()?;
    let yaw = world.get::<&Heading>(entity).map(|h| h.yaw).unwrap_or(0.0);
    let perception = Perception::clone(&*world.get::<&Perception>(entity).ok()?);

    let spatial = ctx.spatial;
    let candidates = |radius: f64| -> Vec<(EntityKey, Position)> {
        spatial
            .query_radius(&origin, radius, perception.enemy_mask)
            .into_iter()
            .filter(|(other, _)| *other != entity && is_alive(world, *other))
            .map(|(other, pos)| (EntityKey(other), pos))
            .collect()
    };

    let detection = first_detection(
        &origin,
        forward_from_yaw(yaw),
        perception.view_angle_deg,
        candidates(perception.view_radius),
        candidates(perception.close_range_radius),
        |pos| spatial.line_of_sight_clear(&origin, pos),
    )?;

    debug!("{entity:?} spotted {:?} ({:?})", detection.id.0, detection.kind);
    Some(detection.id.0)
}
