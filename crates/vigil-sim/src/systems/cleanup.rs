//! Cleanup system: removes destroyed entities and their pending tasks.

use hecs::{Entity, World};
use log::info;

use vigil_core::components::Health;
use vigil_core::events::{entity_id, SimEvent};

use crate::scheduler::Scheduler;

/// Despawn every entity whose health has run out. Uses a pre-allocated
/// buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    scheduler: &mut Scheduler,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, health) in world.query_mut::<&Health>() {
        if health.current <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
    despawn_buffer.sort_by_key(|e| e.to_bits());

    for entity in despawn_buffer.drain(..) {
        scheduler.cancel_owner(entity);
        if world.despawn(entity).is_ok() {
            info!("{entity:?} destroyed");
            events.push(SimEvent::EntityDestroyed {
                entity: entity_id(entity),
            });
        }
    }
}
