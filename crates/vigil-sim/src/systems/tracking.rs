//! Refreshes the set of hostiles a sentinel is currently tracking.

use hecs::{Entity, World};

use vigil_core::components::{Awareness, Perception};

use crate::spatial::{is_alive, position_of};
use crate::systems::TickContext;

/// Replace `Awareness::tracked` with the live hostiles inside the current
/// view radius, ordered by entity bits.
pub fn refresh(world: &World, ctx: &TickContext, entity: Entity) {
    let Some(origin) = position_of(world, entity) else {
        return;
    };
    let Ok((radius, mask)) = world
        .get::<&Perception>(entity)
        .map(|p| (p.view_radius, p.enemy_mask))
    else {
        return;
    };

    let mut tracked: Vec<Entity> = ctx
        .spatial
        .query_radius(&origin, radius, mask)
        .into_iter()
        .map(|(other, _)| other)
        .filter(|other| *other != entity && is_alive(world, *other))
        .collect();
    tracked.sort_by_key(|e| e.to_bits());

    if let Ok(mut aw) = world.get::<&mut Awareness>(entity) {
        aw.tracked = tracked;
    }
}
