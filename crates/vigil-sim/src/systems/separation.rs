//! Same-category separation steering.

use hecs::{Entity, World};

use vigil_ai::separation::avoidance_nudge;
use vigil_core::components::{NavAgent, Separation};
use vigil_core::enums::Category;

use crate::motion::MotionDriver;
use crate::spatial::position_of;
use crate::systems::TickContext;

/// Nudge `entity` away from same-category neighbours inside its avoid
/// radius. Applied by navigation regardless of path or stopped state.
pub fn apply(world: &World, ctx: &TickContext, entity: Entity) {
    let Some(origin) = position_of(world, entity) else {
        return;
    };
    let (Ok(separation), Ok(category)) = (
        world.get::<&Separation>(entity).map(|s| *s),
        world.get::<&Category>(entity).map(|c| *c),
    ) else {
        return;
    };

    let neighbours = ctx
        .spatial
        .query_radius(&origin, separation.radius, category.mask())
        .into_iter()
        .filter(|(other, _)| *other != entity)
        .map(|(_, pos)| pos);

    if let Some(displacement) = avoidance_nudge(&origin, neighbours, separation.force, ctx.dt) {
        if let Ok(mut nav) = world.get::<&mut NavAgent>(entity) {
            nav.nudge(displacement);
        }
    }
}
