//! Fires delayed tasks whose due time has been reached.

use hecs::World;
use log::trace;

use vigil_core::components::Awareness;

use crate::scheduler::TaskKind;
use crate::systems::{controller, TickContext};

/// Run every task due at `ctx.now`. A task whose owner no longer exists
/// is dropped without effect.
pub fn run(world: &World, ctx: &mut TickContext) {
    for task in ctx.scheduler.take_due(ctx.now) {
        if !world.contains(task.owner) {
            trace!("dropping {:?} for despawned {:?}", task.kind, task.owner);
            continue;
        }
        match task.kind {
            TaskKind::IdentifyThreat { target } => {
                controller::resolve_identify(world, ctx, task.owner, target);
            }
            TaskKind::AttackCooldown => {
                if let Ok(mut aw) = world.get::<&mut Awareness>(task.owner) {
                    aw.attacking = false;
                }
            }
        }
    }
}
