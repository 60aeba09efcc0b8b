//! Threat alerts between allied sentinels.

use hecs::{Entity, World};
use log::debug;

use vigil_ai::fsm::{self, Trigger};
use vigil_core::components::{Awareness, Perception};
use vigil_core::events::{entity_id, SimEvent};

use crate::spatial::position_of;
use crate::systems::{controller, TickContext};

/// Alert every ally within `source`'s view radius about `threat`.
/// Returns how many allies took up the alert.
pub fn broadcast(world: &World, ctx: &mut TickContext, source: Entity, threat: Entity) -> usize {
    let Some(origin) = position_of(world, source) else {
        return 0;
    };
    let Ok((radius, mask)) = world
        .get::<&Perception>(source)
        .map(|p| (p.view_radius, p.ally_mask))
    else {
        return 0;
    };

    let mut allies: Vec<Entity> = ctx
        .spatial
        .query_radius(&origin, radius, mask)
        .into_iter()
        .map(|(ally, _)| ally)
        .filter(|ally| *ally != source)
        .collect();
    allies.sort_by_key(|e| e.to_bits());

    let mut accepted = 0;
    for ally in allies {
        if notify_threat_spotted(world, ctx, ally, threat) {
            debug!("{source:?} alerted {ally:?} about {threat:?}");
            ctx.events.push(SimEvent::AlertDelivered {
                from: entity_id(source),
                to: entity_id(ally),
                threat: entity_id(threat),
            });
            accepted += 1;
        }
    }
    accepted
}

/// Deliver a threat report to `sentinel`. Only a guarding sentinel reacts,
/// by entering Danger with `threat` as its candidate; otherwise this is a
/// no-op. Returns whether the alert was taken up.
pub fn notify_threat_spotted(world: &World, ctx: &mut TickContext, sentinel: Entity, threat: Entity) -> bool {
    let accepts = world
        .get::<&Awareness>(sentinel)
        .map(|aw| fsm::accepts_alert(aw.state))
        .unwrap_or(false);
    accepts && controller::transition(world, ctx, sentinel, Trigger::AlertReceived, Some(threat))
}
