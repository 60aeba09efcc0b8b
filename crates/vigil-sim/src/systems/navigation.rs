//! Straight-line navigation for every entity with a `NavAgent`.
//!
//! Applies the pending separation nudge, moves toward the destination at
//! the agent's speed unless stopped, turns the heading to the direction of
//! travel and refreshes the remaining distance.

use glam::DVec3;
use hecs::World;

use vigil_core::components::{Heading, NavAgent};
use vigil_core::types::Position;

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, nav, heading)) in
        world.query_mut::<(&mut Position, &mut NavAgent, Option<&mut Heading>)>()
    {
        if nav.pending_nudge != DVec3::ZERO {
            *pos = pos.offset(nav.pending_nudge);
            nav.pending_nudge = DVec3::ZERO;
        }
        nav.path_pending = false;

        let Some(destination) = nav.destination else {
            nav.remaining_distance = 0.0;
            continue;
        };

        let to_dest = pos.vector_to(&destination);
        let distance = to_dest.length();

        if !nav.stopped && distance > nav.stopping_distance {
            if let Some(heading) = heading {
                heading.yaw = pos.bearing_to(&destination);
            }
            let step = nav.speed * dt;
            if step >= distance {
                *pos = destination;
            } else {
                *pos = pos.offset(to_dest / distance * step);
            }
        }

        nav.remaining_distance = pos.range_to(&destination);
    }
}
