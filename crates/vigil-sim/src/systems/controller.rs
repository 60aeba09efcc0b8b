//! Sentinel state machine: per-tick behaviour and the single path through
//! which every state change is applied.

use hecs::{Entity, World};
use log::{debug, info};

use vigil_ai::fsm::{self, AttackContext, IdentifyVerdict, TargetObservation, Trigger};
use vigil_ai::targeting::select_nearest;
use vigil_core::components::*;
use vigil_core::constants::DEFAULT_THREAT_IDENTIFY_SECS;
use vigil_core::enums::AlertState;
use vigil_core::events::{entity_id, SimEvent};
use vigil_core::types::Position;

use crate::motion::MotionDriver;
use crate::scheduler::TaskKind;
use crate::spatial::{is_alive, position_of, EntityKey};
use crate::systems::{alert, separation, tracking, TickContext};

/// Run one tick for every sentinel: separation, tracker refresh, then the
/// behaviour of the current state, in that order per sentinel.
pub fn run(world: &World, ctx: &mut TickContext) {
    let mut sentinels: Vec<Entity> = {
        let mut query = world.query::<(&Sentinel, &Awareness)>();
        query.iter().map(|(entity, _)| entity).collect()
    };
    sentinels.sort_by_key(|e| e.to_bits());

    for entity in sentinels {
        separation::apply(world, ctx, entity);
        tracking::refresh(world, ctx, entity);
        update(world, ctx, entity);
    }
}

/// State-specific behaviour for one sentinel.
pub fn update(world: &World, ctx: &mut TickContext, entity: Entity) {
    let Some(state) = state_of(world, entity) else {
        return;
    };
    match state {
        AlertState::Guard => patrol(world, entity),
        AlertState::Danger => {
            if let Ok(mut nav) = world.get::<&mut NavAgent>(entity) {
                nav.stop();
            }
        }
        AlertState::Attack => attack(world, ctx, entity),
    }
}

pub fn state_of(world: &World, entity: Entity) -> Option<AlertState> {
    world.get::<&Awareness>(entity).ok().map(|aw| aw.state)
}

/// Apply `trigger` to the sentinel if the transition table allows it.
///
/// Entering Danger records the candidate as target, halts movement and
/// schedules its confirmation. Entering Attack adopts the target, widens
/// vision to a full circle and resumes movement. Entering Guard restores
/// base vision and patrol speed, clears the target and heads back to the
/// current waypoint. Returns false and changes nothing otherwise.
pub fn transition(
    world: &World,
    ctx: &mut TickContext,
    entity: Entity,
    trigger: Trigger,
    subject: Option<Entity>,
) -> bool {
    let (from, to) = {
        let Ok(mut aw) = world.get::<&mut Awareness>(entity) else {
            return false;
        };
        let from = aw.state;
        let Some(to) = fsm::next_state(from, trigger) else {
            return false;
        };
        aw.state = to;
        aw.lose_target_secs = 0.0;
        match to {
            AlertState::Danger | AlertState::Attack => aw.target = subject,
            AlertState::Guard => aw.target = None,
        }
        (from, to)
    };

    if let Ok(mut perception) = world.get::<&mut Perception>(entity) {
        let (radius, angle) =
            fsm::vision_for(to, perception.base_view_radius, perception.base_view_angle_deg);
        perception.view_radius = radius;
        perception.view_angle_deg = angle;
    }

    if let Ok(mut nav) = world.get::<&mut NavAgent>(entity) {
        let mobility = world.get::<&Mobility>(entity).ok().map(|m| *m);
        match to {
            AlertState::Danger => nav.stop(),
            AlertState::Attack => {
                nav.resume();
                if let Some(m) = mobility {
                    nav.set_speed(m.attack_speed);
                }
            }
            AlertState::Guard => {
                nav.resume();
                if let Some(m) = mobility {
                    nav.set_speed(m.patrol_speed);
                }
                let waypoint = world
                    .get::<&Patrol>(entity)
                    .ok()
                    .and_then(|patrol| patrol.route.get(patrol.index).copied());
                match waypoint {
                    Some(waypoint) => nav.set_destination(waypoint),
                    None => nav.clear_destination(),
                }
            }
        }
    }

    if to == AlertState::Danger {
        if let Some(target) = subject {
            let delay = world
                .get::<&Reaction>(entity)
                .map(|r| r.threat_identify_secs)
                .unwrap_or(DEFAULT_THREAT_IDENTIFY_SECS);
            ctx.scheduler
                .schedule(entity, TaskKind::IdentifyThreat { target }, ctx.now + delay);
        }
    }

    info!("{entity:?} {from:?} -> {to:?} ({trigger:?}, subject {subject:?})");
    ctx.events.push(SimEvent::StateChanged {
        entity: entity_id(entity),
        from,
        to,
    });
    true
}

/// Shared abort/reset path back to Guard, from either Danger or Attack.
pub fn return_to_patrol(world: &World, ctx: &mut TickContext, entity: Entity) -> bool {
    let trigger = match state_of(world, entity) {
        Some(AlertState::Danger) => Trigger::ThreatRejected,
        Some(AlertState::Attack) => Trigger::TargetLost,
        Some(AlertState::Guard) | None => return false,
    };
    transition(world, ctx, entity, trigger, None)
}

/// Continuation of a threat confirmation whose delay has elapsed.
///
/// Does nothing if the owner is gone or no longer in Danger. Otherwise
/// engages and alerts allies if the target is alive and in sight, and
/// stands down to Guard if not.
pub fn resolve_identify(world: &World, ctx: &mut TickContext, owner: Entity, target: Entity) {
    if state_of(world, owner) != Some(AlertState::Danger) {
        debug!("{owner:?} identify for {target:?} is stale, dropped");
        return;
    }
    let Some(origin) = position_of(world, owner) else {
        return;
    };

    let alive = is_alive(world, target);
    let in_sight = alive
        && position_of(world, target)
            .map(|pos| ctx.spatial.line_of_sight_clear(&origin, &pos))
            .unwrap_or(false);

    match fsm::identify_verdict(alive, in_sight) {
        IdentifyVerdict::Confirm => {
            if transition(world, ctx, owner, Trigger::ThreatConfirmed, Some(target)) {
                alert::broadcast(world, ctx, owner, target);
            }
        }
        IdentifyVerdict::Reject => {
            debug!("{owner:?} rejected {target:?} (alive: {alive}, in sight: {in_sight})");
            return_to_patrol(world, ctx, owner);
        }
    }
}

/// Guard: walk the cyclic route, advancing on arrival.
fn patrol(world: &World, entity: Entity) {
    let (Ok(mut nav), Ok(mut patrol)) = (
        world.get::<&mut NavAgent>(entity),
        world.get::<&mut Patrol>(entity),
    ) else {
        return;
    };

    if !fsm::has_arrived(nav.remaining_distance(), nav.stopping_distance, nav.is_path_pending()) {
        return;
    }
    if let Some(next) = fsm::next_patrol_index(patrol.index, patrol.route.len()) {
        patrol.index = next;
        let waypoint = patrol.route[next];
        nav.set_destination(waypoint);
        debug!("{entity:?} patrol -> waypoint {next}");
    }
}

/// Attack: reselect if needed, pursue, run the loss-of-target watchdog,
/// alert allies and strike when in range.
fn attack(world: &World, ctx: &mut TickContext, entity: Entity) {
    let Some(origin) = position_of(world, entity) else {
        return;
    };

    let Some(target) = current_or_nearest_target(world, entity, &origin) else {
        debug!("{entity:?} has no target left");
        return_to_patrol(world, ctx, entity);
        return;
    };
    let Some(target_pos) = position_of(world, target) else {
        return_to_patrol(world, ctx, entity);
        return;
    };

    let view_radius = {
        let Ok(mut perception) = world.get::<&mut Perception>(entity) else {
            return;
        };
        let (radius, angle) = fsm::vision_for(
            AlertState::Attack,
            perception.base_view_radius,
            perception.base_view_angle_deg,
        );
        perception.view_radius = radius;
        perception.view_angle_deg = angle;
        radius
    };
    let attack_speed = world.get::<&Mobility>(entity).map(|m| m.attack_speed).ok();

    if let Ok(mut nav) = world.get::<&mut NavAgent>(entity) {
        nav.set_destination(target_pos);
        if let Some(speed) = attack_speed {
            nav.set_speed(speed);
        }
    }

    let update = {
        let Ok(aw) = world.get::<&Awareness>(entity) else {
            return;
        };
        let attack_range = world.get::<&Weapon>(entity).map(|w| w.range).unwrap_or(0.0);
        let target_lose_secs = world
            .get::<&Reaction>(entity)
            .map(|r| r.target_lose_secs)
            .unwrap_or(0.0);
        let line_of_sight = ctx.spatial.line_of_sight_clear(&origin, &target_pos);

        fsm::evaluate_attack(&AttackContext {
            target: Some(TargetObservation {
                distance: origin.range_to(&target_pos),
                line_of_sight,
            }),
            view_radius,
            attack_range,
            lose_target_secs: aw.lose_target_secs,
            target_lose_secs,
            attacking: aw.attacking,
            dt: ctx.dt,
        })
    };

    if update.lost {
        info!("{entity:?} lost sight of {target:?}");
        return_to_patrol(world, ctx, entity);
        return;
    }
    if let Ok(mut aw) = world.get::<&mut Awareness>(entity) {
        aw.lose_target_secs = update.lose_target_secs;
    }

    alert::broadcast(world, ctx, entity, target);

    if update.strike {
        execute_attack(world, ctx, entity, target);
    }
}

/// The held target if it is still alive; otherwise the nearest live
/// tracked hostile, which becomes the new target.
fn current_or_nearest_target(world: &World, entity: Entity, origin: &Position) -> Option<Entity> {
    let (held, tracked) = {
        let aw = world.get::<&Awareness>(entity).ok()?;
        (aw.target, aw.tracked.clone())
    };
    if let Some(target) = held.filter(|t| is_alive(world, *t)) {
        return Some(target);
    }

    let candidates = tracked
        .into_iter()
        .filter(|t| is_alive(world, *t))
        .filter_map(|t| position_of(world, t).map(|pos| (EntityKey(t), pos)));
    let EntityKey(next) = select_nearest(origin, candidates)?;

    if let Ok(mut aw) = world.get::<&mut Awareness>(entity) {
        aw.target = Some(next);
    }
    debug!("{entity:?} switched target to {next:?}");
    Some(next)
}

/// One cooldown-gated attack: damage the target now, clear the busy flag
/// after the weapon cooldown. Ignored while busy.
fn execute_attack(world: &World, ctx: &mut TickContext, attacker: Entity, target: Entity) {
    {
        let Ok(mut aw) = world.get::<&mut Awareness>(attacker) else {
            return;
        };
        if aw.attacking {
            return;
        }
        aw.attacking = true;
    }

    let Ok(weapon) = world.get::<&Weapon>(attacker).map(|w| *w) else {
        return;
    };

    let remaining = world
        .get::<&mut Health>(target)
        .ok()
        .map(|mut health| health.apply_damage(weapon.damage));

    if let Some(remaining) = remaining {
        debug!("{attacker:?} hit {target:?} for {} ({remaining} left)", weapon.damage);
        ctx.events.push(SimEvent::AttackLanded {
            attacker: entity_id(attacker),
            target: entity_id(target),
            damage: weapon.damage,
            remaining,
        });
        if remaining <= 0.0 {
            info!("{attacker:?} took down {target:?}");
            if let Ok(mut aw) = world.get::<&mut Awareness>(attacker) {
                aw.target = None;
            }
        }
    }

    ctx.scheduler
        .schedule(attacker, TaskKind::AttackCooldown, ctx.now + weapon.cooldown_secs);
}
