//! Alertness finite state machine.
//!
//! Every state change a sentinel makes goes through [`next_state`]; the
//! remaining functions evaluate one state's per-tick rules and report what
//! the caller should do.

use vigil_core::constants::ATTACK_VIEW_ANGLE_DEG;
use vigil_core::enums::AlertState;

/// Why a sentinel wants to change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Own periodic scan detected a candidate.
    ThreatSighted,
    /// A peer reported a threat.
    AlertReceived,
    /// Delayed re-validation succeeded.
    ThreatConfirmed,
    /// Delayed re-validation failed (target gone, dead or obstructed).
    ThreatRejected,
    /// Target lost during an engagement and no replacement was found.
    TargetLost,
}

/// Transition table. Returns None when the trigger does not apply to the
/// current state, in which case the caller must leave the state untouched.
pub fn next_state(current: AlertState, trigger: Trigger) -> Option<AlertState> {
    match (current, trigger) {
        (AlertState::Guard, Trigger::ThreatSighted | Trigger::AlertReceived) => {
            Some(AlertState::Danger)
        }
        (AlertState::Danger, Trigger::ThreatConfirmed) => Some(AlertState::Attack),
        (AlertState::Danger, Trigger::ThreatRejected) => Some(AlertState::Guard),
        (AlertState::Attack, Trigger::TargetLost) => Some(AlertState::Guard),
        _ => None,
    }
}

/// Only a guarding sentinel takes up a peer's alert.
pub fn accepts_alert(state: AlertState) -> bool {
    next_state(state, Trigger::AlertReceived).is_some()
}

/// Periodic scans only run from Guard.
pub fn scans_in(state: AlertState) -> bool {
    next_state(state, Trigger::ThreatSighted).is_some()
}

/// Live (radius, cone angle) for a state given the saved base values.
pub fn vision_for(state: AlertState, base_radius: f64, base_angle_deg: f64) -> (f64, f64) {
    match state {
        AlertState::Attack => (base_radius, ATTACK_VIEW_ANGLE_DEG),
        AlertState::Guard | AlertState::Danger => (base_radius, base_angle_deg),
    }
}

/// Outcome of a delayed threat confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyVerdict {
    Confirm,
    Reject,
}

/// A threat is confirmed only if it still exists, is alive and is in sight.
pub fn identify_verdict(target_alive: bool, line_of_sight_clear: bool) -> IdentifyVerdict {
    if target_alive && line_of_sight_clear {
        IdentifyVerdict::Confirm
    } else {
        IdentifyVerdict::Reject
    }
}

/// Whether motion reports arrival at the current destination.
pub fn has_arrived(remaining_distance: f64, stopping_distance: f64, path_pending: bool) -> bool {
    remaining_distance <= stopping_distance && !path_pending
}

/// Next patrol waypoint index after an arrival, or None when the route is
/// empty (the sentinel idles in place).
pub fn next_patrol_index(index: usize, route_len: usize) -> Option<usize> {
    if route_len == 0 {
        None
    } else {
        Some((index + 1) % route_len)
    }
}

/// What the attacker currently knows about its target.
#[derive(Debug, Clone, Copy)]
pub struct TargetObservation {
    pub distance: f64,
    pub line_of_sight: bool,
}

/// Input to one Attack tick, after target reselection.
#[derive(Debug, Clone, Copy)]
pub struct AttackContext {
    /// None when the target is invalid or dead.
    pub target: Option<TargetObservation>,
    pub view_radius: f64,
    pub attack_range: f64,
    pub lose_target_secs: f64,
    pub target_lose_secs: f64,
    pub attacking: bool,
    pub dt: f64,
}

/// Output of one Attack tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackUpdate {
    pub lose_target_secs: f64,
    /// Return to patrol.
    pub lost: bool,
    /// Start an attack execution this tick.
    pub strike: bool,
}

/// Debounced loss-of-target watchdog plus the strike trigger.
///
/// Obstruction or `distance > view_radius` accumulates the lose timer and
/// disengages once it reaches `target_lose_secs`. Clear sight in range
/// resets it. A strike starts when not busy and within attack range.
pub fn evaluate_attack(ctx: &AttackContext) -> AttackUpdate {
    let Some(obs) = ctx.target else {
        return AttackUpdate {
            lose_target_secs: 0.0,
            lost: true,
            strike: false,
        };
    };

    let out_of_range = obs.distance > ctx.view_radius;
    let mut lose_target_secs = ctx.lose_target_secs;
    let mut lost = false;

    if !obs.line_of_sight || out_of_range {
        lose_target_secs += ctx.dt;
        if lose_target_secs >= ctx.target_lose_secs {
            lost = true;
        }
    } else {
        lose_target_secs = 0.0;
    }

    if lost {
        return AttackUpdate {
            lose_target_secs: 0.0,
            lost,
            strike: false,
        };
    }

    AttackUpdate {
        lose_target_secs,
        lost,
        strike: !ctx.attacking && obs.distance <= ctx.attack_range,
    }
}
