//! ECS components for hecs entities.
//!
//! Components are plain data. Decision logic lives in `vigil-ai`, and the
//! systems in `vigil-sim` apply it. `Health` additionally implements the
//! `Vitality` contract, since damage application is owned by the component.

use glam::DVec3;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::{AlertState, CategoryMask};
use crate::types::Position;

/// Marks an entity as a sentinel (patrolling guard agent).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sentinel;

/// Marks an entity as an intruder (hostile to sentinels).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Intruder;

/// Facing direction. Yaw in radians, 0 = North, clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub yaw: f64,
}

/// Life points of a damageable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Current/maximum life, alive predicate and damage application.
pub trait Vitality {
    fn current_health(&self) -> f64;
    fn is_alive(&self) -> bool;
    /// Apply damage and return the remaining health.
    fn apply_damage(&mut self, amount: f64) -> f64;
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }
}

impl Vitality for Health {
    fn current_health(&self) -> f64 {
        self.current
    }

    fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    fn apply_damage(&mut self, amount: f64) -> f64 {
        self.current -= amount;
        self.current
    }
}

/// Vision parameters. The live values widen in Attack and are restored
/// from the base values on return to Guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perception {
    pub view_radius: f64,
    /// Full cone angle in degrees.
    pub view_angle_deg: f64,
    pub close_range_radius: f64,
    pub base_view_radius: f64,
    pub base_view_angle_deg: f64,
    /// Categories treated as hostile.
    pub enemy_mask: CategoryMask,
    /// Categories that receive threat alerts.
    pub ally_mask: CategoryMask,
    pub scan_interval_secs: f64,
    /// Simulation time of the next periodic scan.
    pub next_scan_secs: f64,
}

/// Timing of the threat confirmation and loss-of-target policies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reaction {
    pub threat_identify_secs: f64,
    pub target_lose_secs: f64,
}

/// Alertness state, target and tracked hostiles of a sentinel.
///
/// `target` and `tracked` hold entity handles only; a despawned referent is
/// observed as a failed lookup.
#[derive(Debug, Clone, Default)]
pub struct Awareness {
    pub state: AlertState,
    pub target: Option<Entity>,
    /// Hostiles visible this tick, sorted by entity bits.
    pub tracked: Vec<Entity>,
    /// Accumulated time the target has been obstructed or out of range.
    pub lose_target_secs: f64,
    /// Attack cooldown in progress.
    pub attacking: bool,
}

/// Cyclic patrol route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patrol {
    pub route: Vec<Position>,
    pub index: usize,
}

/// Movement speeds per state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    pub patrol_speed: f64,
    pub attack_speed: f64,
}

/// Melee attack parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: f64,
    pub range: f64,
    pub cooldown_secs: f64,
}

/// Local repulsion among same-category neighbours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Separation {
    pub radius: f64,
    pub force: f64,
}

/// Destination-seeking movement state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavAgent {
    pub destination: Option<Position>,
    pub speed: f64,
    pub stopped: bool,
    pub stopping_distance: f64,
    /// Distance left to the destination as of the last navigation step.
    pub remaining_distance: f64,
    /// A destination was set and has not been resolved by navigation yet.
    pub path_pending: bool,
    /// Displacement to apply on the next navigation step.
    pub pending_nudge: DVec3,
}

impl NavAgent {
    pub fn new(speed: f64, stopping_distance: f64) -> Self {
        Self {
            destination: None,
            speed,
            stopped: false,
            stopping_distance,
            remaining_distance: 0.0,
            path_pending: false,
            pending_nudge: DVec3::ZERO,
        }
    }
}
