//! World snapshot: the visible state handed to presentation after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::AlertState;
use crate::events::{EntityId, SimEvent};
use crate::types::{Position, SimTime};

/// Complete observable state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub sentinels: Vec<SentinelView>,
    pub intruders: Vec<IntruderView>,
    pub events: Vec<SimEvent>,
}

/// A sentinel as seen by presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentinelView {
    pub id: EntityId,
    pub position: Position,
    /// Yaw in radians, 0 = North.
    pub heading: f64,
    pub state: AlertState,
    /// "Patrol", "Danger" or "Attack".
    pub label: String,
    pub target: Option<EntityId>,
    pub health: f64,
    pub patrol_index: usize,
    pub view_radius: f64,
    pub view_angle_deg: f64,
    pub tracked_count: usize,
}

/// An intruder as seen by presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntruderView {
    pub id: EntityId,
    pub position: Position,
    pub health: f64,
}

impl WorldSnapshot {
    /// Look up a sentinel view by id.
    pub fn sentinel(&self, id: EntityId) -> Option<&SentinelView> {
        self.sentinels.iter().find(|s| s.id == id)
    }
}
