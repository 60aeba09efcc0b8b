//! Events emitted by the simulation for presentation and logging.

use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::AlertState;

/// Stable numeric id of an entity for snapshots and events.
pub type EntityId = u64;

/// Convert an entity handle to its serializable id.
pub fn entity_id(entity: Entity) -> EntityId {
    entity.to_bits().get()
}

/// Things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A sentinel changed alertness state.
    StateChanged {
        entity: EntityId,
        from: AlertState,
        to: AlertState,
    },
    /// A periodic scan detected a candidate threat.
    ThreatSpotted { sentinel: EntityId, threat: EntityId },
    /// A peer accepted a threat alert and began its own confirmation.
    AlertDelivered {
        from: EntityId,
        to: EntityId,
        threat: EntityId,
    },
    /// An attack hit its target.
    AttackLanded {
        attacker: EntityId,
        target: EntityId,
        damage: f64,
        remaining: f64,
    },
    /// An entity was removed from the world.
    EntityDestroyed { entity: EntityId },
}
