//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::{IntruderSpawn, SentinelSpawn};
use crate::events::EntityId;
use crate::types::Position;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Add a sentinel to the world.
    SpawnSentinel { spawn: SentinelSpawn },
    /// Add an intruder to the world.
    SpawnIntruder { spawn: IntruderSpawn },
    /// Damage an entity through its vitality component.
    ApplyDamage { entity: EntityId, amount: f64 },
    /// Remove an entity immediately.
    Despawn { entity: EntityId },
    /// Redirect an entity's motion.
    SetDestination {
        entity: EntityId,
        destination: Position,
    },
}
