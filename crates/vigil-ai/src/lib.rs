//! Sentinel decision logic for VIGIL.
//!
//! Pure functions over plain data: the alertness transition table,
//! field-of-view detection, target selection, the attack-tick watchdog
//! and separation steering. No ECS dependency; entity handles are
//! generic `Ord` keys so callers decide what identifies a body.

pub mod fsm;
pub mod perception;
pub mod separation;
pub mod targeting;

pub use vigil_core as core;
