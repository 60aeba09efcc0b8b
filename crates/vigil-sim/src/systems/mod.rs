//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over the world. Per-sentinel systems take
//! `&World` and borrow individual components through hecs' runtime
//! checks; only navigation and cleanup need `&mut World`.

use vigil_core::events::SimEvent;

use crate::scheduler::Scheduler;
use crate::spatial::SpatialQuery;

pub mod alert;
pub mod cleanup;
pub mod controller;
pub mod navigation;
pub mod perception;
pub mod separation;
pub mod snapshot;
pub mod tasks;
pub mod tracking;

/// Shared state threaded through one tick's sentinel systems.
pub struct TickContext<'a> {
    /// Radius and line-of-sight queries; systems never touch geometry directly.
    pub spatial: &'a dyn SpatialQuery,
    pub scheduler: &'a mut Scheduler,
    pub events: &'a mut Vec<SimEvent>,
    /// Simulation time at the start of this tick.
    pub now: f64,
    /// Seconds per tick.
    pub dt: f64,
}
