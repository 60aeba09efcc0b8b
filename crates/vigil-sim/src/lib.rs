//! Simulation engine for VIGIL.
//!
//! Owns the hecs ECS world, runs sentinel systems at a fixed tick rate,
//! fires delayed tasks on their owner's tick, and produces
//! `WorldSnapshot`s for presentation.

pub mod engine;
pub mod motion;
pub mod scheduler;
pub mod spatial;
pub mod systems;
pub mod world_setup;

pub use vigil_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
