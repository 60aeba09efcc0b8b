//! Core types and definitions for the VIGIL sentinel simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, constants and scenario
//! configuration. It has no dependency on any runtime or simulation loop.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
