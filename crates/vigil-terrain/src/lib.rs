//! Blocking geometry for VIGIL.
//!
//! Occlusion grid built from obstacle rectangles, and line-of-sight
//! tests against it.

pub use vigil_core as core;

pub mod grid;
pub mod los;

pub use grid::OcclusionGrid;
pub use los::has_line_of_sight;
