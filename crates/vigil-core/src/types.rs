//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in simulation space (meters, Cartesian).
/// x = East, y = North, z = Up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Range to another position in meters (3D distance).
    pub fn range_to(&self, other: &Position) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }

    /// Bearing to another position in radians (0 = North, clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).rem_euclid(std::f64::consts::TAU)
    }

    /// Vector from this position to `other`.
    pub fn vector_to(&self, other: &Position) -> DVec3 {
        other.to_dvec3() - self.to_dvec3()
    }

    /// Translate by a displacement vector.
    pub fn offset(&self, delta: DVec3) -> Position {
        Position::from_dvec3(self.to_dvec3() + delta)
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Unit forward vector for a yaw angle in radians (0 = North, clockwise).
pub fn forward_from_yaw(yaw: f64) -> DVec3 {
    DVec3::new(yaw.sin(), yaw.cos(), 0.0)
}

impl SimTime {
    /// Seconds per tick at the given tick rate.
    pub fn dt(tick_rate: u32) -> f64 {
        1.0 / tick_rate.max(1) as f64
    }

    /// Advance by one tick. Elapsed time is derived from the tick count so
    /// that long runs do not accumulate rounding drift.
    pub fn advance(&mut self, tick_rate: u32) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * Self::dt(tick_rate);
    }
}
