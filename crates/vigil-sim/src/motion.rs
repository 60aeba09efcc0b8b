//! Motion driver contract and its straight-line stand-in.
//!
//! Real deployments plug a path planner in behind [`MotionDriver`]; the
//! simulation uses `NavAgent`, which the navigation system moves directly
//! toward its destination.

use glam::DVec3;

use vigil_core::components::NavAgent;
use vigil_core::types::Position;

/// Destination-seeking movement.
pub trait MotionDriver {
    fn set_destination(&mut self, destination: Position);
    /// Forget the destination and hold position.
    fn clear_destination(&mut self);
    fn remaining_distance(&self) -> f64;
    fn is_path_pending(&self) -> bool;
    fn stop(&mut self);
    fn resume(&mut self);
    fn set_speed(&mut self, speed: f64);
    /// Instantaneous displacement, independent of the current path.
    fn nudge(&mut self, displacement: DVec3);
}

impl MotionDriver for NavAgent {
    fn set_destination(&mut self, destination: Position) {
        self.destination = Some(destination);
        self.path_pending = true;
    }

    fn clear_destination(&mut self) {
        self.destination = None;
        self.path_pending = false;
        self.remaining_distance = 0.0;
    }

    fn remaining_distance(&self) -> f64 {
        self.remaining_distance
    }

    fn is_path_pending(&self) -> bool {
        self.path_pending
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn resume(&mut self) {
        self.stopped = false;
    }

    fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    fn nudge(&mut self, displacement: DVec3) {
        self.pending_nudge += displacement;
    }
}
