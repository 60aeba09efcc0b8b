//! Separation steering: keeps co-located agents from clumping.

use glam::DVec3;

use vigil_core::types::Position;

/// Displacement pushing `origin` away from its neighbours.
///
/// Each neighbour contributes a unit vector pointing away from it; the sum
/// is normalized and scaled by `force * dt`. Returns None when there are
/// no neighbours. A neighbour at the exact same spot contributes nothing.
pub fn avoidance_nudge<I>(origin: &Position, neighbours: I, force: f64, dt: f64) -> Option<DVec3>
where
    I: IntoIterator<Item = Position>,
{
    let here = origin.to_dvec3();
    let mut sum = DVec3::ZERO;
    let mut count = 0usize;

    for other in neighbours {
        sum += (here - other.to_dvec3()).normalize_or_zero();
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(sum.normalize_or_zero() * force * dt)
}
