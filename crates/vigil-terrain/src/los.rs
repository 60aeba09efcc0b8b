//! Line-of-sight against the occlusion grid.
//!
//! Uses stepped ray traversal on the ground plane, sampling at half the
//! cell size so no cell crossed by the ray is skipped.

use vigil_core::types::Position;

use crate::grid::OcclusionGrid;

/// Check line-of-sight between two sim-space points.
///
/// Returns true if no solid cell lies strictly between `from` and `to`.
/// The endpoints themselves are not tested, so a body standing against a
/// wall can still see out.
pub fn has_line_of_sight(grid: &OcclusionGrid, from: &Position, to: &Position) -> bool {
    if grid.width == 0 || grid.height == 0 {
        return true;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let horiz_dist = (dx * dx + dy * dy).sqrt();
    let sample_interval = grid.cell_size * 0.5;

    if horiz_dist < sample_interval {
        return true;
    }

    let num_samples = (horiz_dist / sample_interval).ceil() as usize;
    let num_samples = num_samples.max(2);

    for i in 1..num_samples {
        let t = i as f64 / num_samples as f64;
        let sample = Position::new(from.x + dx * t, from.y + dy * t, 0.0);
        if grid.is_blocked_at(&sample) {
            return false;
        }
    }

    true
}
