//! Field-of-view detection for the periodic scan.

use glam::DVec3;

use vigil_core::constants::{ATTACK_VIEW_ANGLE_DEG, MIN_SCAN_INTERVAL_SECS, TIME_EPSILON};
use vigil_core::types::Position;

/// How a candidate was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionKind {
    /// Inside the forward cone and sight radius.
    Cone,
    /// Inside the omnidirectional close-range radius.
    CloseRange,
}

/// A detected candidate threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection<K> {
    pub id: K,
    pub kind: DetectionKind,
}

/// True if `to` lies strictly within half of `view_angle_deg` of the
/// forward direction as seen from `from`. A full circle sees everything.
pub fn in_view_cone(forward: DVec3, from: &Position, to: &Position, view_angle_deg: f64) -> bool {
    if view_angle_deg >= ATTACK_VIEW_ANGLE_DEG {
        return true;
    }
    let dir = from.vector_to(to);
    if dir.length_squared() < 1e-12 || forward.length_squared() < 1e-12 {
        return true;
    }
    forward.angle_between(dir).to_degrees() < view_angle_deg / 2.0
}

/// Time of the scan after one that was due at `previous` and ran at
/// `now`. Missed periods are skipped in one step; the result is always
/// later than `now`, whatever the interval.
pub fn next_scan_time(previous: f64, interval: f64, now: f64) -> f64 {
    let interval = interval.max(MIN_SCAN_INTERVAL_SECS);
    let periods = (((now - previous) / interval).floor() + 1.0).max(1.0);
    let next = previous + periods * interval;
    if next > now + TIME_EPSILON {
        next
    } else {
        now + interval
    }
}

/// Sort candidates by distance from `origin`, then by key.
pub fn order_by_distance<K: Ord + Copy>(origin: &Position, candidates: &mut [(K, Position)]) {
    candidates.sort_by(|a, b| {
        origin
            .range_to(&a.1)
            .total_cmp(&origin.range_to(&b.1))
            .then(a.0.cmp(&b.0))
    });
}

/// Run the two-stage scan: cone candidates first, then close-range ones.
///
/// `cone_candidates` must already be filtered to the sight radius and
/// `close_candidates` to the close-range radius. Both are visited nearest
/// first; the first one passing `line_of_sight` wins.
pub fn first_detection<K, F>(
    origin: &Position,
    forward: DVec3,
    view_angle_deg: f64,
    mut cone_candidates: Vec<(K, Position)>,
    mut close_candidates: Vec<(K, Position)>,
    mut line_of_sight: F,
) -> Option<Detection<K>>
where
    K: Ord + Copy,
    F: FnMut(&Position) -> bool,
{
    order_by_distance(origin, &mut cone_candidates);
    for (id, pos) in &cone_candidates {
        if in_view_cone(forward, origin, pos, view_angle_deg) && line_of_sight(pos) {
            return Some(Detection {
                id: *id,
                kind: DetectionKind::Cone,
            });
        }
    }

    order_by_distance(origin, &mut close_candidates);
    for (id, pos) in &close_candidates {
        if line_of_sight(pos) {
            return Some(Detection {
                id: *id,
                kind: DetectionKind::CloseRange,
            });
        }
    }

    None
}
