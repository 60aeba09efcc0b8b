//! Nearest-target selection among tracked hostiles.

use vigil_core::types::Position;

/// The candidate closest to `origin`; equal distances fall back to the
/// smaller key. None when there are no candidates.
pub fn select_nearest<K, I>(origin: &Position, candidates: I) -> Option<K>
where
    K: Ord + Copy,
    I: IntoIterator<Item = (K, Position)>,
{
    candidates
        .into_iter()
        .map(|(id, pos)| (origin.range_to(&pos), id))
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, id)| id)
}
