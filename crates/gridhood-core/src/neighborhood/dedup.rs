//! Duplicate removal for toroidal walks that lap the grid

use ahash::AHashSet;
use glam::IVec2;

use crate::grid::GridExtent;

/// A walk spanning `2 * dist + 1` cells can only revisit a wrapped cell once
/// `2 * dist` reaches the extent on some axis.
#[inline]
pub(super) fn may_overlap(extent: &GridExtent, dist: i32) -> bool {
    let span = dist as i64 * 2;
    span >= extent.width() as i64 || span >= extent.height() as i64
}

/// Keep the first occurrence of each coordinate, preserving order.
/// Returns how many entries were dropped.
pub(super) fn dedup(out: &mut Vec<IVec2>) -> usize {
    let before = out.len();
    let mut seen = AHashSet::with_capacity(before);
    out.retain(|p| seen.insert(*p));
    let removed = before - out.len();
    log::trace!(
        "Dedup pass: {} candidates, {} duplicates removed",
        before,
        removed
    );
    removed
}

/// Run [`dedup`] only when the walk could have wrapped onto itself
pub(super) fn dedup_if_overlapping(extent: &GridExtent, dist: i32, out: &mut Vec<IVec2>) {
    if may_overlap(extent, dist) {
        dedup(out);
    }
}
