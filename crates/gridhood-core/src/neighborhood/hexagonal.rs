//! Hexagonal neighborhoods on an offset-column layout
//!
//! The hexagon is built column by column: the full vertical run through the
//! center, then `dist` columns stepping left and `dist` stepping right. Each
//! step moves the top of the run down a diagonal and the bottom up one, so
//! every column is one cell shorter than its inner neighbor.

use glam::IVec2;

use super::dedup::dedup_if_overlapping;
use super::{
    BoundaryMode, check_center, check_distance, checked_span, covering_reach, remove_origin,
};
use crate::error::{NeighborhoodError, Result};
use crate::grid::GridExtent;
use crate::grid::lattice::{lower_left, lower_right, upper_left, upper_right};

/// Rows `ymin..=ymax` of column `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    x: i32,
    ymin: i32,
    ymax: i32,
}

type Step = fn(IVec2) -> IVec2;

/// Columns stepping away from the center run, `dist` of them
fn side(start: Column, dist: i32, lower: Step, upper: Step) -> impl Iterator<Item = Column> {
    std::iter::successors(Some(start), move |c| {
        let top = lower(IVec2::new(c.x, c.ymin));
        let bottom = upper(IVec2::new(c.x, c.ymax));
        Some(Column {
            x: top.x,
            ymin: top.y,
            ymax: bottom.y,
        })
    })
    .skip(1)
    .take(dist as usize)
}

/// Center run, then the left half, then the right half.
///
/// Callers must have checked that `center ± dist` fits in i32 on both axes.
fn columns(center: IVec2, dist: i32) -> impl Iterator<Item = Column> {
    let start = Column {
        x: center.x,
        ymin: center.y - dist,
        ymax: center.y + dist,
    };
    std::iter::once(start)
        .chain(side(start, dist, lower_left, upper_left))
        .chain(side(start, dist, lower_right, upper_right))
}

pub(super) fn collect(
    extent: &GridExtent,
    center: IVec2,
    dist: i32,
    mode: BoundaryMode,
    include_origin: bool,
    out: &mut Vec<IVec2>,
) -> Result<()> {
    check_distance(dist)?;
    check_center(extent, center, mode)?;
    if mode == BoundaryMode::Toroidal && extent.height() % 2 == 1 {
        log::debug!(
            "Rejected toroidal hex query on odd height {}",
            extent.height()
        );
        return Err(NeighborhoodError::OddToroidalHexHeight(extent.height()));
    }

    // Unbounded walks are taken at face value; the others never need more
    // than enough steps to cover the grid.
    let walk = match mode {
        BoundaryMode::Unbounded => dist,
        BoundaryMode::Bounded | BoundaryMode::Toroidal => covering_reach(extent, dist),
    };
    checked_span(center, center.x, walk)?;
    checked_span(center, center.y, walk)?;
    out.clear();

    match mode {
        BoundaryMode::Toroidal => {
            for col in columns(center, walk) {
                let x = extent.wrap_x(col.x);
                for y in col.ymin..=col.ymax {
                    out.push(IVec2::new(x, extent.wrap_y(y)));
                }
            }
            dedup_if_overlapping(extent, dist, out);
            if !include_origin {
                remove_origin(out, extent.wrap(center));
            }
        }
        BoundaryMode::Bounded => {
            for col in columns(center, walk) {
                if col.x < 0 || col.x >= extent.width() {
                    continue;
                }
                let ymin = col.ymin.max(0);
                let ymax = col.ymax.min(extent.height() - 1);
                for y in ymin..=ymax {
                    out.push(IVec2::new(col.x, y));
                }
            }
            if !include_origin {
                remove_origin(out, center);
            }
        }
        BoundaryMode::Unbounded => {
            for col in columns(center, walk) {
                for y in col.ymin..=col.ymax {
                    out.push(IVec2::new(col.x, y));
                }
            }
            if !include_origin {
                remove_origin(out, center);
            }
        }
    }

    Ok(())
}
