//! Moore (square) neighborhoods

use glam::IVec2;

use super::dedup::dedup_if_overlapping;
use super::{BoundaryMode, check_center, check_distance, checked_span, remove_origin};
use crate::error::Result;
use crate::grid::GridExtent;

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
    out.clear();

    match mode {
        BoundaryMode::Toroidal => {
            let (xmin, xmax) = toroidal_axis(center.x, dist, extent.width());
            let (ymin, ymax) = toroidal_axis(center.y, dist, extent.height());
            out.reserve(((xmax - xmin + 1) as usize) * ((ymax - ymin + 1) as usize));
            for x0 in xmin..=xmax {
                let x = extent.wrap_x(x0);
                for y0 in ymin..=ymax {
                    out.push(IVec2::new(x, extent.wrap_y(y0)));
                }
            }
            dedup_if_overlapping(extent, dist, out);
            if !include_origin {
                remove_origin(out, extent.wrap(center));
            }
        }
        BoundaryMode::Bounded => {
            let (xmin, xmax) = clamped_axis(center.x, dist, extent.width());
            let (ymin, ymax) = clamped_axis(center.y, dist, extent.height());
            out.reserve(((xmax - xmin + 1) as usize) * ((ymax - ymin + 1) as usize));
            push_block(out, xmin, xmax, ymin, ymax);
            if !include_origin {
                remove_origin(out, center);
            }
        }
        BoundaryMode::Unbounded => {
            let (xmin, xmax) = checked_span(center, center.x, dist)?;
            let (ymin, ymax) = checked_span(center, center.y, dist)?;
            push_block(out, xmin, xmax, ymin, ymax);
            if !include_origin {
                remove_origin(out, center);
            }
        }
    }

    Ok(())
}

/// Raw range to walk along one toroidal axis. A window as wide as the axis
/// collapses to the axis itself so no cell is visited twice.
fn toroidal_axis(c: i32, dist: i32, extent: i32) -> (i32, i32) {
    if dist as i64 * 2 + 1 >= extent as i64 {
        (0, extent - 1)
    } else {
        (c - dist, c + dist)
    }
}

fn clamped_axis(c: i32, dist: i32, extent: i32) -> (i32, i32) {
    let min = (c as i64 - dist as i64).max(0);
    let max = (c as i64 + dist as i64).min(extent as i64 - 1);
    (min as i32, max as i32)
}

fn push_block(out: &mut Vec<IVec2>, xmin: i32, xmax: i32, ymin: i32, ymax: i32) {
    for x in xmin..=xmax {
        for y in ymin..=ymax {
            out.push(IVec2::new(x, y));
        }
    }
}
