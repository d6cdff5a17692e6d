//! Toroidal coordinate arithmetic
//!
//! Maps out-of-range coordinates back onto a circular axis and measures the
//! shortest offset between two positions on that axis. The checked free
//! functions validate the extent on every call; `GridExtent` validates once at
//! construction and then uses the unchecked `*_in` forms.

use glam::DVec2;

use crate::error::{NeighborhoodError, Result};

/// Wrap `coord` into `[0, extent)`. Works for inputs any number of extents away.
pub fn wrap(coord: i32, extent: i32) -> Result<i32> {
    check_int_extent(extent)?;
    Ok(wrap_in(coord, extent))
}

/// Single-step wrap: adds or subtracts `extent` at most once.
///
/// Only meaningful for `coord` in `[-extent, 2 * extent)`; further out the
/// result is still off-axis. Use [`wrap`] when the input may be anywhere.
pub fn wrap_once(coord: i32, extent: i32) -> Result<i32> {
    check_int_extent(extent)?;
    Ok(wrap_once_in(coord, extent))
}

/// Shortest signed offset that moves `b` onto `a` along an axis of length `extent`.
///
/// The result lies in `[-extent / 2, extent / 2]` and is antisymmetric:
/// `toroidal_delta(a, b, e) == -toroidal_delta(b, a, e)`.
pub fn toroidal_delta(a: f64, b: f64, extent: f64) -> Result<f64> {
    check_real_extent(extent)?;
    Ok(toroidal_delta_in(a, b, extent))
}

/// Squared toroidal distance between two points on a `extent_x` x `extent_y` torus.
pub fn toroidal_distance_squared(p1: DVec2, p2: DVec2, extent_x: f64, extent_y: f64) -> Result<f64> {
    check_real_extent(extent_x)?;
    check_real_extent(extent_y)?;
    let dx = toroidal_delta_in(p1.x, p2.x, extent_x);
    let dy = toroidal_delta_in(p1.y, p2.y, extent_y);
    Ok(dx * dx + dy * dy)
}

/// Closed/open radius test on squared distances.
///
/// A point exactly on the boundary counts only when `closed` is set.
#[inline]
pub fn within(distance_squared: f64, radius_squared: f64, closed: bool) -> bool {
    distance_squared < radius_squared || (closed && distance_squared == radius_squared)
}

#[inline]
pub(crate) fn wrap_in(coord: i32, extent: i32) -> i32 {
    debug_assert!(extent >= 1);
    // Most coordinates are already on the axis or one step off it
    if coord >= -extent && coord < extent.saturating_mul(2) {
        return wrap_once_in(coord, extent);
    }
    coord.rem_euclid(extent)
}

#[inline]
pub(crate) fn wrap_once_in(coord: i32, extent: i32) -> i32 {
    if coord >= 0 {
        if coord < extent {
            coord
        } else {
            coord - extent
        }
    } else {
        coord + extent
    }
}

pub(crate) fn toroidal_delta_in(a: f64, b: f64, extent: f64) -> f64 {
    if (a - b).abs() * 2.0 <= extent {
        return a - b;
    }

    let delta = a.rem_euclid(extent) - b.rem_euclid(extent);
    if delta * 2.0 > extent {
        delta - extent
    } else if delta * 2.0 < -extent {
        delta + extent
    } else {
        delta
    }
}

fn check_int_extent(extent: i32) -> Result<()> {
    if extent < 1 {
        return Err(NeighborhoodError::InvalidAxisExtent(extent as f64));
    }
    Ok(())
}

fn check_real_extent(extent: f64) -> Result<()> {
    if !(extent.is_finite() && extent > 0.0) {
        return Err(NeighborhoodError::InvalidAxisExtent(extent));
    }
    Ok(())
}
