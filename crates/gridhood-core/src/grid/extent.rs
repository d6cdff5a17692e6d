//! Fixed grid dimensions

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::wrap::{toroidal_delta_in, wrap_in};
use crate::error::{NeighborhoodError, Result};

/// Width and height of a lattice, validated to be at least 1x1.
///
/// Immutable once built; every wrap and toroidal measurement on it is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawExtent")]
pub struct GridExtent {
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct RawExtent {
    width: i32,
    height: i32,
}

impl TryFrom<RawExtent> for GridExtent {
    type Error = NeighborhoodError;

    fn try_from(raw: RawExtent) -> Result<Self> {
        GridExtent::new(raw.width, raw.height)
    }
}

impl GridExtent {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(NeighborhoodError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    pub fn wrap_x(&self, x: i32) -> i32 {
        wrap_in(x, self.width)
    }

    #[inline]
    pub fn wrap_y(&self, y: i32) -> i32 {
        wrap_in(y, self.height)
    }

    /// Map any coordinate onto the torus
    #[inline]
    pub fn wrap(&self, p: IVec2) -> IVec2 {
        IVec2::new(self.wrap_x(p.x), self.wrap_y(p.y))
    }

    /// Per-axis shortest offset moving `b` onto `a` on the torus.
    pub fn toroidal_delta(&self, a: DVec2, b: DVec2) -> DVec2 {
        DVec2::new(
            toroidal_delta_in(a.x, b.x, self.width as f64),
            toroidal_delta_in(a.y, b.y, self.height as f64),
        )
    }

    pub fn toroidal_distance_squared(&self, a: DVec2, b: DVec2) -> f64 {
        self.toroidal_delta(a, b).length_squared()
    }
}
