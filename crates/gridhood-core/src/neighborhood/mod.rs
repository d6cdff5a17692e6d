//! Neighborhood queries - which cells are near a center cell
//!
//! `NeighborhoodEngine` holds nothing but the grid extent, so it is `Copy`
//! and can be shared freely between threads. Every query validates its
//! arguments up front, then builds a fresh coordinate list.

mod dedup;
mod hexagonal;
mod moore;
pub mod query;
mod radial;
mod von_neumann;

use glam::IVec2;

use crate::error::{NeighborhoodError, Result};
use crate::grid::GridExtent;

pub use query::{BoundaryMode, MeasurementRule, Neighborhood, NeighborhoodQuery};

/// Stateless neighborhood queries over a fixed-size grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodEngine {
    extent: GridExtent,
}

impl NeighborhoodEngine {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_extent(GridExtent::new(width, height)?))
    }

    pub fn from_extent(extent: GridExtent) -> Self {
        Self { extent }
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Square block: every cell with `max(|dx|, |dy|) <= dist`
    pub fn moore_locations(
        &self,
        center: IVec2,
        dist: i32,
        mode: BoundaryMode,
        include_origin: bool,
    ) -> Result<Vec<IVec2>> {
        let mut out = Vec::new();
        moore::collect(&self.extent, center, dist, mode, include_origin, &mut out)?;
        Ok(out)
    }

    /// Diamond: every cell with `|dx| + |dy| <= dist`
    pub fn von_neumann_locations(
        &self,
        center: IVec2,
        dist: i32,
        mode: BoundaryMode,
        include_origin: bool,
    ) -> Result<Vec<IVec2>> {
        let mut out = Vec::new();
        von_neumann::collect(&self.extent, center, dist, mode, include_origin, &mut out)?;
        Ok(out)
    }

    /// Hex cells within `dist` steps, odd columns offset half a cell down.
    ///
    /// Toroidal mode needs an even grid height.
    pub fn hexagonal_locations(
        &self,
        center: IVec2,
        dist: i32,
        mode: BoundaryMode,
        include_origin: bool,
    ) -> Result<Vec<IVec2>> {
        let mut out = Vec::new();
        hexagonal::collect(&self.extent, center, dist, mode, include_origin, &mut out)?;
        Ok(out)
    }

    /// Cells inside a circle of radius `dist` around the center cell, judged by `rule`
    pub fn radial_locations(
        &self,
        center: IVec2,
        dist: f64,
        mode: BoundaryMode,
        include_origin: bool,
        rule: MeasurementRule,
        closed: bool,
    ) -> Result<Vec<IVec2>> {
        let mut out = Vec::new();
        radial::collect(
            &self.extent,
            center,
            dist,
            mode,
            include_origin,
            rule,
            closed,
            &mut out,
        )?;
        Ok(out)
    }

    pub fn locations(&self, center: IVec2, query: &NeighborhoodQuery) -> Result<Vec<IVec2>> {
        let mut out = Vec::new();
        self.locations_into(center, query, &mut out)?;
        Ok(out)
    }

    /// Like [`locations`](Self::locations) but refills a caller-owned buffer.
    ///
    /// The buffer is cleared first; on error it is left empty.
    pub fn locations_into(
        &self,
        center: IVec2,
        query: &NeighborhoodQuery,
        out: &mut Vec<IVec2>,
    ) -> Result<()> {
        out.clear();
        let extent = &self.extent;
        let mode = query.mode;
        let include_origin = query.include_origin;
        match query.shape {
            Neighborhood::Moore { distance } => {
                moore::collect(extent, center, distance, mode, include_origin, out)
            }
            Neighborhood::VonNeumann { distance } => {
                von_neumann::collect(extent, center, distance, mode, include_origin, out)
            }
            Neighborhood::Hexagonal { distance } => {
                hexagonal::collect(extent, center, distance, mode, include_origin, out)
            }
            Neighborhood::Radial {
                distance,
                rule,
                closed,
            } => radial::collect(
                extent,
                center,
                distance,
                mode,
                include_origin,
                rule,
                closed,
                out,
            ),
        }
    }
}

fn check_distance(dist: i32) -> Result<()> {
    if dist < 0 {
        log::debug!("Rejected neighborhood query: negative distance {}", dist);
        return Err(NeighborhoodError::InvalidDistance(dist as f64));
    }
    Ok(())
}

/// Bounded and toroidal queries must start on the grid
fn check_center(extent: &GridExtent, center: IVec2, mode: BoundaryMode) -> Result<()> {
    if mode != BoundaryMode::Unbounded && !extent.contains(center) {
        log::debug!(
            "Rejected {} neighborhood query: center {} outside {}x{}",
            mode,
            center,
            extent.width(),
            extent.height()
        );
        return Err(NeighborhoodError::CenterOutOfBounds {
            center,
            width: extent.width(),
            height: extent.height(),
        });
    }
    Ok(())
}

/// `(c - dist, c + dist)`, or an error if either end leaves i32
fn checked_span(center: IVec2, axis: i32, dist: i32) -> Result<(i32, i32)> {
    match (axis.checked_sub(dist), axis.checked_add(dist)) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(NeighborhoodError::CoordinateOverflow {
            center,
            distance: dist,
        }),
    }
}

/// Every cell of the grid lies within `width + height` steps of every other
/// under L1 or hex distance, so longer walks only revisit cells.
fn covering_reach(extent: &GridExtent, dist: i32) -> i32 {
    dist.min(extent.width().saturating_add(extent.height()))
}

/// Remove the first occurrence of `origin` only. Later duplicates are kept.
fn remove_origin(out: &mut Vec<IVec2>, origin: IVec2) {
    if let Some(i) = out.iter().position(|&p| p == origin) {
        out.remove(i);
    }
}
