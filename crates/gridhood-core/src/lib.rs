//! Neighborhood queries over a fixed-size 2D lattice.
//!
//! Given a center cell and a distance, [`NeighborhoodEngine`] lists the cells
//! in a Moore (square), Von Neumann (diamond), hexagonal or radial
//! neighborhood, under bounded, unbounded or toroidal edges. The engine owns
//! no cell contents; pair its output with whatever store maps cells to objects.
//!
//! ```
//! use gridhood_core::{BoundaryMode, NeighborhoodEngine};
//! use glam::IVec2;
//!
//! let engine = NeighborhoodEngine::new(10, 10)?;
//! let cells = engine.moore_locations(IVec2::new(0, 0), 1, BoundaryMode::Toroidal, true)?;
//! assert_eq!(cells.len(), 9);
//! assert!(cells.contains(&IVec2::new(9, 9)));
//! # Ok::<(), gridhood_core::NeighborhoodError>(())
//! ```

pub mod error;
pub mod grid;
pub mod neighborhood;

pub use error::{NeighborhoodError, Result};
pub use grid::GridExtent;
pub use neighborhood::{
    BoundaryMode, MeasurementRule, Neighborhood, NeighborhoodEngine, NeighborhoodQuery,
};
