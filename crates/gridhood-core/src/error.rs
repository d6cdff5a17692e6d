//! Error type shared by the wrap helpers and the neighborhood engine

use glam::IVec2;
use thiserror::Error;

/// Every failure is a usage error: the inputs were invalid and no result was produced.
#[derive(Debug, Error)]
pub enum NeighborhoodError {
    #[error("grid extent must be at least 1x1, got {width}x{height}")]
    InvalidExtent { width: i32, height: i32 },

    #[error("axis extent must be a positive finite number, got {0}")]
    InvalidAxisExtent(f64),

    #[error("distance must be a non-negative finite number, got {0}")]
    InvalidDistance(f64),

    #[error("center {center} lies outside the {width}x{height} grid")]
    CenterOutOfBounds {
        center: IVec2,
        width: i32,
        height: i32,
    },

    #[error("toroidal hexagonal neighborhoods need an even grid height, got {0}")]
    OddToroidalHexHeight(i32),

    #[error("distance {distance} around {center} leaves the i32 coordinate space")]
    CoordinateOverflow { center: IVec2, distance: i32 },

    #[error("unknown boundary mode '{0}' (expected bounded, unbounded or toroidal)")]
    UnknownBoundaryMode(String),

    #[error("unknown measurement rule '{0}' (expected any, all or center)")]
    UnknownMeasurementRule(String),

    #[error("malformed neighborhood query: {0}")]
    Config(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, NeighborhoodError>;
