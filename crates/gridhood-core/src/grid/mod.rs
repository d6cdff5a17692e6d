//! Grid geometry - extents, toroidal wrapping, hex/triangle cell stepping

mod extent;
pub mod lattice;
pub mod wrap;

pub use extent::GridExtent;
pub use wrap::{toroidal_delta, toroidal_distance_squared, within, wrap, wrap_once};
