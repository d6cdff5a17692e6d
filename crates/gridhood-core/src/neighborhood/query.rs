//! Query descriptions - boundary modes, measurement rules and shapes
//!
//! Plain serializable data. A `NeighborhoodQuery` can be written inline or
//! stored as RON alongside other simulation presets:
//!
//! ```ron
//! (shape: Radial(distance: 2.5, rule: Any), mode: Toroidal, include_origin: false)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NeighborhoodError, Result};

/// How coordinates past the grid edge are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Clip to `[0, width) x [0, height)`
    #[default]
    Bounded,
    /// No clipping or wrapping; coordinates may be negative or past the extent
    Unbounded,
    /// Wrap around both axes
    Toroidal,
}

impl BoundaryMode {
    pub const ALL: [BoundaryMode; 3] = [
        BoundaryMode::Bounded,
        BoundaryMode::Unbounded,
        BoundaryMode::Toroidal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryMode::Bounded => "bounded",
            BoundaryMode::Unbounded => "unbounded",
            BoundaryMode::Toroidal => "toroidal",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = NeighborhoodError;

    fn from_str(s: &str) -> Result<Self> {
        BoundaryMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NeighborhoodError::UnknownBoundaryMode(s.to_string()))
    }
}

/// When a unit cell counts as inside a circle (radial shape only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementRule {
    /// Any part of the cell is inside: measure to its nearest corner or edge
    Any,
    /// The whole cell is inside: measure to its farthest corner
    All,
    /// The cell's center point is inside
    Center,
}

impl MeasurementRule {
    pub const ALL: [MeasurementRule; 3] = [
        MeasurementRule::Any,
        MeasurementRule::All,
        MeasurementRule::Center,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MeasurementRule::Any => "any",
            MeasurementRule::All => "all",
            MeasurementRule::Center => "center",
        }
    }
}

impl fmt::Display for MeasurementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeasurementRule {
    type Err = NeighborhoodError;

    fn from_str(s: &str) -> Result<Self> {
        MeasurementRule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NeighborhoodError::UnknownMeasurementRule(s.to_string()))
    }
}

/// Neighborhood shape with its radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// Square block, Chebyshev distance
    Moore { distance: i32 },
    /// Diamond, Manhattan distance
    VonNeumann { distance: i32 },
    /// Hex rings on an offset-column layout
    Hexagonal { distance: i32 },
    /// Circle of real radius around the center cell
    Radial {
        distance: f64,
        rule: MeasurementRule,
        #[serde(default = "default_true")]
        closed: bool,
    },
}

/// A complete query minus the center, which changes from call to call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodQuery {
    pub shape: Neighborhood,
    #[serde(default)]
    pub mode: BoundaryMode,
    #[serde(default = "default_true")]
    pub include_origin: bool,
}

fn default_true() -> bool {
    true
}

impl NeighborhoodQuery {
    pub fn new(shape: Neighborhood) -> Self {
        Self {
            shape,
            mode: BoundaryMode::default(),
            include_origin: true,
        }
    }

    pub fn moore(distance: i32) -> Self {
        Self::new(Neighborhood::Moore { distance })
    }

    pub fn von_neumann(distance: i32) -> Self {
        Self::new(Neighborhood::VonNeumann { distance })
    }

    pub fn hexagonal(distance: i32) -> Self {
        Self::new(Neighborhood::Hexagonal { distance })
    }

    /// Closed radial query; call [`open`](Self::open) to exclude cells exactly on the radius
    pub fn radial(distance: f64, rule: MeasurementRule) -> Self {
        Self::new(Neighborhood::Radial {
            distance,
            rule,
            closed: true,
        })
    }

    pub fn with_mode(mut self, mode: BoundaryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn excluding_origin(mut self) -> Self {
        self.include_origin = false;
        self
    }

    /// Make a radial query open. No effect on the integer shapes.
    pub fn open(mut self) -> Self {
        if let Neighborhood::Radial { closed, .. } = &mut self.shape {
            *closed = false;
        }
        self
    }

    pub fn from_ron(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    pub fn to_ron(&self) -> String {
        // Plain enums and numbers always serialize
        ron::to_string(self).unwrap_or_default()
    }
}
