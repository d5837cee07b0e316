//! Inflection points and their parabola coefficients.
//!
//! Each supported inflection point comes with a pair of pre-computed
//! coefficients for the vertex form `a * (x - h)^2 + k`:
//! `a1` shapes the rise from arrival up to the inflection point, `a2` shapes
//! the decay from there down to zero at 180 minutes.

use super::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-computed `(inflection point, a1, a2)` rows.
const COEFFICIENT_TABLE: [(u32, f64, f64); 13] = [
    (0, 1.0, 0.0031),
    (10, -0.8, 0.0034),
    (20, -0.2, 0.0039),
    (30, -0.089, 0.00445),
    (40, -0.05, 0.0051),
    (50, -0.032, 0.0059),
    (60, -0.0222, 0.007),
    (70, -0.0163, 0.0083),
    (80, -0.0125, 0.01),
    (90, -0.0098, 0.0124),
    (100, -0.008, 0.0156),
    (110, -0.0066, 0.0204),
    (120, -0.0055, 0.0278),
];

/// Parabola coefficients for one inflection point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    /// Curvature of the rising segment (arrival up to the inflection point)
    pub a1: f64,

    /// Curvature of the decaying segment (inflection point up to 180 minutes)
    pub a2: f64,
}

/// A validated inflection point, in minutes since arrival.
///
/// Only the multiples of ten from 0 to 120 are supported; anything else is
/// rejected with [`ScoringError::InvalidInflectionPoint`]. The value keeps
/// its row in the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct InflectionPoint {
    row: usize,
}

impl InflectionPoint {
    /// Default inflection point: 30 minutes
    pub const DEFAULT: InflectionPoint = InflectionPoint { row: 3 };

    /// Validate a raw minute value
    pub fn new(minutes: u32) -> Result<Self, ScoringError> {
        COEFFICIENT_TABLE
            .iter()
            .position(|(point, _, _)| *point == minutes)
            .map(|row| Self { row })
            .ok_or(ScoringError::InvalidInflectionPoint(minutes))
    }

    /// Minutes since arrival at which the time score peaks
    pub fn minutes(self) -> u32 {
        COEFFICIENT_TABLE[self.row].0
    }

    /// Coefficients for this inflection point
    pub fn coefficients(self) -> Coefficients {
        let (_, a1, a2) = COEFFICIENT_TABLE[self.row];
        Coefficients { a1, a2 }
    }

    /// Every supported inflection point, ascending
    pub fn all() -> impl Iterator<Item = InflectionPoint> {
        (0..COEFFICIENT_TABLE.len()).map(|row| InflectionPoint { row })
    }
}

impl Default for InflectionPoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for InflectionPoint {
    type Error = ScoringError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<InflectionPoint> for u32 {
    fn from(point: InflectionPoint) -> Self {
        point.minutes()
    }
}

impl fmt::Display for InflectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.minutes())
    }
}
