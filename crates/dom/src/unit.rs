//! Measurement unit used throughout the document model
//!
//! All distances in the model are stored as points (1/72 inch) but can be
//! constructed from and read back in centimeters, millimeters, and inches.
//! Metric conversions derive from the inch so the same constant is used in
//! both directions.

use serde::{Deserialize, Serialize};

const POINTS_PER_INCH: f64 = 72.0;
const CENTIMETERS_PER_INCH: f64 = 2.54;
const POINTS_PER_CENTIMETER: f64 = POINTS_PER_INCH / CENTIMETERS_PER_INCH;
const POINTS_PER_MILLIMETER: f64 = POINTS_PER_CENTIMETER / 10.0;

/// A distance measure, stored internally in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Unit {
    point: f64,
}

impl Unit {
    /// Create a unit from a value in points.
    pub fn from_point(value: f64) -> Self {
        Self { point: value }
    }

    /// Create a unit from a value in inches.
    pub fn from_inch(value: f64) -> Self {
        Self {
            point: value * POINTS_PER_INCH,
        }
    }

    /// Create a unit from a value in centimeters.
    pub fn from_centimeter(value: f64) -> Self {
        Self {
            point: value * POINTS_PER_CENTIMETER,
        }
    }

    /// Create a unit from a value in millimeters.
    pub fn from_millimeter(value: f64) -> Self {
        Self {
            point: value * POINTS_PER_MILLIMETER,
        }
    }

    /// A zero-length unit.
    pub fn zero() -> Self {
        Self { point: 0.0 }
    }

    /// The value in points.
    pub fn point(&self) -> f64 {
        self.point
    }

    /// The value in inches.
    pub fn inch(&self) -> f64 {
        self.point / POINTS_PER_INCH
    }

    /// The value in centimeters.
    pub fn centimeter(&self) -> f64 {
        self.point / POINTS_PER_CENTIMETER
    }

    /// The value in millimeters.
    pub fn millimeter(&self) -> f64 {
        self.point / POINTS_PER_MILLIMETER
    }
}

impl From<f64> for Unit {
    /// A bare number is interpreted as points.
    fn from(value: f64) -> Self {
        Self::from_point(value)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}pt", self.point)
    }
}
