//! Candidate legs and the quantities derived from them.
//!
//! `Triple` only stores the legs `(x, y)`; hypotenuse, angle and relative error
//! are recomputed on demand. `TripleRecord` is the flattened, serializable view.

use nalgebra::Vector2;
use serde::Serialize;

/// Legs of a right triangle, `x >= y > 0` when produced by `Candidates`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triple {
    legs: Vector2<f64>,
}

impl Triple {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            legs: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.legs.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.legs.y
    }

    /// `sqrt(x² + y²)`.
    #[inline]
    pub fn hypotenuse(&self) -> f64 {
        self.legs.norm()
    }

    /// Polar angle of `(x, y)` in degrees.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.legs.y.atan2(self.legs.x).to_degrees()
    }

    /// Distance from the hypotenuse to the nearest integer or half-integer,
    /// relative to the hypotenuse.
    ///
    /// The half-integer term measures `|2z - round(2z)| / z`, i.e. twice the
    /// absolute distance, matching the reference threshold for (12, 12, 17).
    pub fn relative_error(&self) -> f64 {
        let z = self.hypotenuse();
        let integer = (z - z.round()).abs() / z;
        let half_integer = (2.0 * z - (2.0 * z).round()).abs() / z;
        integer.min(half_integer)
    }

    /// Accepted iff `relative_error() <= threshold`.
    #[inline]
    pub fn is_valid(&self, threshold: f64) -> bool {
        self.relative_error() <= threshold
    }

    pub fn record(&self) -> TripleRecord {
        TripleRecord {
            angle: self.angle(),
            x: self.x(),
            y: self.y(),
            z: self.hypotenuse(),
            relative_error: self.relative_error(),
        }
    }
}

/// Flat snapshot used by the JSON output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TripleRecord {
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub relative_error: f64,
}
