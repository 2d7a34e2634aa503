use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A bounded line segment carried by an edge.
///
/// The parametric form is `P(t) = origin + t * direction` with a unit
/// direction, so `t` runs from `0` at the origin to `length` at the far end.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
    length: f64,
}

impl Line {
    /// Creates the segment running from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn from_points(start: Point3, end: Point3) -> Result<Self> {
        let delta = end - start;
        let length = delta.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin: start,
            direction: delta / length,
            length,
        })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the far end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.point_at(self.length)
    }

    /// Point at arc length `t` from the origin.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
