use crate::error::{GeometryError, Result};
use crate::math::polygon_3d::{centroid, newell_normal};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and two orthogonal unit direction vectors
/// (`u_dir`, `v_dir`). The normal is `u_dir × v_dir`.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let u_dir = normal.cross(&reference).normalize();
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Fits a plane through a closed polygon.
    ///
    /// The normal follows the polygon winding (right-hand rule) and the
    /// origin is the vertex centroid.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has fewer than three points or
    /// encloses no area.
    pub fn from_polygon(points: &[Point3]) -> Result<Self> {
        if points.len() < 3 {
            return Err(
                GeometryError::Degenerate("a plane needs at least 3 points".into()).into(),
            );
        }
        let normal = newell_normal(points);
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("polygon encloses no area".into()).into());
        }
        let origin = centroid(points).ok_or(GeometryError::ZeroVector)?;
        Self::from_normal(origin, normal)
    }

    /// Returns the normal vector of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance of `point` along the plane normal.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }

    /// Projects a 3D point into the plane's UV coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let d = point - self.origin;
        Point2::new(d.dot(&self.u_dir), d.dot(&self.v_dir))
    }

    /// Lifts UV coordinates back onto the plane.
    #[must_use]
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.u_dir * u + self.v_dir * v
    }
}
