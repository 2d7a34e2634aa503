use std::f64::consts::TAU;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::MakePolyhedron;

/// Extrudes a planar polygon profile along a direction into a prism solid.
///
/// Faces are created in the order: base, top, then one side face per
/// profile edge.
pub struct MakePrism {
    profile: Vec<Point3>,
    direction: Vector3,
}

impl MakePrism {
    /// Creates a new `MakePrism` operation.
    #[must_use]
    pub fn new(profile: Vec<Point3>, direction: Vector3) -> Self {
        Self { profile, direction }
    }

    /// Creates a faceted cylinder: a regular `segments`-gon of the given
    /// radius around `base_center`, extruded along `axis` (whose length is
    /// the height).
    #[must_use]
    pub fn cylinder(base_center: Point3, radius: f64, axis: Vector3, segments: usize) -> Self {
        let axis_len = axis.norm();
        let unit = if axis_len < TOLERANCE {
            Vector3::z()
        } else {
            axis / axis_len
        };
        let u = perpendicular_dir(&unit);
        let v = unit.cross(&u);

        #[allow(clippy::cast_precision_loss)]
        let profile = (0..segments)
            .map(|i| {
                let angle = TAU * i as f64 / segments as f64;
                base_center + (u * angle.cos() + v * angle.sin()) * radius
            })
            .collect();
        Self::new(profile, axis)
    }

    /// Executes the operation, creating the prism in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile has fewer than three points, encloses
    /// no area, or the direction is parallel to the profile plane.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let n = self.profile.len();
        if n < 3 {
            return Err(
                OperationError::InvalidInput("prism profile needs at least 3 points".into()).into(),
            );
        }
        let normal = newell_normal(&self.profile);
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("prism profile encloses no area".into()).into());
        }
        let lift = normal.normalize().dot(&self.direction);
        if lift.abs() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("prism direction lies in the profile plane".into())
                    .into(),
            );
        }

        // Wind the base counter-clockwise around the extrusion direction
        let base: Vec<Point3> = if lift > 0.0 {
            self.profile.clone()
        } else {
            self.profile.iter().rev().copied().collect()
        };

        let mut points = base.clone();
        points.extend(base.iter().map(|p| p + self.direction));

        let mut faces = Vec::with_capacity(n + 2);
        faces.push((0..n).rev().collect());
        faces.push((n..2 * n).collect());
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(vec![i, j, n + j, n + i]);
        }

        MakePolyhedron::new(points, faces).execute(store)
    }
}

/// Finds a direction perpendicular to the given unit vector.
fn perpendicular_dir(axis: &Vector3) -> Vector3 {
    let candidate = if axis.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let perp = axis.cross(&candidate);
    perp / perp.norm()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{IsValid, Volume};
    use crate::topology::Shape;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn triangular_prism_has_5_faces() {
        let mut store = TopologyStore::new();
        let solid = MakePrism::new(
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 2.0, 0.0)],
            Vector3::new(0.0, 0.0, 3.0),
        )
        .execute(&mut store)
        .unwrap();
        let shell = store.shell(store.solid(solid).unwrap().outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 5);
        assert!(shell.is_closed);
        let volume = Volume::new(Shape::Solid(solid)).execute(&store).unwrap();
        assert_relative_eq!(volume, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn clockwise_profile_is_rewound() {
        let mut store = TopologyStore::new();
        let solid = MakePrism::new(
            vec![p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0)],
            Vector3::new(0.0, 0.0, 1.0),
        )
        .execute(&mut store)
        .unwrap();
        assert!(IsValid::new(Shape::Solid(solid)).execute(&store));
    }

    #[test]
    fn faceted_cylinder_volume_approaches_circle() {
        let mut store = TopologyStore::new();
        let solid = MakePrism::cylinder(p(0.0, 0.0, 0.0), 2.0, Vector3::new(0.0, 0.0, 5.0), 64)
            .execute(&mut store)
            .unwrap();
        let volume = Volume::new(Shape::Solid(solid)).execute(&store).unwrap();
        // pi * r^2 * h = 20 pi, faceting loses under 1%
        let expected = 20.0 * std::f64::consts::PI;
        assert!((volume - expected).abs() < expected * 0.01, "got {volume}");
        assert!(IsValid::new(Shape::Solid(solid)).execute(&store));
    }

    #[test]
    fn direction_in_profile_plane_fails() {
        let mut store = TopologyStore::new();
        let result = MakePrism::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            Vector3::new(1.0, 0.0, 0.0),
        )
        .execute(&mut store);
        assert!(result.is_err());
    }
}
