use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::MakePolyhedron;

/// Creates an axis-aligned box solid from two corner points.
///
/// Faces are created in the order x-min, x-max, y-min, y-max, z-min, z-max.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Creates a box with one corner at `origin` and the given extents,
    /// like a length/width/height primitive placed at a base point.
    #[must_use]
    pub fn with_size(origin: Point3, length: f64, width: f64, height: f64) -> Self {
        Self::new(origin, origin + Vector3::new(length, width, height))
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the box is degenerate along any axis.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let lo = self.min_corner.inf(&self.max_corner);
        let hi = self.min_corner.sup(&self.max_corner);
        let size = hi - lo;
        if size.x < TOLERANCE || size.y < TOLERANCE || size.z < TOLERANCE {
            return Err(
                OperationError::InvalidInput("box extents must be non-zero".into()).into(),
            );
        }

        let points = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ];
        // Counter-clockwise seen from outside
        let faces = vec![
            vec![0, 4, 7, 3],
            vec![1, 2, 6, 5],
            vec![0, 1, 5, 4],
            vec![3, 7, 6, 2],
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
        ];
        MakePolyhedron::new(points, faces).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{IsValid, Volume};
    use crate::topology::Shape;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_has_6_faces() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.shell(store.solid(solid).unwrap().outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 6);
        assert!(shell.is_closed);
    }

    #[test]
    fn face_normals_point_outward() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.shell(store.solid(solid).unwrap().outer_shell).unwrap();
        let center = p(0.5, 0.5, 0.5);
        for &face_id in &shell.faces {
            let plane = &store.face(face_id).unwrap().surface;
            assert!(plane.signed_distance(&center) < 0.0);
        }
    }

    #[test]
    fn swapped_corners_are_normalized() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(2.0, 3.0, 4.0), p(0.0, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        assert!(IsValid::new(Shape::Solid(solid)).execute(&store));
        let volume = Volume::new(Shape::Solid(solid)).execute(&store).unwrap();
        assert!((volume - 24.0).abs() < 1e-9);
    }

    #[test]
    fn flat_box_fails() {
        let mut store = TopologyStore::new();
        let result = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
