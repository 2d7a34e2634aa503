use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::Plane;
use crate::math::polygon_2d::loops_cross;
use crate::math::{Point2, LINEAR_TOLERANCE};
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Creates a planar face from closed boundary wires.
///
/// The plane is fitted to the outer wire, so the face normal follows the
/// outer wire's winding.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a wire is missing or open, the outer wire
    /// encloses no area, any wire vertex lies off the fitted plane, or two
    /// boundary edges cross.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        for wire_id in std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied()) {
            if !store.wire(wire_id)?.is_closed {
                return Err(TopologyError::WireNotClosed.into());
            }
        }

        let outer = store.wire_points(self.outer_wire)?;
        let surface = Plane::from_polygon(&outer)?;

        let mut loops: Vec<Vec<Point2>> = Vec::with_capacity(self.inner_wires.len() + 1);
        for wire_id in std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied()) {
            let points = store.wire_points(wire_id)?;
            if points
                .iter()
                .any(|p| surface.signed_distance(p).abs() > LINEAR_TOLERANCE)
            {
                return Err(GeometryError::Degenerate("face boundary is not planar".into()).into());
            }
            loops.push(points.iter().map(|p| surface.project(p)).collect());
        }
        if loops_cross(&loops) {
            return Err(GeometryError::Degenerate("face boundary crosses itself".into()).into());
        }

        Ok(store.add_face(FaceData {
            surface,
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakePolygon;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn square_face_normal_follows_winding() {
        let mut store = TopologyStore::new();
        let wire = MakePolygon::new(
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(0.0, 2.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let normal = store.face(face).unwrap().surface.normal().z;
        assert!((normal - 1.0).abs() < 1e-12);
    }

    #[test]
    fn open_wire_fails() {
        let mut store = TopologyStore::new();
        let wire = MakePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn non_planar_wire_fails() {
        let mut store = TopologyStore::new();
        let wire = MakePolygon::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.5), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn hole_must_be_coplanar() {
        let mut store = TopologyStore::new();
        let outer = MakePolygon::new(
            vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(4.0, 4.0, 0.0), p(0.0, 4.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let lifted = MakePolygon::new(
            vec![p(1.0, 1.0, 1.0), p(1.0, 2.0, 1.0), p(2.0, 2.0, 1.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(outer, vec![lifted]).execute(&mut store).is_err());
    }

    fn square_wire(store: &mut TopologyStore) -> WireId {
        MakePolygon::new(
            vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(4.0, 4.0, 0.0), p(0.0, 4.0, 0.0)],
            true,
        )
        .execute(store)
        .unwrap()
    }

    #[test]
    fn self_crossing_outer_wire_fails() {
        let mut store = TopologyStore::new();
        let bowtie = MakePolygon::new(
            vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 4.0, 0.0), p(6.0, 6.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(matches!(
            MakeFace::new(bowtie, vec![]).execute(&mut store),
            Err(crate::error::BrepEditError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn hole_crossing_the_boundary_fails() {
        let mut store = TopologyStore::new();
        let outer = square_wire(&mut store);
        let poking_out = MakePolygon::new(
            vec![p(3.0, 1.0, 0.0), p(5.0, 1.0, 0.0), p(5.0, 3.0, 0.0), p(3.0, 3.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(outer, vec![poking_out]).execute(&mut store).is_err());

        let outer = square_wire(&mut store);
        let a = MakePolygon::new(
            vec![p(1.0, 1.0, 0.0), p(1.0, 2.0, 0.0), p(2.0, 2.0, 0.0), p(2.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let b = MakePolygon::new(
            vec![p(1.5, 1.5, 0.0), p(1.5, 3.0, 0.0), p(3.0, 3.0, 0.0), p(3.0, 1.5, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(outer, vec![a, b]).execute(&mut store).is_err());
    }
}
