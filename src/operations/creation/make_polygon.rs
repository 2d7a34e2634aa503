use crate::error::{OperationError, Result};
use crate::geometry::Line;
use crate::math::Point3;
use crate::topology::{EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a polyline wire from a sequence of 3D points.
///
/// Every point becomes a new vertex and every consecutive pair a new line
/// edge. With `close` set, a last edge joins the final point to the first.
pub struct MakePolygon {
    points: Vec<Point3>,
    close: bool,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if there are too few points for the requested wire,
    /// or two consecutive points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "a {} polygon needs at least {min_points} points",
                if self.close { "closed" } else { "open" }
            ))
            .into());
        }

        let n = self.points.len();
        let segment_count = if self.close { n } else { n - 1 };

        // Validate geometry before touching the store
        let mut lines = Vec::with_capacity(segment_count);
        for i in 0..segment_count {
            let j = (i + 1) % n;
            lines.push(Line::from_points(self.points[i], self.points[j])?);
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();

        let edges = lines
            .into_iter()
            .enumerate()
            .map(|(i, curve)| {
                let edge = store.add_edge(EdgeData {
                    start: vertices[i],
                    end: vertices[(i + 1) % n],
                    curve,
                });
                OrientedEdge::new(edge, true)
            })
            .collect();

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}
