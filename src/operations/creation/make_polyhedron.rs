use std::collections::HashMap;

use crate::error::{OperationError, Result};
use crate::geometry::Line;
use crate::math::Point3;
use crate::topology::{
    EdgeData, EdgeId, FaceId, OrientedEdge, SolidId, TopologyStore, VertexData, VertexId, WireData,
};

use super::{MakeFace, MakeShell, MakeSolid};

/// Creates a solid bounded by planar polygon faces over a shared vertex list.
///
/// Each face is a loop of indices into `points`, wound counter-clockwise
/// when seen from outside the solid. Vertices and edges are shared between
/// the faces that use them, so a correctly wound closed polyhedron yields
/// a closed shell.
pub struct MakePolyhedron {
    points: Vec<Point3>,
    faces: Vec<Vec<usize>>,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        Self { points, faces }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a face has fewer than three indices, an index is
    /// out of range, or any face or shell construction fails.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.faces.is_empty() {
            return Err(OperationError::InvalidInput("a polyhedron needs faces".into()).into());
        }
        for face in &self.faces {
            if face.len() < 3 {
                return Err(OperationError::InvalidInput(
                    "a polyhedron face needs at least 3 vertices".into(),
                )
                .into());
            }
            if let Some(&bad) = face.iter().find(|&&i| i >= self.points.len()) {
                return Err(OperationError::InvalidInput(format!(
                    "vertex index {bad} out of range for {} points",
                    self.points.len()
                ))
                .into());
            }
        }

        let mut builder = EdgeSharing::new(store, &self.points);
        let mut face_ids: Vec<FaceId> = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            face_ids.push(builder.face(face)?);
        }

        let shell = MakeShell::new(face_ids).execute(store)?;
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

/// Creates vertices once and reuses an edge, reversed, for the second face
/// that walks it.
struct EdgeSharing<'a> {
    store: &'a mut TopologyStore,
    vertices: Vec<VertexId>,
    edges: HashMap<(usize, usize), EdgeId>,
}

impl<'a> EdgeSharing<'a> {
    fn new(store: &'a mut TopologyStore, points: &[Point3]) -> Self {
        let vertices = points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();
        Self {
            store,
            vertices,
            edges: HashMap::new(),
        }
    }

    fn oriented_edge(&mut self, a: usize, b: usize) -> Result<OrientedEdge> {
        if let Some(&edge) = self.edges.get(&(b, a)) {
            return Ok(OrientedEdge::new(edge, false));
        }
        if let Some(&edge) = self.edges.get(&(a, b)) {
            return Ok(OrientedEdge::new(edge, true));
        }
        let start = self.vertices[a];
        let end = self.vertices[b];
        let curve = Line::from_points(self.store.vertex(start)?.point, self.store.vertex(end)?.point)?;
        let edge = self.store.add_edge(EdgeData { start, end, curve });
        self.edges.insert((a, b), edge);
        Ok(OrientedEdge::new(edge, true))
    }

    fn face(&mut self, indices: &[usize]) -> Result<FaceId> {
        let n = indices.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(self.oriented_edge(indices[i], indices[(i + 1) % n])?);
        }
        let wire = self.store.add_wire(WireData {
            edges,
            is_closed: true,
        });
        MakeFace::new(wire, vec![]).execute(self.store)
    }
}
