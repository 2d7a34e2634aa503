use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::topology::{FaceId, TopologyStore};

use super::TriangleMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;
type TriangleKey = FixedFaceHandle<InnerTag>;

/// Tessellates a planar face, holes included, into a triangle mesh.
pub struct TessellateFace {
    face: FaceId,
}

impl TessellateFace {
    /// Creates a new `TessellateFace` operation.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the tessellation, returning a triangle mesh whose triangles
    /// wind counter-clockwise around the face normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing, a boundary loop has fewer
    /// than three points, or two boundary edges cross.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, store: &TopologyStore) -> Result<TriangleMesh> {
        let face = store.face(self.face)?;
        let plane = &face.surface;
        let normal = *plane.normal();

        let mut cdt = Cdt::new();
        for wire_id in face.wires() {
            let loop_2d: Vec<SpadePoint2<f64>> = store
                .wire_points(wire_id)?
                .iter()
                .map(|p| {
                    let uv = plane.project(p);
                    SpadePoint2::new(uv.x, uv.y)
                })
                .collect();
            insert_loop(&mut cdt, &loop_2d)?;
        }

        let interior = interior_triangles(&cdt);

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            if !interior.contains(&face_handle.fix()) {
                continue;
            }

            // spade lists face vertices counter-clockwise, and the plane's
            // (u, v) frame is right-handed around its normal.
            let mut tri_indices = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                tri_indices[i] = *vertex_map.entry(idx).or_insert_with(|| {
                    let pos = vh.position();
                    mesh.vertices.push(plane.point_at(pos.x, pos.y));
                    mesh.normals.push(normal);
                    (mesh.vertices.len() - 1) as u32
                });
            }
            mesh.indices.push(tri_indices);
        }

        Ok(mesh)
    }
}

/// Inserts one boundary loop, closing it with a constraint back to its
/// first point.
fn insert_loop(cdt: &mut Cdt, points: &[SpadePoint2<f64>]) -> Result<()> {
    if points.len() < 3 {
        return Err(TessellationError::Failed(format!(
            "boundary loop has {} points, at least 3 are needed",
            points.len()
        ))
        .into());
    }

    let handles = points
        .iter()
        .map(|&pt| {
            cdt.insert(pt).map_err(|e: InsertionError| {
                TessellationError::Failed(format!("vertex insertion failed: {e}"))
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for (i, &from) in handles.iter().enumerate() {
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(
                TessellationError::Failed("boundary edges cross each other".into()).into(),
            );
        }
        cdt.add_constraint(from, to);
    }
    Ok(())
}

/// Parity flood fill: a triangle lies inside the face when an odd number of
/// boundary constraints separate it from the outer face.
fn interior_triangles(cdt: &Cdt) -> HashSet<TriangleKey> {
    let outer = cdt.outer_face().fix();
    let mut inside: HashMap<TriangleKey, bool> = HashMap::new();
    let mut pending: VecDeque<(TriangleKey, bool)> = VecDeque::new();

    for edge in cdt.directed_edges().filter(|e| e.face().fix() == outer) {
        if let Some(triangle) = edge.rev().face().as_inner() {
            let crossed = cdt.is_constraint_edge(edge.as_undirected().fix());
            if let Entry::Vacant(slot) = inside.entry(triangle.fix()) {
                slot.insert(crossed);
                pending.push_back((triangle.fix(), crossed));
            }
        }
    }

    while let Some((key, parity)) = pending.pop_front() {
        for edge in cdt.face(key).adjacent_edges() {
            let Some(next) = edge.rev().face().as_inner() else {
                continue;
            };
            let crossed = cdt.is_constraint_edge(edge.as_undirected().fix());
            if let Entry::Vacant(slot) = inside.entry(next.fix()) {
                slot.insert(parity != crossed);
                pending.push_back((next.fix(), parity != crossed));
            }
        }
    }

    inside
        .into_iter()
        .filter_map(|(key, parity)| parity.then_some(key))
        .collect()
}
