use std::collections::HashSet;

use crate::math::polygon_2d::loops_cross;
use crate::math::polygon_3d::polygon_area_3d;
use crate::math::{Point2, LINEAR_TOLERANCE, TOLERANCE};
use crate::topology::{
    CompoundId, EdgeId, FaceId, Shape, ShellId, SolidId, TopologyStore, VertexId, WireId,
};

use super::volume::signed_shell_volume;
use super::{edge_uses, face_components};

type Check = std::result::Result<(), String>;

/// Validates the topological and geometric consistency of a shape.
///
/// The rules depend on the shape kind:
///
/// - vertex: present in the store
/// - edge: distinct endpoints of non-zero length matching its line
/// - wire: a connected chain of valid edges without repeats, whose stored
///   closedness agrees with its end vertices
/// - face: closed valid wires lying on the face plane, enclosing area,
///   with no two boundary edges crossing
/// - shell: valid, edge-connected, consistently oriented faces sharing each
///   edge at most twice, with stored closedness in agreement
/// - solid: valid closed shells enclosing positive volume
/// - compound: every member present in the store, recursing only into
///   nested compounds, so a compound of any existing shapes is valid
pub struct IsValid {
    shape: Shape,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// Executes the validation, returning `true` if the shape is valid.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        check_shape(store, self.shape).is_ok()
    }

    /// Describes the first rule the shape violates, or `None` when valid.
    #[must_use]
    pub fn diagnose(&self, store: &TopologyStore) -> Option<String> {
        check_shape(store, self.shape).err()
    }
}

fn check_shape(store: &TopologyStore, shape: Shape) -> Check {
    match shape {
        Shape::Vertex(id) => check_vertex(store, id),
        Shape::Edge(id) => check_edge(store, id),
        Shape::Wire(id) => check_wire(store, id),
        Shape::Face(id) => check_face(store, id),
        Shape::Shell(id) => check_shell(store, id),
        Shape::Solid(id) => check_solid(store, id),
        Shape::Compound(id) => check_compound(store, id),
    }
}

fn check_vertex(store: &TopologyStore, id: VertexId) -> Check {
    store.vertex(id).map(|_| ()).map_err(|e| e.to_string())
}

fn check_edge(store: &TopologyStore, id: EdgeId) -> Check {
    let edge = store.edge(id).map_err(|e| e.to_string())?;
    if edge.start == edge.end {
        return Err("edge starts and ends at the same vertex".into());
    }
    let start = store.vertex(edge.start).map_err(|e| e.to_string())?;
    let end = store.vertex(edge.end).map_err(|e| e.to_string())?;
    if (end.point - start.point).norm() <= LINEAR_TOLERANCE {
        return Err("edge has zero length".into());
    }
    if !start.coincides_with(edge.curve.origin()) || !end.coincides_with(&edge.curve.end()) {
        return Err("edge line does not match its vertices".into());
    }
    Ok(())
}

fn check_wire(store: &TopologyStore, id: WireId) -> Check {
    let wire = store.wire(id).map_err(|e| e.to_string())?;
    if wire.edges.is_empty() {
        return Err("wire has no edges".into());
    }

    let mut seen = HashSet::new();
    let mut ends = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        if !seen.insert(oe.edge) {
            return Err("edge repeated in wire".into());
        }
        check_edge(store, oe.edge)?;
        let edge = store.edge(oe.edge).map_err(|e| e.to_string())?;
        ends.push((edge.first_vertex(oe.forward), edge.last_vertex(oe.forward)));
    }

    if ends.windows(2).any(|pair| pair[0].1 != pair[1].0) {
        return Err("consecutive wire edges are not connected".into());
    }
    let loops = match (ends.first(), ends.last()) {
        (Some(first), Some(last)) => ends.len() > 1 && first.0 == last.1,
        _ => false,
    };
    if loops != wire.is_closed {
        return Err("stored wire closedness disagrees with its vertices".into());
    }
    Ok(())
}

fn check_face(store: &TopologyStore, id: FaceId) -> Check {
    let face = store.face(id).map_err(|e| e.to_string())?;
    let mut loops: Vec<Vec<Point2>> = Vec::new();
    for wire_id in face.wires() {
        check_wire(store, wire_id)?;
        if !store.wire(wire_id).map_err(|e| e.to_string())?.is_closed {
            return Err("face boundary wire is open".into());
        }
        let points = store.wire_points(wire_id).map_err(|e| e.to_string())?;
        if points
            .iter()
            .any(|p| face.surface.signed_distance(p).abs() > LINEAR_TOLERANCE)
        {
            return Err("face boundary leaves the face plane".into());
        }
        loops.push(points.iter().map(|p| face.surface.project(p)).collect());
    }
    if loops_cross(&loops) {
        return Err("face boundary crosses itself".into());
    }

    let outer = store
        .wire_points(face.outer_wire)
        .map_err(|e| e.to_string())?;
    if polygon_area_3d(&outer, face.surface.normal()) <= TOLERANCE {
        return Err("face encloses no area".into());
    }
    Ok(())
}

fn check_shell(store: &TopologyStore, id: ShellId) -> Check {
    let shell = store.shell(id).map_err(|e| e.to_string())?;
    if shell.faces.is_empty() {
        return Err("shell has no faces".into());
    }
    for &face in &shell.faces {
        check_face(store, face)?;
    }

    let uses = edge_uses(store, &shell.faces).map_err(|e| e.to_string())?;
    for users in uses.values() {
        match users.as_slice() {
            [_] => {}
            [a, b] if a.forward != b.forward => {}
            [_, _] => return Err("adjacent faces are inconsistently oriented".into()),
            _ => return Err("an edge is shared by more than two faces".into()),
        }
    }
    let closed = uses.values().all(|u| u.len() == 2);
    if closed != shell.is_closed {
        return Err("stored shell closedness disagrees with its edges".into());
    }
    if face_components(store, &shell.faces).map_err(|e| e.to_string())? != 1 {
        return Err("shell faces are not connected".into());
    }
    Ok(())
}

fn check_solid(store: &TopologyStore, id: SolidId) -> Check {
    let solid = store.solid(id).map_err(|e| e.to_string())?;
    let mut volume = 0.0;
    for (i, shell_id) in solid.shells().enumerate() {
        check_shell(store, shell_id)?;
        if !store.shell(shell_id).map_err(|e| e.to_string())?.is_closed {
            return Err("solid is bounded by an open shell".into());
        }
        let signed = signed_shell_volume(store, shell_id).map_err(|e| e.to_string())?;
        if i == 0 && signed <= 0.0 {
            return Err("outer shell faces point inward".into());
        }
        volume += if i == 0 { signed } else { -signed.abs() };
    }
    if volume <= TOLERANCE {
        return Err("solid encloses no volume".into());
    }
    Ok(())
}

fn check_compound(store: &TopologyStore, id: CompoundId) -> Check {
    let compound = store.compound(id).map_err(|e| e.to_string())?;
    for &child in &compound.children {
        if !store.contains(child) {
            return Err(format!("compound member {} is missing", child.kind()));
        }
        if let Shape::Compound(nested) = child {
            check_compound(store, nested)?;
        }
    }
    Ok(())
}
