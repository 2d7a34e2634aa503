use std::collections::{HashMap, VecDeque};

use crate::error::TopologyError;
use crate::topology::{EdgeId, FaceId, TopologyStore};

/// One traversal of an edge by a face boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeUse {
    /// The face whose boundary walks the edge.
    pub face: FaceId,
    /// Whether the boundary walks the edge start → end.
    pub forward: bool,
}

/// Maps every edge bounding `faces` to the faces that use it.
///
/// # Errors
///
/// Returns an error if a face or one of its wires is missing.
pub fn edge_uses(
    store: &TopologyStore,
    faces: &[FaceId],
) -> Result<HashMap<EdgeId, Vec<EdgeUse>>, TopologyError> {
    let mut uses: HashMap<EdgeId, Vec<EdgeUse>> = HashMap::new();
    for &face_id in faces {
        let face = store.face(face_id)?;
        for wire_id in face.wires() {
            for oe in &store.wire(wire_id)?.edges {
                uses.entry(oe.edge).or_default().push(EdgeUse {
                    face: face_id,
                    forward: oe.forward,
                });
            }
        }
    }
    Ok(uses)
}

/// Counts the groups of faces connected through shared edges.
///
/// # Errors
///
/// Returns an error if a face or one of its wires is missing.
pub fn face_components(store: &TopologyStore, faces: &[FaceId]) -> Result<usize, TopologyError> {
    let uses = edge_uses(store, faces)?;

    let mut neighbors: HashMap<FaceId, Vec<FaceId>> =
        faces.iter().map(|&f| (f, Vec::new())).collect();
    for users in uses.values() {
        for a in users {
            for b in users {
                if a.face != b.face {
                    neighbors.entry(a.face).or_default().push(b.face);
                }
            }
        }
    }

    let mut visited: HashMap<FaceId, bool> = faces.iter().map(|&f| (f, false)).collect();
    let mut components = 0;
    for &seed in faces {
        if visited[&seed] {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([seed]);
        visited.insert(seed, true);
        while let Some(face) = queue.pop_front() {
            for &next in &neighbors[&face] {
                if !visited[&next] {
                    visited.insert(next, true);
                    queue.push_back(next);
                }
            }
        }
    }
    Ok(components)
}
