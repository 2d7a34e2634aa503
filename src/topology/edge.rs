use crate::geometry::Line;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and carries the line segment between
/// them. The segment origin sits on the start vertex.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric segment defining this edge's shape.
    pub curve: Line,
}

impl EdgeData {
    /// Returns the vertex at the given end of the edge, as traversed.
    #[must_use]
    pub fn first_vertex(&self, forward: bool) -> VertexId {
        if forward {
            self.start
        } else {
            self.end
        }
    }

    /// Returns the vertex at the far end of the edge, as traversed.
    #[must_use]
    pub fn last_vertex(&self, forward: bool) -> VertexId {
        if forward {
            self.end
        } else {
            self.start
        }
    }
}
