use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
}

/// An edge as walked by a wire, possibly against its own direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub edge: EdgeId,
    /// `true` when the wire walks the edge from start to end.
    pub forward: bool,
}

impl OrientedEdge {
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// A chain of oriented edges, each starting where the previous one ends.
///
/// `is_closed` is set when the last edge ends at the first edge's start;
/// [`IsValid`](crate::operations::query::IsValid) checks that it agrees
/// with the vertices.
#[derive(Debug, Clone)]
pub struct WireData {
    pub edges: Vec<OrientedEdge>,
    pub is_closed: bool,
}
