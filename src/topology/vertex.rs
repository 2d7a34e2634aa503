use crate::math::{Point3, LINEAR_TOLERANCE};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// Data associated with a topological vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Whether `other` lies within [`LINEAR_TOLERANCE`] of this vertex.
    #[must_use]
    pub fn coincides_with(&self, other: &Point3) -> bool {
        (self.point - other).norm() < LINEAR_TOLERANCE
    }
}
