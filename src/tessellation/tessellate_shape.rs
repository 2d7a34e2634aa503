use crate::error::Result;
use crate::operations::query::{ElementType, Explore};
use crate::topology::{Shape, TopologyStore};

use super::{TessellateFace, TriangleMesh};

/// Tessellates every face contained in a shape into one combined mesh.
pub struct TessellateShape {
    shape: Shape,
}

impl TessellateShape {
    /// Creates a new `TessellateShape` operation.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or any of its faces cannot be tessellated.
    pub fn execute(&self, store: &TopologyStore) -> Result<TriangleMesh> {
        let mut combined = TriangleMesh::default();
        for face in Explore::new(self.shape, ElementType::Face).execute(store)? {
            if let Shape::Face(face_id) = face {
                combined.merge(&TessellateFace::new(face_id).execute(store)?);
            }
        }
        Ok(combined)
    }
}
