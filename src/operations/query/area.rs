use crate::error::Result;
use crate::tessellation::TessellateShape;
use crate::topology::{Shape, TopologyStore};

/// Computes the total area of the faces contained in a shape.
///
/// Uses tessellation and sums the triangle areas, which is exact for planar
/// faces. Shapes without faces have zero area.
pub struct Area {
    shape: Shape,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// Executes the query, returning the total surface area.
    ///
    /// # Errors
    ///
    /// Returns an error if a face cannot be tessellated.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(TessellateShape::new(self.shape).execute(store)?.area())
    }
}
