use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::{Shape, TopologyStore};

use super::{ElementType, Explore};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }

    /// The smallest box enclosing both boxes.
    #[must_use]
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

/// Computes the axis-aligned bounding box of a shape's vertices.
pub struct BoundingBox {
    shape: Shape,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is missing or contains no vertices.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for vertex in Explore::new(self.shape, ElementType::Vertex).execute(store)? {
            let Shape::Vertex(id) = vertex else {
                continue;
            };
            let point = store.vertex(id)?.point;
            bounds = Some(match bounds {
                None => Aabb {
                    min: point,
                    max: point,
                },
                Some(b) => Aabb {
                    min: b.min.inf(&point),
                    max: b.max.sup(&point),
                },
            });
        }
        bounds.ok_or_else(|| OperationError::InvalidInput("shape has no vertices".into()).into())
    }
}
