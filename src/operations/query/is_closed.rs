use crate::topology::{Shape, TopologyStore};

/// Reports whether a shape is closed.
///
/// A wire is closed when it loops back to its first vertex, a shell when
/// every edge is shared by two of its faces, a face when its outer wire is
/// closed and a solid when its outer shell is. A compound is closed when it
/// is non-empty and every member is closed. Vertices, edges and shapes
/// missing from the store are never closed.
pub struct IsClosed {
    shape: Shape,
}

impl IsClosed {
    /// Creates a new `IsClosed` query.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        is_closed(store, self.shape)
    }
}

fn is_closed(store: &TopologyStore, shape: Shape) -> bool {
    match shape {
        Shape::Vertex(_) | Shape::Edge(_) => false,
        Shape::Wire(id) => store.wire(id).is_ok_and(|w| w.is_closed),
        Shape::Face(id) => store
            .face(id)
            .is_ok_and(|f| is_closed(store, Shape::Wire(f.outer_wire))),
        Shape::Shell(id) => store.shell(id).is_ok_and(|s| s.is_closed),
        Shape::Solid(id) => store
            .solid(id)
            .is_ok_and(|s| is_closed(store, Shape::Shell(s.outer_shell))),
        Shape::Compound(id) => store.compound(id).is_ok_and(|c| {
            !c.children.is_empty() && c.children.iter().all(|&child| is_closed(store, child))
        }),
    }
}
