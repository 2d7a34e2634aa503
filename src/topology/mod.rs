pub mod compound;
pub mod edge;
pub mod face;
pub mod shape;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use compound::{CompoundData, CompoundId};
pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use shape::{Shape, ShapeKind};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Generates the insert and lookup pair for each entity arena.
macro_rules! arena_accessors {
    ($($field:ident: $id:ty => $data:ty, $add:ident, $get:ident, $label:literal;)*) => {
        $(
            #[doc = concat!("Inserts ", $label, " data and returns its ID.")]
            pub fn $add(&mut self, data: $data) -> $id {
                self.$field.insert(data)
            }

            #[doc = concat!("Looks up ", $label, " data by ID.")]
            ///
            /// # Errors
            ///
            /// Returns [`TopologyError::EntityNotFound`] if the ID is stale.
            pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
                self.$field
                    .get(id)
                    .ok_or_else(|| TopologyError::EntityNotFound($label.into()))
            }
        )*
    };
}

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures. Sub-shapes are shared: a face
/// may be referenced by the shell of a solid and by a compound at the
/// same time, and replacing a shape never copies its children.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
    compounds: SlotMap<CompoundId, CompoundData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the entity named by `shape` is present in the store.
    #[must_use]
    pub fn contains(&self, shape: Shape) -> bool {
        match shape {
            Shape::Vertex(id) => self.vertices.contains_key(id),
            Shape::Edge(id) => self.edges.contains_key(id),
            Shape::Wire(id) => self.wires.contains_key(id),
            Shape::Face(id) => self.faces.contains_key(id),
            Shape::Shell(id) => self.shells.contains_key(id),
            Shape::Solid(id) => self.solids.contains_key(id),
            Shape::Compound(id) => self.compounds.contains_key(id),
        }
    }

    arena_accessors! {
        vertices: VertexId => VertexData, add_vertex, vertex, "vertex";
        edges: EdgeId => EdgeData, add_edge, edge, "edge";
        wires: WireId => WireData, add_wire, wire, "wire";
        faces: FaceId => FaceData, add_face, face, "face";
        shells: ShellId => ShellData, add_shell, shell, "shell";
        solids: SolidId => SolidData, add_solid, solid, "solid";
        compounds: CompoundId => CompoundData, add_compound, compound, "compound";
    }

    /// Returns the vertex positions of a wire in traversal order.
    ///
    /// Each oriented edge contributes its first vertex; the end of an open
    /// wire is appended so the list covers every vertex once.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire or one of its edges or vertices is missing.
    pub fn wire_points(&self, id: WireId) -> Result<Vec<Point3>, TopologyError> {
        let wire = self.wire(id)?;
        let mut points = Vec::with_capacity(wire.edges.len() + 1);
        for oe in &wire.edges {
            let edge = self.edge(oe.edge)?;
            points.push(self.vertex(edge.first_vertex(oe.forward))?.point);
        }
        if !wire.is_closed {
            if let Some(last) = wire.edges.last() {
                let edge = self.edge(last.edge)?;
                points.push(self.vertex(edge.last_vertex(last.forward))?.point);
            }
        }
        Ok(points)
    }

    /// Removes a compound container, leaving its children untouched.
    ///
    /// Returns the removed data, or `None` if the id was not present.
    pub fn remove_compound(&mut self, id: CompoundId) -> Option<CompoundData> {
        self.compounds.remove(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn contains_tracks_insertion_and_removal() {
        let mut store = TopologyStore::new();
        let v = store.add_vertex(VertexData::new(Point3::origin()));
        let c = store.add_compound(CompoundData {
            children: vec![Shape::Vertex(v)],
        });
        assert!(store.contains(Shape::Vertex(v)));
        assert!(store.contains(Shape::Compound(c)));

        let removed = store.remove_compound(c).unwrap();
        assert_eq!(removed.children, vec![Shape::Vertex(v)]);
        assert!(!store.contains(Shape::Compound(c)));
        assert!(store.contains(Shape::Vertex(v)));
    }

    #[test]
    fn missing_entity_is_an_error() {
        let mut store = TopologyStore::new();
        let c = store.add_compound(CompoundData::default());
        store.remove_compound(c);
        assert!(matches!(
            store.compound(c),
            Err(TopologyError::EntityNotFound(_))
        ));
    }
}
