use std::fmt;

use super::{CompoundId, EdgeId, FaceId, ShellId, SolidId, VertexId, WireId};

/// The topological kind of a [`Shape`], ordered by containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Vertex,
    Edge,
    Wire,
    Face,
    Shell,
    Solid,
    Compound,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertex => "Vertex",
            Self::Edge => "Edge",
            Self::Wire => "Wire",
            Self::Face => "Face",
            Self::Shell => "Shell",
            Self::Solid => "Solid",
            Self::Compound => "Compound",
        };
        f.write_str(name)
    }
}

/// A handle to any topological entity in a [`TopologyStore`](super::TopologyStore).
///
/// Shapes are plain IDs: copying one never copies topology, and two shapes
/// compare equal exactly when they name the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Vertex(VertexId),
    Edge(EdgeId),
    Wire(WireId),
    Face(FaceId),
    Shell(ShellId),
    Solid(SolidId),
    Compound(CompoundId),
}

impl Shape {
    /// Returns the kind tag of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Vertex(_) => ShapeKind::Vertex,
            Self::Edge(_) => ShapeKind::Edge,
            Self::Wire(_) => ShapeKind::Wire,
            Self::Face(_) => ShapeKind::Face,
            Self::Shell(_) => ShapeKind::Shell,
            Self::Solid(_) => ShapeKind::Solid,
            Self::Compound(_) => ShapeKind::Compound,
        }
    }
}

macro_rules! impl_from_id {
    ($($id:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$id> for Shape {
                fn from(id: $id) -> Self {
                    Self::$variant(id)
                }
            }
        )*
    };
}

impl_from_id! {
    VertexId => Vertex,
    EdgeId => Edge,
    WireId => Wire,
    FaceId => Face,
    ShellId => Shell,
    SolidId => Solid,
    CompoundId => Compound,
}
