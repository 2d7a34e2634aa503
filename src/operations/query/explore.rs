use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{EditError, Result, TopologyError};
use crate::topology::{Shape, ShapeKind, TopologyStore};

/// The kinds of sub-element that can be enumerated and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Face,
    Edge,
    Vertex,
    Solid,
    Wire,
    Shell,
}

impl ElementType {
    /// Every supported element type.
    pub const ALL: [Self; 6] = [
        Self::Face,
        Self::Edge,
        Self::Vertex,
        Self::Solid,
        Self::Wire,
        Self::Shell,
    ];

    /// The shape kind that elements of this type have.
    #[must_use]
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Self::Face => ShapeKind::Face,
            Self::Edge => ShapeKind::Edge,
            Self::Vertex => ShapeKind::Vertex,
            Self::Solid => ShapeKind::Solid,
            Self::Wire => ShapeKind::Wire,
            Self::Shell => ShapeKind::Shell,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.shape_kind(), f)
    }
}

impl FromStr for ElementType {
    type Err = EditError;

    /// Parses a type tag case-insensitively. The plural `Vertexes` is
    /// accepted alongside `Vertex`.
    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        let name = if tag.eq_ignore_ascii_case("vertexes") {
            "vertex"
        } else {
            tag
        };
        Self::ALL
            .into_iter()
            .find(|element_type| element_type.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| EditError::UnsupportedElementType(tag.to_owned()))
    }
}

/// Enumerates the elements of one type contained in a shape.
///
/// Elements are listed in first-visit order of a depth-first walk: compound
/// members in insertion order, the outer shell before void shells, shell
/// faces in order, the outer wire before holes, wire edges in order, and an
/// edge's start before its end vertex. An element shared by several
/// parents is listed once. The order is stable for a given shape but
/// carries no geometric meaning.
pub struct Explore {
    shape: Shape,
    element_type: ElementType,
}

impl Explore {
    /// Creates a new `Explore` query.
    #[must_use]
    pub fn new(shape: Shape, element_type: ElementType) -> Self {
        Self {
            shape,
            element_type,
        }
    }

    /// Executes the query, returning the element sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or one of its sub-shapes is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Shape>> {
        let mut found = Vec::new();
        let mut seen = HashSet::new();
        collect(
            store,
            self.shape,
            self.element_type.shape_kind(),
            &mut found,
            &mut seen,
        )?;
        Ok(found)
    }
}

fn collect(
    store: &TopologyStore,
    shape: Shape,
    target: ShapeKind,
    found: &mut Vec<Shape>,
    seen: &mut HashSet<Shape>,
) -> Result<()> {
    if shape.kind() == target {
        if !store.contains(shape) {
            return Err(TopologyError::EntityNotFound(shape.kind().to_string()).into());
        }
        if seen.insert(shape) {
            found.push(shape);
        }
        return Ok(());
    }
    if shape.kind() < target {
        return Ok(());
    }

    let children: Vec<Shape> = match shape {
        Shape::Compound(id) => store.compound(id)?.children.clone(),
        Shape::Solid(id) => store.solid(id)?.shells().map(Shape::Shell).collect(),
        Shape::Shell(id) => store.shell(id)?.faces.iter().map(|&f| Shape::Face(f)).collect(),
        Shape::Face(id) => store.face(id)?.wires().map(Shape::Wire).collect(),
        Shape::Wire(id) => store.wire(id)?.edges.iter().map(|oe| Shape::Edge(oe.edge)).collect(),
        Shape::Edge(id) => {
            let edge = store.edge(id)?;
            vec![Shape::Vertex(edge.start), Shape::Vertex(edge.end)]
        }
        Shape::Vertex(_) => Vec::new(),
    };
    for child in children {
        collect(store, child, target, found, seen)?;
    }
    Ok(())
}
