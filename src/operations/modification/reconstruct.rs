use std::fmt;

use crate::error::{EditError, Result};
use crate::operations::creation::{MakeCompound, MakeShell, MakeSolid, MakeWire};
use crate::operations::query::{ElementType, IsClosed, IsValid};
use crate::topology::{EdgeId, FaceId, Shape, TopologyStore};

/// The branch of the reconstruction decision tree that produced a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Remaining faces closed up into a solid.
    Solid,
    /// Remaining faces formed a valid shell with free edges.
    OpenShell,
    /// Remaining edges chained into one valid wire, open or closed.
    Wire,
    /// The elements were grouped as a compound by the type's rule.
    Compound,
    /// A single remaining wire, shell or solid used as is.
    Single,
    /// The first candidate was invalid and was replaced by a compound.
    CompoundFallback,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Solid => "solid",
            Self::OpenShell => "open shell",
            Self::Wire => "wire",
            Self::Compound => "compound",
            Self::Single => "single element",
            Self::CompoundFallback => "compound fallback",
        };
        f.write_str(name)
    }
}

/// What reconstruction produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructionOutcome {
    /// A replacement shape and the strategy that built it.
    Rebuilt { shape: Shape, strategy: Strategy },
    /// No elements were left to build from.
    NothingRemains,
}

/// Rebuilds a single shape from the elements left after a removal.
///
/// Faces are sewn into a shell, promoted to a solid when closed; edges are
/// chained into a single wire; vertices are always grouped. A lone wire, shell or solid is returned unwrapped and
/// several are grouped without merging. Whenever the first candidate fails
/// to assemble or is invalid, a plain compound of the elements is used
/// instead, so the result is at least a valid compound.
pub struct Reconstruct {
    element_type: ElementType,
    elements: Vec<Shape>,
}

impl Reconstruct {
    /// Creates a new `Reconstruct` operation over already normalized
    /// elements.
    #[must_use]
    pub fn new(element_type: ElementType, elements: Vec<Shape>) -> Self {
        Self {
            element_type,
            elements,
        }
    }

    /// Executes the reconstruction.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::ReconstructionFailed`] if even the compound of
    /// the remaining elements cannot be built.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<ReconstructionOutcome> {
        if self.elements.is_empty() {
            return Ok(ReconstructionOutcome::NothingRemains);
        }

        let (candidate, strategy) = self.primary(store)?;
        if IsValid::new(candidate).execute(store) {
            tracing::debug!(
                "Rebuilt {} from {} {} element(s) as {strategy}",
                candidate.kind(),
                self.elements.len(),
                self.element_type
            );
            return Ok(ReconstructionOutcome::Rebuilt {
                shape: candidate,
                strategy,
            });
        }

        tracing::warn!(
            "Reconstructed {} is invalid, falling back to a compound of {} element(s)",
            candidate.kind(),
            self.elements.len()
        );
        Ok(ReconstructionOutcome::Rebuilt {
            shape: self.compound(store)?,
            strategy: Strategy::CompoundFallback,
        })
    }

    fn primary(&self, store: &mut TopologyStore) -> Result<(Shape, Strategy)> {
        let built = match self.element_type {
            ElementType::Face => self.faces().and_then(|faces| sew_faces(store, faces)),
            ElementType::Edge => self.edges().and_then(|edges| chain_edges(store, edges)),
            ElementType::Wire | ElementType::Shell | ElementType::Solid => {
                match self.elements.as_slice() {
                    [single] => Some((*single, Strategy::Single)),
                    _ => None,
                }
            }
            ElementType::Vertex => None,
        };
        match built {
            Some(found) => Ok(found),
            None => Ok((self.compound(store)?, Strategy::Compound)),
        }
    }

    fn faces(&self) -> Option<Vec<FaceId>> {
        self.elements
            .iter()
            .map(|shape| match shape {
                Shape::Face(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn edges(&self) -> Option<Vec<EdgeId>> {
        self.elements
            .iter()
            .map(|shape| match shape {
                Shape::Edge(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn compound(&self, store: &mut TopologyStore) -> Result<Shape> {
        MakeCompound::new(self.elements.clone())
            .execute(store)
            .map(Shape::Compound)
            .map_err(|cause| EditError::ReconstructionFailed(Box::new(cause)).into())
    }
}

/// Shell from the faces; a solid when the shell is valid and closed.
fn sew_faces(store: &mut TopologyStore, faces: Vec<FaceId>) -> Option<(Shape, Strategy)> {
    let shell = match MakeShell::new(faces).execute(store) {
        Ok(shell) => shell,
        Err(err) => {
            tracing::debug!("Shell assembly failed: {err}");
            return None;
        }
    };
    if !IsValid::new(shell).execute(store) {
        return None;
    }
    if !IsClosed::new(shell).execute(store) {
        return Some((shell.into(), Strategy::OpenShell));
    }
    match MakeSolid::new(shell, vec![]).execute(store) {
        Ok(solid) => Some((solid.into(), Strategy::Solid)),
        Err(err) => {
            tracing::debug!("Solid assembly failed: {err}");
            None
        }
    }
}

/// Wire from the edges when they chain into one path.
fn chain_edges(store: &mut TopologyStore, edges: Vec<EdgeId>) -> Option<(Shape, Strategy)> {
    let wire = match MakeWire::new(edges).execute(store) {
        Ok(wire) => wire,
        Err(err) => {
            tracing::debug!("Wire assembly failed: {err}");
            return None;
        }
    };
    IsValid::new(wire)
        .execute(store)
        .then_some((wire.into(), Strategy::Wire))
}
