use thiserror::Error;

use crate::operations::query::ElementType;
use crate::topology::ShapeKind;

/// Top-level error type for brepedit.
#[derive(Debug, Error)]
pub enum BrepEditError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological operations.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("edges do not form a single connected path")]
    Disconnected,

    #[error("non-manifold topology: {0}")]
    NonManifold(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to kernel construction operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors raised by element removal and defeaturing.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("unsupported element type `{0}`, expected one of: Face, Edge, Vertex, Solid, Wire, Shell")]
    UnsupportedElementType(String),

    #[error("the shape has no elements of type {0}")]
    NoElementsOfType(ElementType),

    #[error("{element_type} index {index} out of range, total: {total}")]
    IndexOutOfRange {
        element_type: ElementType,
        index: i64,
        total: usize,
    },

    #[error("failed to construct a valid replacement shape: {0}")]
    ReconstructionFailed(#[source] Box<BrepEditError>),

    #[error("all {kind} elements are below threshold {threshold}, cannot defeature")]
    AllElementsBelowThreshold { kind: ShapeKind, threshold: f64 },

    #[error("no remaining elements and failed to remove object `{object}`: {cause}")]
    UnrecoverableRemoval {
        object: String,
        #[source]
        cause: Box<BrepEditError>,
    },
}

/// Convenience type alias for results using [`BrepEditError`].
pub type Result<T> = std::result::Result<T, BrepEditError>;
