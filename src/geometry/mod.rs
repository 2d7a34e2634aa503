//! Geometry carried by the planar kernel: line segments for edges and
//! planes for faces.

mod line;
mod plane;

pub use line::Line;
pub use plane::Plane;
