use crate::geometry::Plane;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a plane, defined by an outer wire
/// and optionally inner wires (holes). The outer wire winds
/// counter-clockwise around the plane normal, which points out of the
/// material; inner wires wind the other way.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The plane on which this face lies.
    pub surface: Plane,
    /// The outer boundary wire.
    pub outer_wire: WireId,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<WireId>,
}

impl FaceData {
    /// Iterates the outer wire followed by the inner wires.
    pub fn wires(&self) -> impl Iterator<Item = WireId> + '_ {
        std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied())
    }
}
