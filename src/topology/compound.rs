use super::shape::Shape;

slotmap::new_key_type! {
    /// Unique identifier for a compound in the topology store.
    pub struct CompoundId;
}

/// An unordered container of shapes.
///
/// Members are not merged: a compound of two touching solids is still two
/// solids. Children may be of any kind, including other compounds.
#[derive(Debug, Clone, Default)]
pub struct CompoundData {
    /// The member shapes, in insertion order.
    pub children: Vec<Shape>,
}
