mod defeature;
mod normalize;
mod reconstruct;
mod remove_element;
mod select;

pub use defeature::{Defeature, DefeatureParams, DefeatureReport};
pub use normalize::{normalize, ElementInput, Projection};
pub use reconstruct::{Reconstruct, ReconstructionOutcome, Strategy};
pub use remove_element::{RemovalOutcome, RemoveElement};
pub use select::{select, Selection};
