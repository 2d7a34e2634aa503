mod adjacency;
mod area;
mod bounding_box;
mod explore;
mod is_closed;
mod is_valid;
mod volume;

pub use adjacency::{edge_uses, face_components, EdgeUse};
pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use explore::{ElementType, Explore};
pub use is_closed::IsClosed;
pub use is_valid::IsValid;
pub use volume::{signed_shell_volume, Volume};
