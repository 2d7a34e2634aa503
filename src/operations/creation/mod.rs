mod make_box;
mod make_compound;
mod make_face;
mod make_polygon;
mod make_polyhedron;
mod make_prism;
mod make_shell;
mod make_solid;
mod make_wire;

pub use make_box::MakeBox;
pub use make_compound::MakeCompound;
pub use make_face::MakeFace;
pub use make_polygon::MakePolygon;
pub use make_polyhedron::MakePolyhedron;
pub use make_prism::MakePrism;
pub use make_shell::MakeShell;
pub use make_solid::MakeSolid;
pub use make_wire::MakeWire;
