pub mod polygon_2d;
pub mod polygon_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for zero-length and zero-area tests.
pub const TOLERANCE: f64 = 1e-10;

/// Distance below which two points are considered coincident, and the
/// maximum deviation of a face vertex from its plane.
pub const LINEAR_TOLERANCE: f64 = 1e-7;
