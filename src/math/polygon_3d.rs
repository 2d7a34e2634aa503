use super::{Point3, Vector3};

/// Newell normal of a closed 3D polygon.
///
/// The result is not normalized: its length is twice the polygon area and
/// its direction follows the right-hand rule over the point order. Works
/// for concave polygons and tolerates slightly non-planar input.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Compute the area of a 3D polygon (coplanar points).
///
/// Uses the cross-product summation method projected along the polygon normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal).abs()
}

/// Arithmetic mean of a point set, or `None` when the set is empty.
#[must_use]
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let inv = 1.0 / points.len() as f64;
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum * inv))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn newell_normal_of_ccw_square_points_up() {
        let n = newell_normal(&unit_square());
        assert!((n - Vector3::new(0.0, 0.0, 2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn newell_normal_flips_with_winding() {
        let mut sq = unit_square();
        sq.reverse();
        let n = newell_normal(&sq);
        assert!(n.z < 0.0);
    }

    #[test]
    fn newell_normal_handles_concave_l_shape() {
        let l = vec![
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        // |n| = 2 * area = 2 * 3
        assert!((newell_normal(&l).norm() - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn unit_square_area() {
        let area = polygon_area_3d(&unit_square(), &Vector3::z());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn triangle_area() {
        let tri = vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 3.0, 0.0)];
        let area = polygon_area_3d(&tri, &Vector3::z());
        assert!((area - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square() {
        let c = centroid(&unit_square()).unwrap();
        assert!((c - p(0.5, 0.5, 0.0)).norm() < TOLERANCE);
        assert!(centroid(&[]).is_none());
    }
}
