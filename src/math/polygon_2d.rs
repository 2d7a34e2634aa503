use super::{Point2, TOLERANCE};

/// Whether two segments cross at a point interior to both.
///
/// Segments that only touch at an endpoint, or that are parallel, do not
/// cross.
#[must_use]
pub fn segments_cross(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return false;
    }

    let d = b0 - a0;
    let t = (d.x * db.y - d.y * db.x) / cross;
    let u = (d.x * da.y - d.y * da.x) / cross;

    let eps = TOLERANCE;
    t > eps && t < 1.0 - eps && u > eps && u < 1.0 - eps
}

/// Whether any edge of the closed loops crosses another edge, within one
/// loop or between two loops.
#[must_use]
pub fn loops_cross(loops: &[Vec<Point2>]) -> bool {
    let segments: Vec<(Point2, Point2)> = loops
        .iter()
        .flat_map(|points| {
            points
                .iter()
                .zip(points.iter().cycle().skip(1))
                .map(|(a, b)| (*a, *b))
        })
        .collect();

    segments.iter().enumerate().any(|(i, (a0, a1))| {
        segments[i + 1..]
            .iter()
            .any(|(b0, b1)| segments_cross(a0, a1, b0, b1))
    })
}
