//! Segment-segment intersection
//!
//! The narrow-phase test the collision resolver runs: a cheap axis-aligned
//! bounding-box reject, then the 2×2 linear solve for the crossing point of
//! the two carrier lines, accepted only if it falls on both finite segments.

use crate::foundation::math::Point2f;

/// Determinant magnitude below which two segments are treated as parallel
///
/// Near-parallel systems are rejected before the division so degenerate
/// geometry can never produce a NaN intersection point. Tunable through
/// `SimConfig::parallel_epsilon`.
pub const DEFAULT_PARALLEL_EPSILON: f32 = 1e-6;

/// Test two world-space segments for intersection
///
/// Returns the intersection point, or `None` for disjoint, parallel, or
/// degenerate segments. Endpoint touches count as intersections. There is no
/// tolerance beyond `parallel_epsilon`: the solved point must land inside the
/// bounding boxes of both segments exactly.
pub fn intersect_segments(
    a1: Point2f,
    a2: Point2f,
    b1: Point2f,
    b2: Point2f,
    parallel_epsilon: f32,
) -> Option<Point2f> {
    // Bounding-box reject before any arithmetic
    if a1.x.max(a2.x) < b1.x.min(b2.x)
        || b1.x.max(b2.x) < a1.x.min(a2.x)
        || a1.y.max(a2.y) < b1.y.min(b2.y)
        || b1.y.max(b2.y) < a1.y.min(a2.y)
    {
        return None;
    }

    let r = a2 - a1;
    let s = b2 - b1;

    // 2×2 system determinant; near-zero means parallel or degenerate
    let denominator = r.x * s.y - r.y * s.x;
    if denominator.abs() < parallel_epsilon {
        return None;
    }

    let q = b1 - a1;
    let t = (q.x * s.y - q.y * s.x) / denominator;
    let point = a1 + r * t;

    if within_box(point, a1, a2) && within_box(point, b1, b2) {
        Some(point)
    } else {
        None
    }
}

/// Whether a point lies inside the axis-aligned box spanned by two points
fn within_box(p: Point2f, a: Point2f, b: Point2f) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn intersect(a1: (f32, f32), a2: (f32, f32), b1: (f32, f32), b2: (f32, f32)) -> Option<Point2f> {
        intersect_segments(
            Point2f::new(a1.0, a1.1),
            Point2f::new(a2.0, a2.1),
            Point2f::new(b1.0, b1.1),
            Point2f::new(b2.0, b2.1),
            DEFAULT_PARALLEL_EPSILON,
        )
    }

    #[test]
    fn test_crossing_segments() {
        let point = intersect((0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0))
            .expect("diagonals cross");
        assert_relative_eq!(point, Point2f::new(5.0, 5.0));
    }

    #[test]
    fn test_disjoint_bounding_boxes() {
        assert!(intersect((0.0, 0.0), (1.0, 1.0), (5.0, 5.0), (6.0, 6.0)).is_none());
    }

    #[test]
    fn test_parallel_segments() {
        assert!(intersect((0.0, 0.0), (10.0, 0.0), (0.0, 1.0), (10.0, 1.0)).is_none());
    }

    #[test]
    fn test_collinear_segments_rejected_as_parallel() {
        assert!(intersect((0.0, 0.0), (10.0, 0.0), (5.0, 0.0), (15.0, 0.0)).is_none());
    }

    #[test]
    fn test_endpoint_touch() {
        let point = intersect((0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (10.0, 0.0))
            .expect("shared endpoint");
        assert_relative_eq!(point, Point2f::new(5.0, 5.0));
    }

    #[test]
    fn test_carrier_lines_cross_outside_segments() {
        // The infinite lines cross at (5,5) but segment b stops short of it
        assert!(intersect((0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (4.0, 6.0)).is_none());
    }

    #[test]
    fn test_near_parallel_below_threshold() {
        // Bounding boxes overlap, but the direction cross product sits under
        // the epsilon: rejected as degenerate before any division
        assert!(intersect_segments(
            Point2f::new(0.0, 0.0),
            Point2f::new(1.0, 0.0),
            Point2f::new(0.0, 1e-8),
            Point2f::new(1.0, 0.0),
            DEFAULT_PARALLEL_EPSILON,
        )
        .is_none());
    }

    #[test]
    fn test_vertical_and_horizontal() {
        let point = intersect((3.0, -5.0), (3.0, 5.0), (0.0, 2.0), (6.0, 2.0))
            .expect("perpendicular cross");
        assert_relative_eq!(point, Point2f::new(3.0, 2.0));
    }
}
