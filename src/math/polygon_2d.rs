//! Point-versus-ring predicates on x/y.
//!
//! "On" and "in" are disjoint: a point lying on a ring edge is never
//! reported as inside that ring.

use super::Vector2;
use crate::geometry::{Point, Polygon};

/// Tests whether `point` lies on the segment `a`-`b`.
///
/// The point must be collinear within `epsilon` (cross product of `b - a`
/// and `point - a`) and inside the segment's bounding box widened by
/// `epsilon`.
#[must_use]
pub fn point_on_segment(point: &Point, a: &Point, b: &Point, epsilon: f64) -> bool {
    let ab = Vector2::new(b.x - a.x, b.y - a.y);
    let ap = Vector2::new(point.x - a.x, point.y - a.y);
    if ab.perp(&ap).abs() > epsilon {
        return false;
    }
    point.x >= a.x.min(b.x) - epsilon
        && point.x <= a.x.max(b.x) + epsilon
        && point.y >= a.y.min(b.y) - epsilon
        && point.y <= a.y.max(b.y) + epsilon
}

/// Tests whether `point` lies on any segment of an open point sequence.
#[must_use]
pub fn point_on_line(point: &Point, points: &[Point], epsilon: f64) -> bool {
    points
        .windows(2)
        .any(|w| point_on_segment(point, &w[0], &w[1], epsilon))
}

/// Tests whether `point` lies on an edge of `ring`.
///
/// An open ring is treated as if closed.
#[must_use]
pub fn point_on_ring_edge(point: &Point, ring: &[Point], epsilon: f64) -> bool {
    ring_edges(ring).any(|(a, b)| point_on_segment(point, a, b, epsilon))
}

/// Crossing-number test for `point` strictly inside `ring`.
///
/// Points on an edge are not inside. Edge y spans are half open so a ray
/// through a shared vertex is counted once.
#[must_use]
pub fn point_in_ring(point: &Point, ring: &[Point], epsilon: f64) -> bool {
    if ring.len() < 3 || point_on_ring_edge(point, ring, epsilon) {
        return false;
    }
    let mut inside = false;
    for (a, b) in ring_edges(ring) {
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Tests whether `point` is inside the polygon's exterior and not inside
/// or on any of its holes.
#[must_use]
pub fn point_in_polygon(point: &Point, polygon: &Polygon, epsilon: f64) -> bool {
    let Some(exterior) = polygon.exterior() else {
        return false;
    };
    point_in_ring(point, &exterior.points, epsilon)
        && !polygon.holes().iter().any(|hole| {
            point_in_ring(point, &hole.points, epsilon) || point_on_ring_edge(point, &hole.points, epsilon)
        })
}

/// Tests whether `point` lies on any ring edge of the polygon.
#[must_use]
pub fn point_on_polygon_edge(point: &Point, polygon: &Polygon, epsilon: f64) -> bool {
    polygon
        .rings
        .iter()
        .any(|ring| point_on_ring_edge(point, &ring.points, epsilon))
}

/// True when the first and last points coincide within `epsilon`.
#[must_use]
pub fn is_closed_ring(ring: &[Point], epsilon: f64) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 => {
            (first.x - last.x).abs() <= epsilon && (first.y - last.y).abs() <= epsilon
        }
        _ => false,
    }
}

/// Shoelace signed area of a ring, open or closed.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    ring_edges(ring).map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() * 0.5
}

/// Consecutive point pairs of a ring, plus the closing pair when the ring
/// is open.
pub(crate) fn ring_edges(ring: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    let closing = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && (first.x != last.x || first.y != last.y) => {
            Some((last, first))
        }
        _ => None,
    };
    ring.windows(2).map(|w| (&w[0], &w[1])).chain(closing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LineString;
    use crate::math::{DEFAULT_EQUAL_EPSILON, DEFAULT_LINE_EPSILON};
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square() -> Vec<Point> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 0.0)]
    }

    #[test]
    fn on_segment_requires_collinear_and_bounded() {
        assert!(point_on_segment(&p(5.0, 0.0), &p(0.0, 0.0), &p(10.0, 0.0), DEFAULT_LINE_EPSILON));
        assert!(point_on_segment(&p(10.0, 0.0), &p(0.0, 0.0), &p(10.0, 0.0), DEFAULT_LINE_EPSILON));
        assert!(!point_on_segment(&p(11.0, 0.0), &p(0.0, 0.0), &p(10.0, 0.0), DEFAULT_LINE_EPSILON));
        assert!(!point_on_segment(&p(5.0, 0.1), &p(0.0, 0.0), &p(10.0, 0.0), DEFAULT_LINE_EPSILON));
    }

    #[test]
    fn on_line_checks_every_segment() {
        let line = [p(0.0, 0.0), p(5.0, 0.0), p(5.0, 5.0)];
        assert!(point_on_line(&p(5.0, 2.0), &line, DEFAULT_LINE_EPSILON));
        assert!(!point_on_line(&p(2.0, 2.0), &line, DEFAULT_LINE_EPSILON));
    }

    #[test]
    fn in_ring_and_on_edge_are_disjoint() {
        let ring = square();
        assert!(point_in_ring(&p(5.0, 5.0), &ring, DEFAULT_LINE_EPSILON));
        assert!(!point_in_ring(&p(0.0, 5.0), &ring, DEFAULT_LINE_EPSILON));
        assert!(point_on_ring_edge(&p(0.0, 5.0), &ring, DEFAULT_LINE_EPSILON));
        assert!(!point_in_ring(&p(15.0, 5.0), &ring, DEFAULT_LINE_EPSILON));
    }

    #[test]
    fn open_ring_is_closed_implicitly() {
        let ring = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        assert!(point_on_ring_edge(&p(0.0, 5.0), &ring, DEFAULT_LINE_EPSILON));
        assert!(point_in_ring(&p(1.0, 1.0), &ring, DEFAULT_LINE_EPSILON));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Ray at y = 5 passes through the apex of the diamond.
        let diamond = [p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0), p(0.0, 5.0), p(5.0, 0.0)];
        assert!(point_in_ring(&p(5.0, 5.0), &diamond, DEFAULT_LINE_EPSILON));
        assert!(!point_in_ring(&p(-1.0, 5.0), &diamond, DEFAULT_LINE_EPSILON));
    }

    #[test]
    fn polygon_with_hole() {
        let polygon = Polygon::new(vec![
            LineString::new(square()),
            LineString::from_xy(&[(4.0, 4.0), (4.0, 6.0), (6.0, 6.0), (6.0, 4.0), (4.0, 4.0)]),
        ]);
        assert!(point_in_polygon(&p(2.0, 2.0), &polygon, DEFAULT_LINE_EPSILON));
        assert!(!point_in_polygon(&p(5.0, 5.0), &polygon, DEFAULT_LINE_EPSILON));
        assert!(!point_in_polygon(&p(4.0, 5.0), &polygon, DEFAULT_LINE_EPSILON));
        assert!(point_on_polygon_edge(&p(4.0, 5.0), &polygon, DEFAULT_LINE_EPSILON));
    }

    #[test]
    fn closed_ring_check() {
        assert!(is_closed_ring(&square(), DEFAULT_EQUAL_EPSILON));
        assert!(!is_closed_ring(&square()[..4], DEFAULT_EQUAL_EPSILON));
        assert!(!is_closed_ring(&[p(0.0, 0.0)], DEFAULT_EQUAL_EPSILON));
    }

    #[test]
    fn winding_sign() {
        assert_abs_diff_eq!(signed_area(&square()), 100.0, epsilon = 1e-12);
        let mut cw = square();
        cw.reverse();
        assert_abs_diff_eq!(signed_area(&cw), -100.0, epsilon = 1e-12);
        // Open form gives the same area.
        assert_abs_diff_eq!(signed_area(&square()[..4]), 100.0, epsilon = 1e-12);
    }
}
