use super::{Vector2, PARALLEL_EPSILON};
use crate::geometry::Point;

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * (p2 - p1)` and `p3 + u * (p4 - p3)`, returns
/// `(t, u)` if they are not parallel.
#[must_use]
pub fn line_line_params(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Option<(f64, f64)> {
    let d1 = Vector2::new(p2.x - p1.x, p2.y - p1.y);
    let d2 = Vector2::new(p4.x - p3.x, p4.y - p3.y);
    let det = d1.perp(&d2);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let dx = p3.x - p1.x;
    let dy = p3.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / det;
    let u = (dx * d1.y - dy * d1.x) / det;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Parallel and collinear segments report no intersection; see
/// [`collinear_overlap`] for that case.
#[must_use]
pub fn segment_intersection(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Option<Point> {
    let (t, u) = line_line_params(p1, p2, p3, p4)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(point_at(p1, p2, t))
    } else {
        None
    }
}

/// Intersection of the infinite lines through the two point pairs.
#[must_use]
pub fn line_intersection(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Option<Point> {
    line_line_params(p1, p2, p3, p4).map(|(t, _)| point_at(p1, p2, t))
}

/// Returns `true` if the segments lie on one line and share more than
/// nothing: a common stretch or a common endpoint.
#[must_use]
pub fn collinear_overlap(p1: &Point, p2: &Point, p3: &Point, p4: &Point, epsilon: f64) -> bool {
    let d1 = Vector2::new(p2.x - p1.x, p2.y - p1.y);
    let to3 = Vector2::new(p3.x - p1.x, p3.y - p1.y);
    let to4 = Vector2::new(p4.x - p1.x, p4.y - p1.y);
    if d1.perp(&to3).abs() > epsilon || d1.perp(&to4).abs() > epsilon {
        return false;
    }

    // Project onto the dominant axis and compare intervals.
    let (a0, a1, b0, b1) = if d1.x.abs() >= d1.y.abs() {
        (p1.x, p2.x, p3.x, p4.x)
    } else {
        (p1.y, p2.y, p3.y, p4.y)
    };
    let (a_min, a_max) = (a0.min(a1), a0.max(a1));
    let (b_min, b_max) = (b0.min(b1), b0.max(b1));
    a_min.max(b_min) <= a_max.min(b_max)
}

/// Linear interpolation of x and y: `a + (b - a) * t`.
#[must_use]
pub fn point_at(a: &Point, b: &Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        let hit = segment_intersection(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn endpoint_touch_is_an_intersection() {
        let hit = segment_intersection(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 5.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn disjoint_segments() {
        assert!(segment_intersection(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, -1.0), &p(2.0, 1.0)).is_none());
    }

    #[test]
    fn parallel_and_collinear_report_none() {
        assert!(segment_intersection(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0)).is_none());
        assert!(segment_intersection(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0), &p(3.0, 0.0)).is_none());
    }

    #[test]
    fn infinite_lines_meet_outside_segments() {
        let hit = line_intersection(&p(0.0, 0.0), &p(1.0, 0.0), &p(5.0, -1.0), &p(5.0, 1.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_overlap_detection() {
        assert!(collinear_overlap(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0), &p(3.0, 0.0), 1e-12));
        assert!(collinear_overlap(&p(0.0, 0.0), &p(0.0, 2.0), &p(0.0, 2.0), &p(0.0, 3.0), 1e-12));
        assert!(!collinear_overlap(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), &p(3.0, 0.0), 1e-12));
        assert!(!collinear_overlap(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0), 1e-12));
    }
}
