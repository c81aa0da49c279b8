use super::{
    degrees_to_radians, radians_to_degrees, Vector2, BEARING_EAST, BEARING_NORTH, BEARING_SOUTH,
    BEARING_WEST,
};
use crate::geometry::Point;

/// Planar distance between two points.
#[must_use]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (b.xy() - a.xy()).norm()
}

/// Distance from `point` to the infinite line through `line_start` and
/// `line_end`.
///
/// A zero-length line degrades to the distance to `line_start`.
#[must_use]
pub fn perpendicular_distance(point: &Point, line_start: &Point, line_end: &Point) -> f64 {
    let dir = Vector2::new(line_end.x - line_start.x, line_end.y - line_start.y);
    let len = dir.norm();
    if len == 0.0 {
        return distance(point, line_start);
    }
    let to_point = Vector2::new(point.x - line_start.x, point.y - line_start.y);
    dir.perp(&to_point).abs() / len
}

/// Minimum distance from `point` to the segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point, a: &Point, b: &Point) -> f64 {
    let d = Vector2::new(b.x - a.x, b.y - a.y);
    let len_sq = d.norm_squared();
    if len_sq == 0.0 {
        return distance(point, a);
    }

    // Project onto the line, clamp to the segment.
    let t = ((point.x - a.x) * d.x + (point.y - a.y) * d.y) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * d.x, a.y + t * d.y);
    distance(point, &closest)
}

/// Equality of x and y within `epsilon`.
#[must_use]
pub fn points_equal(a: &Point, b: &Point, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}

/// Initial great-circle bearing from `from` to `to`, both in
/// longitude/latitude degrees. Result is in `[0, 360)`.
#[must_use]
pub fn bearing(from: &Point, to: &Point) -> f64 {
    let lat1 = degrees_to_radians(from.y);
    let lat2 = degrees_to_radians(to.y);
    let dlon = degrees_to_radians(to.x - from.x);

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    (radians_to_degrees(y.atan2(x)) + 360.0) % 360.0
}

/// Bearing points into the northern half (strictly within 90 degrees of north).
#[must_use]
pub fn is_north_bearing(bearing: f64) -> bool {
    let bearing = bearing % 360.0;
    bearing < BEARING_EAST || bearing > BEARING_WEST
}

#[must_use]
pub fn is_east_bearing(bearing: f64) -> bool {
    let bearing = bearing % 360.0;
    bearing > BEARING_NORTH && bearing < BEARING_SOUTH
}

#[must_use]
pub fn is_south_bearing(bearing: f64) -> bool {
    let bearing = bearing % 360.0;
    bearing > BEARING_EAST && bearing < BEARING_WEST
}

#[must_use]
pub fn is_west_bearing(bearing: f64) -> bool {
    let bearing = bearing % 360.0;
    bearing > BEARING_SOUTH && bearing < 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn planar_distance() {
        assert_abs_diff_eq!(distance(&p(0.0, 0.0), &p(3.0, 4.0)), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_to_infinite_line() {
        // Beyond the end of the segment, still measured to the line.
        let d = perpendicular_distance(&p(20.0, 3.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert_abs_diff_eq!(d, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_to_degenerate_line() {
        let d = perpendicular_distance(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_distance_clamps() {
        let d = point_to_segment_dist(&p(13.0, 4.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
        let d = point_to_segment_dist(&p(5.0, -2.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert_abs_diff_eq!(d, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn equality_within_epsilon() {
        assert!(points_equal(&p(1.0, 1.0), &p(1.0 + 1e-9, 1.0), 1e-8));
        assert!(!points_equal(&p(1.0, 1.0), &p(1.0 + 1e-7, 1.0), 1e-8));
    }

    #[test]
    fn cardinal_bearings() {
        assert_abs_diff_eq!(bearing(&p(0.0, 0.0), &p(0.0, 10.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing(&p(0.0, 0.0), &p(10.0, 0.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing(&p(0.0, 10.0), &p(0.0, 0.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing(&p(10.0, 0.0), &p(0.0, 0.0)), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn bearing_quadrants() {
        assert!(is_north_bearing(10.0));
        assert!(is_north_bearing(350.0));
        assert!(!is_north_bearing(90.0));
        assert!(is_east_bearing(45.0));
        assert!(!is_east_bearing(0.0));
        assert!(is_south_bearing(180.0));
        assert!(is_west_bearing(300.0));
        assert!(!is_west_bearing(180.0));
    }
}
