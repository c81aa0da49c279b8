use super::for_each_curve;
use crate::geometry::{Geometry, Point};
use crate::math::distance_2d::distance;

/// Length-weighted centroid of the dimension-1 parts of a geometry.
///
/// Each segment contributes its midpoint weighted by its length. When the
/// total length is zero the mean of the vertices is used instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurveCentroid {
    sum_x: f64,
    sum_y: f64,
    total_length: f64,
    vertex_x: f64,
    vertex_y: f64,
    vertex_count: usize,
}

impl CurveCentroid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates the curves of `geometry`.
    pub fn add(&mut self, geometry: &Geometry) {
        for_each_curve(geometry, &mut |points| self.add_points(points));
    }

    /// Accumulates a single point sequence.
    pub fn add_points(&mut self, points: &[Point]) {
        for p in points {
            self.vertex_x += p.x;
            self.vertex_y += p.y;
            self.vertex_count += 1;
        }
        for w in points.windows(2) {
            let length = distance(&w[0], &w[1]);
            self.sum_x += length * (w[0].x + w[1].x) * 0.5;
            self.sum_y += length * (w[0].y + w[1].y) * 0.5;
            self.total_length += length;
        }
    }

    /// The centroid, or `None` if no vertex was added.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.total_length > 0.0 {
            return Some(Point::new(self.sum_x / self.total_length, self.sum_y / self.total_length));
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertex_count as f64;
        (self.vertex_count > 0).then(|| Point::new(self.vertex_x / n, self.vertex_y / n))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, MultiLineString};
    use approx::assert_relative_eq;

    #[test]
    fn longer_segments_weigh_more() {
        // L shape: 8 units along x, 2 units up.
        let line = Geometry::LineString(LineString::from_xy(&[(0.0, 0.0), (8.0, 0.0), (8.0, 2.0)]));
        let mut engine = CurveCentroid::new();
        engine.add(&line);
        let c = engine.centroid().unwrap();
        assert_relative_eq!(c.x, (8.0 * 4.0 + 2.0 * 8.0) / 10.0);
        assert_relative_eq!(c.y, (2.0 * 1.0) / 10.0);
    }

    #[test]
    fn multi_line_string_sums_parts() {
        let ml = Geometry::MultiLineString(MultiLineString::new(vec![
            LineString::from_xy(&[(0.0, 0.0), (2.0, 0.0)]),
            LineString::from_xy(&[(0.0, 4.0), (2.0, 4.0)]),
        ]));
        let mut engine = CurveCentroid::new();
        engine.add(&ml);
        let c = engine.centroid().unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 2.0);
    }

    #[test]
    fn zero_length_falls_back_to_vertices() {
        let mut engine = CurveCentroid::new();
        engine.add_points(&[Point::new(3.0, 3.0), Point::new(3.0, 3.0)]);
        let c = engine.centroid().unwrap();
        assert_relative_eq!(c.x, 3.0);
        assert!(CurveCentroid::new().centroid().is_none());
    }
}
