use crate::geometry::{Geometry, Point};

/// Mean of the dimension-0 coordinates of a geometry.
///
/// Curves and surfaces are skipped entirely; collections are descended.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointCentroid {
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl PointCentroid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates the points of `geometry`.
    pub fn add(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Point(p) => self.add_point(p),
            Geometry::MultiPoint(mp) => mp.points.iter().for_each(|p| self.add_point(p)),
            Geometry::MultiCurve(c) | Geometry::MultiSurface(c) | Geometry::GeometryCollection(c) => {
                c.geometries.iter().for_each(|g| self.add(g));
            }
            _ => {}
        }
    }

    fn add_point(&mut self, point: &Point) {
        self.sum_x += point.x;
        self.sum_y += point.y;
        self.count += 1;
    }

    /// The centroid, or `None` if no point was added.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        #[allow(clippy::cast_precision_loss)]
        let n = self.count as f64;
        (self.count > 0).then(|| Point::new(self.sum_x / n, self.sum_y / n))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryCollection, LineString, MultiPoint};
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_points_ignoring_lines() {
        let gc = Geometry::GeometryCollection(GeometryCollection::new(vec![
            Geometry::MultiPoint(MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)])),
            Geometry::Point(Point::new(1.0, 3.0)),
            Geometry::LineString(LineString::from_xy(&[(100.0, 100.0), (200.0, 200.0)])),
        ]));
        let mut engine = PointCentroid::new();
        engine.add(&gc);
        let c = engine.centroid().unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn no_points_no_centroid() {
        let mut engine = PointCentroid::new();
        engine.add(&Geometry::LineString(LineString::from_xy(&[(0.0, 0.0), (1.0, 1.0)])));
        assert!(engine.centroid().is_none());
    }
}
