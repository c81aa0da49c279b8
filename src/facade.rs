//! Convenience entry points on [`Geometry`].
//!
//! Each method builds the matching operation with default tolerances and
//! runs it. Use the operation structs directly for custom tolerances.

use crate::geometry::{Envelope, Geometry, Point};
use crate::operations::modification::{Crop, PointFiniteFilter, Simplify};
use crate::operations::query::{BuildEnvelope, Centroid, DegreesCentroid, IsSimple};
use crate::operations::transform::{Bound, DegreesToMeters, MetersToDegrees, Minimize, Normalize};
use crate::projection::Projection;

impl Geometry {
    /// Bounding envelope; `None` for empty geometries.
    #[must_use]
    pub fn envelope(&self) -> Option<Envelope> {
        BuildEnvelope::new().execute(self)
    }

    /// Whether the bounding envelope overlaps `envelope` with positive
    /// width on both axes.
    #[must_use]
    pub fn envelope_intersects(&self, envelope: &Envelope) -> bool {
        self.envelope().is_some_and(|e| e.intersects(envelope, false))
    }

    /// Planar centroid of the highest-dimension parts.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        Centroid::new().execute(self)
    }

    /// Centroid of WGS84 coordinates on the sphere.
    #[must_use]
    pub fn degrees_centroid(&self) -> Option<Point> {
        DegreesCentroid::new().execute(self)
    }

    /// Shamos–Hoey simplicity of a surface; `None` for other geometries.
    #[must_use]
    pub fn is_simple(&self) -> Option<bool> {
        IsSimple::new().execute(self)
    }

    #[must_use]
    pub fn simplify(&self, tolerance: f64) -> Option<Geometry> {
        Simplify::new(tolerance).execute(self)
    }

    #[must_use]
    pub fn crop(&self, envelope: &Envelope) -> Option<Geometry> {
        Crop::new(*envelope).execute(self)
    }

    #[must_use]
    pub fn crop_web_mercator(&self) -> Option<Geometry> {
        Crop::web_mercator().execute(self)
    }

    /// Drops points with non-finite x or y.
    #[must_use]
    pub fn filter_finite(&self) -> Option<Geometry> {
        PointFiniteFilter::default().apply(self)
    }

    #[must_use]
    pub fn minimize(&self, projection: Projection) -> Geometry {
        Minimize::new(projection.max_x()).execute(self)
    }

    #[must_use]
    pub fn minimize_wgs84(&self) -> Geometry {
        self.minimize(Projection::Wgs84)
    }

    #[must_use]
    pub fn minimize_web_mercator(&self) -> Geometry {
        self.minimize(Projection::WebMercator)
    }

    #[must_use]
    pub fn normalize(&self, projection: Projection) -> Geometry {
        Normalize::new(projection.max_x()).execute(self)
    }

    #[must_use]
    pub fn normalize_wgs84(&self) -> Geometry {
        self.normalize(Projection::Wgs84)
    }

    #[must_use]
    pub fn normalize_web_mercator(&self) -> Geometry {
        self.normalize(Projection::WebMercator)
    }

    /// Clamps every coordinate into the projection's world envelope.
    #[must_use]
    pub fn bound(&self, projection: Projection) -> Geometry {
        Bound::new(projection.envelope()).execute(self)
    }

    #[must_use]
    pub fn bound_wgs84(&self) -> Geometry {
        self.bound(Projection::Wgs84)
    }

    #[must_use]
    pub fn bound_wgs84_transformable(&self) -> Geometry {
        self.bound(Projection::Wgs84Transformable)
    }

    #[must_use]
    pub fn bound_web_mercator(&self) -> Geometry {
        self.bound(Projection::WebMercator)
    }

    #[must_use]
    pub fn bound_wgs84_with_web_mercator(&self) -> Geometry {
        self.bound(Projection::Wgs84WithWebMercator)
    }

    #[must_use]
    pub fn degrees_to_meters(&self) -> Geometry {
        DegreesToMeters::new().execute(self)
    }

    #[must_use]
    pub fn meters_to_degrees(&self) -> Geometry {
        MetersToDegrees::new().execute(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::{Envelope, Geometry, LineString, MultiPoint, Point, Polygon};
    use crate::math::{WEB_MERCATOR_MAX_LAT_RANGE, WGS84_HALF_WORLD_LON_WIDTH};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn envelope_and_centroid_of_points() {
        let mp = Geometry::MultiPoint(MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)]));
        let envelope = mp.envelope().unwrap();
        assert_relative_eq!(envelope.min_x(), 0.0);
        assert_relative_eq!(envelope.max_x(), 10.0);
        assert_relative_eq!(envelope.min_y(), 0.0);
        assert_relative_eq!(envelope.max_y(), 5.0);
        assert_eq!(envelope.centroid(), Point::new(5.0, 2.5));
        assert_eq!(mp.centroid(), Some(Point::new(5.0, 2.5)));

        let touching = Envelope::new(10.0, 0.0, 20.0, 5.0).unwrap();
        assert!(!mp.envelope_intersects(&touching));
        assert!(mp.envelope_intersects(&Envelope::new(5.0, 1.0, 20.0, 2.0).unwrap()));
    }

    #[test]
    fn square_queries() {
        let square = Geometry::Polygon(Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]));
        let centroid = square.centroid().unwrap();
        assert_relative_eq!(centroid.x, 2.0);
        assert_relative_eq!(centroid.y, 2.0);
        assert_eq!(square.is_simple(), Some(true));
        assert_eq!(square.simplify(0.0), Some(square.clone()));
    }

    #[test]
    fn crop_line_to_envelope() {
        let line = Geometry::LineString(LineString::from_xy(&[(-20.0, 0.0), (20.0, 0.0)]));
        let envelope = Envelope::new(-10.0, -10.0, 10.0, 10.0).unwrap();
        assert_eq!(
            line.crop(&envelope),
            Some(Geometry::LineString(LineString::from_xy(&[(-10.0, 0.0), (10.0, 0.0)])))
        );
    }

    #[test]
    fn projection_shortcuts() {
        let line = Geometry::LineString(LineString::from_xy(&[(170.0, 0.0), (-170.0, 95.0)]));
        let Geometry::LineString(bounded) = line.minimize_wgs84().bound_wgs84_with_web_mercator() else {
            panic!("variant changed");
        };
        assert_relative_eq!(bounded.points[1].x, WGS84_HALF_WORLD_LON_WIDTH);
        assert_relative_eq!(bounded.points[1].y, WEB_MERCATOR_MAX_LAT_RANGE);

        let Geometry::LineString(round_trip) = line.bound_wgs84().degrees_to_meters().meters_to_degrees() else {
            panic!("variant changed");
        };
        assert_abs_diff_eq!(round_trip.points[0].x, 170.0, epsilon = 1e-9);
        assert!(round_trip.points[1].y.is_finite());

        let wrapped = Geometry::Point(Point::new(3.0e7, 0.0)).normalize_web_mercator();
        let Geometry::Point(p) = wrapped else {
            panic!("variant changed");
        };
        assert!(p.x < 0.0);
    }

    #[test]
    fn finite_filter_shortcut() {
        let line = Geometry::LineString(LineString::from_xy(&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0)]));
        let Some(Geometry::LineString(kept)) = line.filter_finite() else {
            panic!("expected a line string");
        };
        assert_eq!(kept.points.len(), 2);
    }
}
