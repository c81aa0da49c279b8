//! Spherical Web Mercator conversion between WGS84 degrees and meters.

use std::f64::consts::PI;

use tracing::debug;

use crate::geometry::{Geometry, Point};
use crate::math::{DEGREES_TO_METERS_MIN_LAT, WEB_MERCATOR_HALF_WORLD_WIDTH, WGS84_HALF_WORLD_LON_WIDTH};

/// Projects WGS84 degrees to Web Mercator meters.
///
/// Latitudes are clamped to `[DEGREES_TO_METERS_MIN_LAT, 90]` first so the
/// poles stay finite.
#[derive(Debug, Default, Clone, Copy)]
pub struct DegreesToMeters;

impl DegreesToMeters {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn point(&self, point: &Point) -> Point {
        let lat = point.y.clamp(DEGREES_TO_METERS_MIN_LAT, 90.0);
        if lat != point.y {
            debug!(latitude = point.y, clamped = lat, "latitude clamped before projection");
        }
        let x = point.x * WEB_MERCATOR_HALF_WORLD_WIDTH / WGS84_HALF_WORLD_LON_WIDTH;
        let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
        point.with_xy(x, y * WEB_MERCATOR_HALF_WORLD_WIDTH / WGS84_HALF_WORLD_LON_WIDTH)
    }

    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(&mut |p| self.point(p))
    }
}

/// Unprojects Web Mercator meters to WGS84 degrees.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetersToDegrees;

impl MetersToDegrees {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn point(&self, point: &Point) -> Point {
        let x = point.x / WEB_MERCATOR_HALF_WORLD_WIDTH * WGS84_HALF_WORLD_LON_WIDTH;
        let y = point.y / WEB_MERCATOR_HALF_WORLD_WIDTH * WGS84_HALF_WORLD_LON_WIDTH;
        let y = (y * PI / 180.0).exp().atan() / PI * 360.0 - 90.0;
        point.with_xy(x, y)
    }

    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(&mut |p| self.point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, Polygon};
    use crate::math::WEB_MERCATOR_MAX_LAT_RANGE;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn world_corners() {
        let corner = DegreesToMeters::new().point(&Point::new(180.0, WEB_MERCATOR_MAX_LAT_RANGE));
        assert_relative_eq!(corner.x, WEB_MERCATOR_HALF_WORLD_WIDTH);
        assert_relative_eq!(corner.y, WEB_MERCATOR_HALF_WORLD_WIDTH, max_relative = 1e-9);
        let origin = DegreesToMeters::new().point(&Point::new(0.0, 0.0));
        assert_abs_diff_eq!(origin.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn round_trip_recovers_degrees() {
        let polygon = Geometry::Polygon(Polygon::from_xy(&[
            (-122.4, 37.8),
            (139.7, 35.7),
            (151.2, -33.9),
            (-0.1, 51.5),
            (-122.4, 37.8),
        ]));
        let meters = DegreesToMeters::new().execute(&polygon);
        let Geometry::Polygon(back) = MetersToDegrees::new().execute(&meters) else {
            panic!("variant changed");
        };
        let Geometry::Polygon(original) = polygon else {
            unreachable!();
        };
        for (a, b) in back.rings[0].points.iter().zip(&original.rings[0].points) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn poles_stay_finite_and_z_carries() {
        let line = Geometry::LineString(LineString::new(vec![Point::new_z(0.0, -90.0, 7.0), Point::new_z(0.0, 90.0, 8.0)]));
        let Geometry::LineString(projected) = DegreesToMeters::new().execute(&line) else {
            panic!("variant changed");
        };
        assert!(projected.points.iter().all(|p| p.y.is_finite()));
        assert_eq!(projected.points[0].z, Some(7.0));
    }
}
