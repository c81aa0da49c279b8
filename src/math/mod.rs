pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default epsilon for point in or on line tolerance.
pub const DEFAULT_LINE_EPSILON: f64 = 0.000_000_000_000_001;

/// Default epsilon for point equality.
pub const DEFAULT_EQUAL_EPSILON: f64 = 0.000_000_01;

/// Determinant threshold below which two segments count as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Web Mercator maximum latitude in degrees.
pub const WEB_MERCATOR_MAX_LAT_RANGE: f64 = 85.051_128_779_806_6;

/// Web Mercator minimum latitude in degrees.
pub const WEB_MERCATOR_MIN_LAT_RANGE: f64 = -85.051_128_779_806_59;

/// Half the Web Mercator world width in meters.
pub const WEB_MERCATOR_HALF_WORLD_WIDTH: f64 = 20_037_508.342_789_244;

/// Half the WGS84 world longitude width in degrees.
pub const WGS84_HALF_WORLD_LON_WIDTH: f64 = 180.0;

/// Half the WGS84 world latitude height in degrees.
pub const WGS84_HALF_WORLD_LAT_HEIGHT: f64 = 90.0;

/// Minimum latitude in degrees that still projects to finite meters.
pub const DEGREES_TO_METERS_MIN_LAT: f64 = -89.999_999_999_999_99;

/// Absolute north bearing in degrees.
pub const BEARING_NORTH: f64 = 0.0;

/// Absolute east bearing in degrees.
pub const BEARING_EAST: f64 = 90.0;

/// Absolute south bearing in degrees.
pub const BEARING_SOUTH: f64 = 180.0;

/// Absolute west bearing in degrees.
pub const BEARING_WEST: f64 = 270.0;

/// Radians to degrees conversion factor.
pub const RADIANS_TO_DEGREES: f64 = 180.0 / std::f64::consts::PI;

/// Degrees to radians conversion factor.
pub const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

/// Floating-point tolerances shared by the predicates and operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Slack for coordinate equality and envelope containment.
    pub equal_epsilon: f64,
    /// Slack for point-on-line and point-in-ring tests.
    pub line_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            equal_epsilon: DEFAULT_EQUAL_EPSILON,
            line_epsilon: DEFAULT_LINE_EPSILON,
        }
    }
}

/// Converts degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

/// Converts radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RADIANS_TO_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_conversion_round_trip() {
        assert_relative_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
        assert_relative_eq!(radians_to_degrees(degrees_to_radians(37.5)), 37.5);
    }

    #[test]
    fn default_tolerances_use_constants() {
        let t = Tolerances::default();
        assert_relative_eq!(t.equal_epsilon, DEFAULT_EQUAL_EPSILON);
        assert_relative_eq!(t.line_epsilon, DEFAULT_LINE_EPSILON);
    }
}
