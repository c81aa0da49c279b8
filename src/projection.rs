//! World extents of the geographic projections the transforms target.

use crate::geometry::Envelope;
use crate::math::{
    DEGREES_TO_METERS_MIN_LAT, WEB_MERCATOR_HALF_WORLD_WIDTH, WEB_MERCATOR_MAX_LAT_RANGE, WEB_MERCATOR_MIN_LAT_RANGE,
    WGS84_HALF_WORLD_LAT_HEIGHT, WGS84_HALF_WORLD_LON_WIDTH,
};

/// A coordinate system with a known world envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// WGS84 degrees, the full globe.
    Wgs84,
    /// WGS84 degrees limited to latitudes that project to finite meters.
    Wgs84Transformable,
    /// Web Mercator meters.
    WebMercator,
    /// WGS84 degrees limited to the Web Mercator latitude range.
    Wgs84WithWebMercator,
}

impl Projection {
    /// The world envelope.
    #[must_use]
    pub fn envelope(self) -> Envelope {
        let (min_y, max_y) = match self {
            Self::Wgs84 => (-WGS84_HALF_WORLD_LAT_HEIGHT, WGS84_HALF_WORLD_LAT_HEIGHT),
            Self::Wgs84Transformable => (DEGREES_TO_METERS_MIN_LAT, WGS84_HALF_WORLD_LAT_HEIGHT),
            Self::WebMercator => (-WEB_MERCATOR_HALF_WORLD_WIDTH, WEB_MERCATOR_HALF_WORLD_WIDTH),
            Self::Wgs84WithWebMercator => (WEB_MERCATOR_MIN_LAT_RANGE, WEB_MERCATOR_MAX_LAT_RANGE),
        };
        let max_x = self.max_x();
        Envelope::fixed(-max_x, min_y, max_x, max_y)
    }

    /// Half the world width along x.
    #[must_use]
    pub fn max_x(self) -> f64 {
        match self {
            Self::WebMercator => WEB_MERCATOR_HALF_WORLD_WIDTH,
            Self::Wgs84 | Self::Wgs84Transformable | Self::Wgs84WithWebMercator => WGS84_HALF_WORLD_LON_WIDTH,
        }
    }
}
