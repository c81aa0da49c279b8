use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A single coordinate with optional elevation (`z`) and measure (`m`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Point {
    /// Creates a 2D point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Creates a point with a z value.
    #[must_use]
    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Creates a point with a measure value.
    #[must_use]
    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// Creates a point with both z and m values.
    #[must_use]
    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Parses a point from decimal text.
    ///
    /// The conversion is correctly rounded, so `"0.1"` yields the nearest
    /// `f64` rather than the result of any intermediate arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidCoordinate` if either value is not a
    /// decimal number.
    pub fn parse_xy(x: &str, y: &str) -> Result<Self> {
        Ok(Self::new(parse_ordinate(x)?, parse_ordinate(y)?))
    }

    /// Returns `true` if the point carries a z value.
    #[must_use]
    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// Returns `true` if the point carries a measure value.
    #[must_use]
    pub fn has_m(&self) -> bool {
        self.m.is_some()
    }

    /// Returns a copy with new x/y values, keeping z and m.
    #[must_use]
    pub fn with_xy(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Drops z and m, returning a planar copy.
    #[must_use]
    pub fn to_xy(&self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Returns the planar part as an `nalgebra` point.
    #[must_use]
    pub fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

fn parse_ordinate(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| {
            GeometryError::InvalidCoordinate {
                value: text.to_owned(),
            }
            .into()
        })
}
