//! Longitude wrapping around the antimeridian.

use crate::geometry::{Geometry, Point};

/// Shifts x values by whole world widths so consecutive points of each
/// connected sequence stay as close as possible.
///
/// A line crossing the antimeridian comes out continuous, extending past
/// `max_x` instead of jumping across the world.
#[derive(Debug, Clone, Copy)]
pub struct Minimize {
    max_x: f64,
}

impl Minimize {
    /// Creates a new `Minimize` transform for a world spanning
    /// `[-max_x, max_x]`.
    #[must_use]
    pub fn new(max_x: f64) -> Self {
        Self { max_x }
    }

    /// Minimizes a point sequence. The first point is kept as is.
    #[must_use]
    pub fn points(&self, points: &[Point]) -> Vec<Point> {
        let width = 2.0 * self.max_x;
        let mut minimized: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            let x = match minimized.last() {
                Some(previous) => [p.x, p.x - width, p.x + width]
                    .into_iter()
                    .fold(p.x, |best, x| {
                        if (x - previous.x).abs() < (best - previous.x).abs() {
                            x
                        } else {
                            best
                        }
                    }),
                None => p.x,
            };
            minimized.push(p.with_xy(x, p.y));
        }
        minimized
    }

    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Geometry {
        geometry.map_sequences(&mut |points| self.points(points))
    }
}

/// Wraps x values into `[-max_x, max_x)`.
#[derive(Debug, Clone, Copy)]
pub struct Normalize {
    max_x: f64,
}

impl Normalize {
    /// Creates a new `Normalize` transform for a world spanning
    /// `[-max_x, max_x)`.
    #[must_use]
    pub fn new(max_x: f64) -> Self {
        Self { max_x }
    }

    /// Wraps one x value. Non-positive world widths leave it unchanged.
    #[must_use]
    pub fn x(&self, x: f64) -> f64 {
        if self.max_x <= 0.0 || (-self.max_x..self.max_x).contains(&x) {
            return x;
        }
        (x + self.max_x).rem_euclid(2.0 * self.max_x) - self.max_x
    }

    #[must_use]
    pub fn point(&self, point: &Point) -> Point {
        point.with_xy(self.x(point.x), point.y)
    }

    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(&mut |p| self.point(p))
    }
}
