use super::Point;

/// An ordered sequence of points.
///
/// Backs the `LineString`, `LinearRing`, `Line` and `CircularString`
/// variants of [`Geometry`](super::Geometry); the variant decides how the
/// sequence is interpreted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    pub has_z: bool,
    pub has_m: bool,
    pub points: Vec<Point>,
}

impl LineString {
    /// Creates a line string, taking the z/m flags from the first point.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let (has_z, has_m) = points.first().map_or((false, false), |p| (p.has_z(), p.has_m()));
        Self {
            has_z,
            has_m,
            points,
        }
    }

    /// Creates a 2D line string from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Creates an empty line string with the given dimensions.
    #[must_use]
    pub fn empty(has_z: bool, has_m: bool) -> Self {
        Self {
            has_z,
            has_m,
            points: Vec::new(),
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the first and last points are identical.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.x == last.x && first.y == last.y,
            _ => false,
        }
    }

    /// Returns a copy holding `points` and the same dimensions.
    #[must_use]
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            has_z: self.has_z,
            has_m: self.has_m,
            points,
        }
    }
}

/// A curve made of connected line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundCurve {
    pub has_z: bool,
    pub has_m: bool,
    pub line_strings: Vec<LineString>,
}

impl CompoundCurve {
    /// Creates a compound curve, taking the z/m flags from the children.
    #[must_use]
    pub fn new(line_strings: Vec<LineString>) -> Self {
        let has_z = line_strings.iter().any(|l| l.has_z);
        let has_m = line_strings.iter().any(|l| l.has_m);
        Self {
            has_z,
            has_m,
            line_strings,
        }
    }

    /// Returns the concatenated points, dropping the duplicated joint
    /// between consecutive children.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::new();
        for line in &self.line_strings {
            for p in &line.points {
                if points.last() != Some(p) {
                    points.push(*p);
                }
            }
        }
        points
    }

    /// Returns `true` if the joined point sequence is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        LineString::new(self.points()).is_closed()
    }
}
