use super::{Geometry, LineString, Point, Polygon};
use crate::error::{EnvelopeError, Result};

/// An axis-aligned bounding box with optional z and m ranges.
///
/// An `Envelope` always holds bounds with `min <= max` on every tracked
/// axis. The empty envelope is `Option<Envelope>::None`; see
/// [`BuildEnvelope`](crate::operations::query::BuildEnvelope).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    z: Option<(f64, f64)>,
    m: Option<(f64, f64)>,
}

impl Envelope {
    /// Creates a 2D envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if a minimum exceeds its maximum or a bound is NaN.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        check_axis("x", min_x, max_x)?;
        check_axis("y", min_y, max_y)?;
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            z: None,
            m: None,
        })
    }

    /// A 2D envelope from bounds known to be ordered, for fixed world
    /// extents.
    pub(crate) const fn fixed(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            z: None,
            m: None,
        }
    }

    /// Creates a zero-size envelope around a point, including its z and m.
    #[must_use]
    pub fn from_point(point: &Point) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
            z: point.z.map(|z| (z, z)),
            m: point.m.map(|m| (m, m)),
        }
    }

    /// Adds a z range.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_z > max_z` or either bound is NaN.
    pub fn with_z(mut self, min_z: f64, max_z: f64) -> Result<Self> {
        check_axis("z", min_z, max_z)?;
        self.z = Some((min_z, max_z));
        Ok(self)
    }

    /// Adds an m range.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_m > max_m` or either bound is NaN.
    pub fn with_m(mut self, min_m: f64, max_m: f64) -> Result<Self> {
        check_axis("m", min_m, max_m)?;
        self.m = Some((min_m, max_m));
        Ok(self)
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns `(min_z, max_z)` when z is tracked.
    #[must_use]
    pub fn z_bounds(&self) -> Option<(f64, f64)> {
        self.z
    }

    /// Returns `(min_m, max_m)` when m is tracked.
    #[must_use]
    pub fn m_bounds(&self) -> Option<(f64, f64)> {
        self.m
    }

    /// True if the envelope tracks a z range.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    /// True if the envelope tracks an m range.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.m.is_some()
    }

    #[must_use]
    pub fn x_range(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn y_range(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn z_range(&self) -> Option<f64> {
        self.z.map(|(min, max)| max - min)
    }

    #[must_use]
    pub fn m_range(&self) -> Option<f64> {
        self.m.map(|(min, max)| max - min)
    }

    #[must_use]
    pub fn mid_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    #[must_use]
    pub fn mid_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    /// Returns the midpoint of the x and y ranges.
    #[must_use]
    pub fn centroid(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// True if the envelope collapses to a single x/y location.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.max_y)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.min_y)
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Left side, from top-left down to bottom-left.
    #[must_use]
    pub fn left(&self) -> [Point; 2] {
        [self.top_left(), self.bottom_left()]
    }

    /// Bottom side, from bottom-left to bottom-right.
    #[must_use]
    pub fn bottom(&self) -> [Point; 2] {
        [self.bottom_left(), self.bottom_right()]
    }

    /// Right side, from bottom-right up to top-right.
    #[must_use]
    pub fn right(&self) -> [Point; 2] {
        [self.bottom_right(), self.top_right()]
    }

    /// Top side, from top-right to top-left.
    #[must_use]
    pub fn top(&self) -> [Point; 2] {
        [self.top_right(), self.top_left()]
    }

    /// Grows the envelope to include a coordinate.
    ///
    /// z and m ranges are only extended (or started) when the point carries them.
    pub fn expand_to_include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
        if let Some(z) = point.z {
            self.z = Some(widen(self.z, z, z));
        }
        if let Some(m) = point.m {
            self.m = Some(widen(self.m, m, m));
        }
    }

    /// Grows the envelope to include every coordinate of `geometry`.
    pub fn expand_geometry(&mut self, geometry: &Geometry) {
        geometry.for_each_point(&mut |p| self.expand_to_include(p));
    }

    /// Determines whether the envelopes overlap.
    ///
    /// With `allow_empty`, an overlap of zero width on an axis (touching
    /// edges or corners) still counts.
    #[must_use]
    pub fn intersects(&self, other: &Self, allow_empty: bool) -> bool {
        self.overlap(other, allow_empty).is_some()
    }

    /// Returns the overlapping region, if any.
    ///
    /// Without `allow_empty` both axes must overlap with positive width.
    #[must_use]
    pub fn overlap(&self, other: &Self, allow_empty: bool) -> Option<Self> {
        let min_x = self.min_x.max(other.min_x);
        let max_x = self.max_x.min(other.max_x);
        let min_y = self.min_y.max(other.min_y);
        let max_y = self.max_y.min(other.max_y);

        let positive = min_x < max_x && min_y < max_y;
        let touching = min_x <= max_x && min_y <= max_y;
        if !(positive || allow_empty && touching) {
            return None;
        }

        let axis_overlap = |a: Option<(f64, f64)>, b: Option<(f64, f64)>| match (a, b) {
            (Some((a_min, a_max)), Some((b_min, b_max))) => {
                let (min, max) = (a_min.max(b_min), a_max.min(b_max));
                (min <= max).then_some((min, max))
            }
            _ => None,
        };

        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            z: axis_overlap(self.z, other.z),
            m: axis_overlap(self.m, other.m),
        })
    }

    /// Returns the smallest envelope containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let axis_union = |a: Option<(f64, f64)>, b: Option<(f64, f64)>| match (a, b) {
            (Some((a_min, a_max)), b) => Some(widen(b, a_min, a_max)),
            (None, b) => b,
        };
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
            z: axis_union(self.z, other.z),
            m: axis_union(self.m, other.m),
        }
    }

    /// Inclusive containment of a point, with `epsilon` slack on every side.
    #[must_use]
    pub fn contains_point(&self, point: &Point, epsilon: f64) -> bool {
        self.contains_xy(point.x, point.y, epsilon)
    }

    /// Inclusive containment of a coordinate, with `epsilon` slack on every side.
    #[must_use]
    pub fn contains_xy(&self, x: f64, y: f64, epsilon: f64) -> bool {
        x >= self.min_x - epsilon
            && x <= self.max_x + epsilon
            && y >= self.min_y - epsilon
            && y <= self.max_y + epsilon
    }

    /// Inclusive containment of another envelope, with `epsilon` slack.
    #[must_use]
    pub fn contains_envelope(&self, other: &Self, epsilon: f64) -> bool {
        self.min_x - epsilon <= other.min_x
            && self.max_x + epsilon >= other.max_x
            && self.min_y - epsilon <= other.min_y
            && self.max_y + epsilon >= other.max_y
    }

    /// Builds a geometry covering the envelope.
    ///
    /// A point envelope yields a `Point`; otherwise a single-ring polygon
    /// bottom-left, bottom-right, top-right, top-left, bottom-left.
    #[must_use]
    pub fn build_geometry(&self) -> Geometry {
        if self.is_point() {
            return Geometry::Point(Point::new(self.min_x, self.min_y));
        }
        Geometry::Polygon(Polygon::new(vec![self.ring()]))
    }

    /// The closed counter-clockwise boundary ring starting at bottom-left.
    #[must_use]
    pub fn ring(&self) -> LineString {
        LineString::new(vec![
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
            self.bottom_left(),
        ])
    }
}

fn widen(range: Option<(f64, f64)>, min: f64, max: f64) -> (f64, f64) {
    match range {
        Some((lo, hi)) => (lo.min(min), hi.max(max)),
        None => (min, max),
    }
}

fn check_axis(axis: &'static str, min: f64, max: f64) -> Result<()> {
    if min.is_nan() || max.is_nan() {
        return Err(EnvelopeError::NonFinite { axis, min, max }.into());
    }
    if min > max {
        return Err(EnvelopeError::InvertedBounds { axis, min, max }.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn env(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Envelope {
        Envelope::new(min_x, min_y, max_x, max_y).unwrap()
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(Envelope::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Envelope::new(0.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(env(0.0, 0.0, 1.0, 1.0).with_z(2.0, 1.0).is_err());
    }

    #[test]
    fn ranges_and_centroid() {
        let e = env(0.0, 0.0, 10.0, 5.0);
        assert_relative_eq!(e.x_range(), 10.0);
        assert_relative_eq!(e.y_range(), 5.0);
        assert_eq!(e.centroid(), Point::new(5.0, 2.5));
        assert!(!e.is_point());
        assert!(env(3.0, 4.0, 3.0, 4.0).is_point());
    }

    #[test]
    fn union_contains_both() {
        let cases = [
            (env(0.0, 0.0, 1.0, 1.0), env(5.0, 5.0, 6.0, 8.0)),
            (env(-3.0, -2.0, 1.0, 1.0), env(0.0, 0.0, 0.5, 0.5)),
            (env(2.0, 2.0, 2.0, 2.0), env(-1.0, 4.0, 0.0, 9.0)),
        ];
        for (a, b) in cases {
            let u = a.union(&b);
            assert!(u.contains_envelope(&a, 0.0));
            assert!(u.contains_envelope(&b, 0.0));
        }
    }

    #[test]
    fn union_keeps_z_from_either_side() {
        let a = env(0.0, 0.0, 1.0, 1.0).with_z(1.0, 2.0).unwrap();
        let b = env(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.union(&b).z_bounds(), Some((1.0, 2.0)));
        assert_eq!(b.union(&a).z_bounds(), Some((1.0, 2.0)));
    }

    #[test]
    fn touching_envelopes_need_allow_empty() {
        let a = env(0.0, 0.0, 1.0, 1.0);
        let b = env(1.0, 0.0, 2.0, 1.0);
        assert!(!a.intersects(&b, false));
        assert!(a.intersects(&b, true));
        let overlap = a.overlap(&b, true).unwrap();
        assert_relative_eq!(overlap.x_range(), 0.0);
    }

    #[test]
    fn overlap_of_crossing_boxes() {
        let a = env(0.0, 0.0, 4.0, 4.0);
        let b = env(2.0, -1.0, 6.0, 3.0);
        assert_eq!(a.overlap(&b, false), Some(env(2.0, 0.0, 4.0, 3.0)));
        assert!(a.overlap(&env(5.0, 5.0, 6.0, 6.0), true).is_none());
    }

    #[test]
    fn contains_point_is_inclusive_with_epsilon() {
        let e = env(0.0, 0.0, 10.0, 10.0);
        assert!(e.contains_point(&Point::new(10.0, 0.0), 0.0));
        assert!(!e.contains_point(&Point::new(10.0 + 1e-9, 0.0), 0.0));
        assert!(e.contains_point(&Point::new(10.0 + 1e-9, 0.0), 1e-8));
    }

    #[test]
    fn build_geometry_rectangle_order() {
        let Geometry::Polygon(poly) = env(0.0, 0.0, 2.0, 1.0).build_geometry() else {
            panic!("expected polygon");
        };
        let xy: Vec<(f64, f64)> = poly.rings[0].points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    }

    #[test]
    fn build_geometry_point() {
        assert_eq!(
            env(1.0, 2.0, 1.0, 2.0).build_geometry(),
            Geometry::Point(Point::new(1.0, 2.0))
        );
    }

    #[test]
    fn expand_tracks_z_only_when_present() {
        let mut e = Envelope::from_point(&Point::new(0.0, 0.0));
        e.expand_to_include(&Point::new(2.0, -1.0));
        assert!(!e.is_3d());
        e.expand_to_include(&Point::new_z(1.0, 1.0, 7.0));
        assert_eq!(e.z_bounds(), Some((7.0, 7.0)));
        assert_eq!((e.min_x(), e.max_x(), e.min_y(), e.max_y()), (0.0, 2.0, -1.0, 1.0));
    }
}
