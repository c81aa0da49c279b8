use crate::geometry::{Geometry, Point, SequenceRole};

/// Which non-finite coordinate values a [`PointFiniteFilter`] lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiniteFilterType {
    /// Only finite values.
    #[default]
    Finite,
    /// Finite values and infinities.
    FiniteAndInfinite,
    /// Finite values and NaN.
    FiniteAndNan,
}

impl FiniteFilterType {
    fn accepts(self, value: f64) -> bool {
        match self {
            Self::Finite => value.is_finite(),
            Self::FiniteAndInfinite => !value.is_nan(),
            Self::FiniteAndNan => !value.is_infinite(),
        }
    }
}

/// Drops points with non-finite coordinates.
///
/// x and y are always checked; z and m only when requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointFiniteFilter {
    kind: FiniteFilterType,
    filter_z: bool,
    filter_m: bool,
}

impl PointFiniteFilter {
    #[must_use]
    pub fn new(kind: FiniteFilterType) -> Self {
        Self {
            kind,
            filter_z: false,
            filter_m: false,
        }
    }

    /// Also checks z values.
    #[must_use]
    pub fn with_z(mut self) -> Self {
        self.filter_z = true;
        self
    }

    /// Also checks m values.
    #[must_use]
    pub fn with_m(mut self) -> Self {
        self.filter_m = true;
        self
    }

    #[must_use]
    pub fn kind(&self) -> FiniteFilterType {
        self.kind
    }

    /// Whether a single point passes.
    #[must_use]
    pub fn accepts(&self, point: &Point) -> bool {
        let check = |value: Option<f64>, enabled: bool| !enabled || value.is_none_or(|v| self.kind.accepts(v));
        self.kind.accepts(point.x)
            && self.kind.accepts(point.y)
            && check(point.z, self.filter_z)
            && check(point.m, self.filter_m)
    }

    /// Drops rejected points, then containers left degenerate: lines below
    /// two points, rings below four after re-closing. Returns `None` when
    /// nothing survives.
    #[must_use]
    pub fn apply(&self, geometry: &Geometry) -> Option<Geometry> {
        geometry.retain_sequences(&mut |points, role| {
            let mut kept: Vec<Point> = points.iter().filter(|p| self.accepts(p)).copied().collect();
            match role {
                SequenceRole::Point => (!kept.is_empty()).then_some(kept),
                SequenceRole::Line => (kept.len() >= 2).then_some(kept),
                SequenceRole::Ring => {
                    if let (Some(first), Some(last)) = (kept.first().copied(), kept.last().copied()) {
                        if kept.len() >= 3 && (first.x != last.x || first.y != last.y) {
                            kept.push(first);
                        }
                    }
                    (kept.len() >= 4).then_some(kept)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, MultiPoint, Polygon};

    #[test]
    fn filter_types() {
        let inf = Point::new(f64::INFINITY, 0.0);
        let nan = Point::new(0.0, f64::NAN);
        let ok = Point::new(1.0, 2.0);

        let finite = PointFiniteFilter::default();
        assert!(finite.accepts(&ok));
        assert!(!finite.accepts(&inf));
        assert!(!finite.accepts(&nan));

        let with_inf = PointFiniteFilter::new(FiniteFilterType::FiniteAndInfinite);
        assert!(with_inf.accepts(&inf));
        assert!(!with_inf.accepts(&nan));

        let with_nan = PointFiniteFilter::new(FiniteFilterType::FiniteAndNan);
        assert!(!with_nan.accepts(&inf));
        assert!(with_nan.accepts(&nan));
    }

    #[test]
    fn z_and_m_only_when_requested() {
        let p = Point::new_zm(1.0, 2.0, f64::NAN, f64::INFINITY);
        assert!(PointFiniteFilter::default().accepts(&p));
        assert!(!PointFiniteFilter::default().with_z().accepts(&p));
        assert!(!PointFiniteFilter::default().with_m().accepts(&p));
    }

    #[test]
    fn drops_points_and_degenerate_containers() {
        let mp = Geometry::MultiPoint(MultiPoint::new(vec![Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0)]));
        let Some(Geometry::MultiPoint(kept)) = PointFiniteFilter::default().apply(&mp) else {
            panic!("expected a multi point");
        };
        assert_eq!(kept.points, vec![Point::new(1.0, 1.0)]);

        let line = Geometry::LineString(LineString::new(vec![Point::new(0.0, 0.0), Point::new(f64::INFINITY, 1.0)]));
        assert!(PointFiniteFilter::default().apply(&line).is_none());
    }

    #[test]
    fn ring_is_reclosed() {
        let polygon = Geometry::Polygon(Polygon::new(vec![LineString::new(vec![
            Point::new(f64::NAN, f64::NAN),
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(f64::NAN, f64::NAN),
        ])]));
        let Some(Geometry::Polygon(kept)) = PointFiniteFilter::default().apply(&polygon) else {
            panic!("expected a polygon");
        };
        let ring = &kept.rings[0].points;
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last());
    }
}
