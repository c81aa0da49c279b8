pub mod collection;
pub mod envelope;
pub mod geometry_type;
pub mod line_string;
pub mod point;
pub mod polygon;
mod visit;

pub use collection::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use envelope::Envelope;
pub use geometry_type::GeometryType;
pub use line_string::{CompoundCurve, LineString};
pub use point::Point;
pub use polygon::{CurvePolygon, Polygon, PolyhedralSurface};
pub use visit::SequenceRole;

/// A simple-features geometry value.
///
/// One tagged union replaces the class hierarchy: algorithms match on the
/// variants they care about and use [`GeometryType`] for capability checks
/// (`is_curve`, `is_surface`, `is_collection`).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    /// A closed line string used as a polygon ring.
    LinearRing(LineString),
    /// A two-point line string.
    Line(LineString),
    /// Circular arcs through consecutive point triples.
    CircularString(LineString),
    CompoundCurve(CompoundCurve),
    Polygon(Polygon),
    CurvePolygon(CurvePolygon),
    /// A polygon with a single four-point ring.
    Triangle(Polygon),
    PolyhedralSurface(PolyhedralSurface),
    /// A polyhedral surface of triangles.
    Tin(PolyhedralSurface),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    /// A collection restricted to curves.
    MultiCurve(GeometryCollection),
    /// A collection restricted to surfaces.
    MultiSurface(GeometryCollection),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Returns the concrete type code of this value.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::LinearRing(_) => GeometryType::LinearRing,
            Self::Line(_) => GeometryType::Line,
            Self::CircularString(_) => GeometryType::CircularString,
            Self::CompoundCurve(_) => GeometryType::CompoundCurve,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::CurvePolygon(_) => GeometryType::CurvePolygon,
            Self::Triangle(_) => GeometryType::Triangle,
            Self::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Self::Tin(_) => GeometryType::Tin,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::MultiCurve(_) => GeometryType::MultiCurve,
            Self::MultiSurface(_) => GeometryType::MultiSurface,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns `true` if the geometry carries z values.
    #[must_use]
    pub fn has_z(&self) -> bool {
        match self {
            Self::Point(p) => p.has_z(),
            Self::LineString(l) | Self::LinearRing(l) | Self::Line(l) | Self::CircularString(l) => l.has_z,
            Self::CompoundCurve(c) => c.has_z,
            Self::Polygon(p) | Self::Triangle(p) => p.has_z,
            Self::CurvePolygon(p) => p.has_z,
            Self::PolyhedralSurface(s) | Self::Tin(s) => s.has_z,
            Self::MultiPoint(mp) => mp.has_z,
            Self::MultiLineString(ml) => ml.has_z,
            Self::MultiPolygon(mp) => mp.has_z,
            Self::MultiCurve(c) | Self::MultiSurface(c) | Self::GeometryCollection(c) => c.has_z,
        }
    }

    /// Returns `true` if the geometry carries measure values.
    #[must_use]
    pub fn has_m(&self) -> bool {
        match self {
            Self::Point(p) => p.has_m(),
            Self::LineString(l) | Self::LinearRing(l) | Self::Line(l) | Self::CircularString(l) => l.has_m,
            Self::CompoundCurve(c) => c.has_m,
            Self::Polygon(p) | Self::Triangle(p) => p.has_m,
            Self::CurvePolygon(p) => p.has_m,
            Self::PolyhedralSurface(s) | Self::Tin(s) => s.has_m,
            Self::MultiPoint(mp) => mp.has_m,
            Self::MultiLineString(ml) => ml.has_m,
            Self::MultiPolygon(mp) => mp.has_m,
            Self::MultiCurve(c) | Self::MultiSurface(c) | Self::GeometryCollection(c) => c.has_m,
        }
    }

    /// Returns `true` if the geometry holds no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let mut empty = true;
        self.for_each_point(&mut |_| empty = false);
        empty
    }

    /// Topological dimension: 0 for points, 1 for curves, 2 for surfaces.
    ///
    /// Collections report the largest dimension of their children; an
    /// empty heterogeneous collection has no dimension.
    #[must_use]
    pub fn dimension(&self) -> Option<u8> {
        match self {
            Self::GeometryCollection(c) => c.geometries.iter().filter_map(Self::dimension).max(),
            other => other.geometry_type().dimension(),
        }
    }

    /// Returns the connected point sequence of a curve.
    ///
    /// Compound curves are joined; non-curves yield an empty sequence.
    #[must_use]
    pub fn curve_points(&self) -> Vec<Point> {
        match self {
            Self::LineString(l) | Self::LinearRing(l) | Self::Line(l) | Self::CircularString(l) => l.points.clone(),
            Self::CompoundCurve(c) => c.points(),
            _ => Vec::new(),
        }
    }

    /// Returns every coordinate in traversal order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        self.for_each_point(&mut |p| points.push(*p));
        points
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<LineString> for Geometry {
    fn from(l: LineString) -> Self {
        Self::LineString(l)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(mp: MultiPoint) -> Self {
        Self::MultiPoint(mp)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(ml: MultiLineString) -> Self {
        Self::MultiLineString(ml)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(mp: MultiPolygon) -> Self {
        Self::MultiPolygon(mp)
    }
}

/// Returns `true` if any of the geometries carries z values.
#[must_use]
pub fn any_has_z(geometries: &[Geometry]) -> bool {
    geometries.iter().any(Geometry::has_z)
}

/// Returns `true` if any of the geometries carries measure values.
#[must_use]
pub fn any_has_m(geometries: &[Geometry]) -> bool {
    geometries.iter().any(Geometry::has_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_dimension_is_max_of_children() {
        let gc = Geometry::GeometryCollection(GeometryCollection::new(vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            Geometry::LineString(LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0)])),
        ]));
        assert_eq!(gc.dimension(), Some(1));
        let empty = Geometry::GeometryCollection(GeometryCollection::default());
        assert_eq!(empty.dimension(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn z_and_m_flags() {
        let geometries = vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            Geometry::Point(Point::new_z(1.0, 1.0, 3.0)),
        ];
        assert!(any_has_z(&geometries));
        assert!(!any_has_m(&geometries));
    }

    #[test]
    fn curve_points_of_compound_curve() {
        let curve = Geometry::CompoundCurve(CompoundCurve::new(vec![
            LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0)]),
            LineString::from_xy(&[(1.0, 0.0), (2.0, 0.0)]),
        ]));
        assert_eq!(curve.curve_points().len(), 3);
        assert!(Geometry::Point(Point::new(0.0, 0.0)).curve_points().is_empty());
    }
}
