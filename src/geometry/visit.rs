//! Generic traversal over the geometry tree.
//!
//! Point-wise transforms (projection, bounding, wrapping),
//! sequence-wise transforms (minimizing) and pruning passes (simplify,
//! finite filter) share these folds.

use super::{
    CompoundCurve, CurvePolygon, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, PolyhedralSurface,
};

/// Role of a connected point sequence inside a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRole {
    /// A single point or a multi point member.
    Point,
    /// An open or closed curve.
    Line,
    /// A polygon ring or a linear ring.
    Ring,
}

impl Geometry {
    /// Calls `f` for every coordinate, depth first.
    pub fn for_each_point(&self, f: &mut impl FnMut(&Point)) {
        match self {
            Self::Point(p) => f(p),
            Self::LineString(l) | Self::LinearRing(l) | Self::Line(l) | Self::CircularString(l) => {
                l.points.iter().for_each(&mut *f);
            }
            Self::CompoundCurve(c) => {
                for line in &c.line_strings {
                    line.points.iter().for_each(&mut *f);
                }
            }
            Self::Polygon(p) | Self::Triangle(p) => polygon_points(p, f),
            Self::CurvePolygon(p) => {
                for ring in &p.rings {
                    ring.for_each_point(f);
                }
            }
            Self::PolyhedralSurface(s) | Self::Tin(s) => {
                for polygon in &s.polygons {
                    polygon_points(polygon, f);
                }
            }
            Self::MultiPoint(mp) => mp.points.iter().for_each(&mut *f),
            Self::MultiLineString(ml) => {
                for line in &ml.line_strings {
                    line.points.iter().for_each(&mut *f);
                }
            }
            Self::MultiPolygon(mp) => {
                for polygon in &mp.polygons {
                    polygon_points(polygon, f);
                }
            }
            Self::MultiCurve(c) | Self::MultiSurface(c) | Self::GeometryCollection(c) => {
                for child in &c.geometries {
                    child.for_each_point(f);
                }
            }
        }
    }

    /// Rebuilds the geometry with every coordinate replaced by `f(point)`.
    ///
    /// The shape (variant, nesting, point counts) is preserved.
    #[must_use]
    pub fn map_points(&self, f: &mut impl FnMut(&Point) -> Point) -> Self {
        self.map_sequences(&mut |points: &[Point]| points.iter().map(&mut *f).collect())
    }

    /// Rebuilds the geometry with every connected point sequence replaced by
    /// `f(sequence)`.
    ///
    /// A single point and each member of a multi point count as a
    /// one-point sequence.
    #[must_use]
    pub fn map_sequences(&self, f: &mut impl FnMut(&[Point]) -> Vec<Point>) -> Self {
        match self {
            Self::Point(p) => Self::Point(map_single(p, f)),
            Self::LineString(l) => Self::LineString(map_line(l, f)),
            Self::LinearRing(l) => Self::LinearRing(map_line(l, f)),
            Self::Line(l) => Self::Line(map_line(l, f)),
            Self::CircularString(l) => Self::CircularString(map_line(l, f)),
            Self::CompoundCurve(c) => Self::CompoundCurve(CompoundCurve {
                has_z: c.has_z,
                has_m: c.has_m,
                line_strings: c.line_strings.iter().map(|l| map_line(l, f)).collect(),
            }),
            Self::Polygon(p) => Self::Polygon(map_polygon(p, f)),
            Self::Triangle(p) => Self::Triangle(map_polygon(p, f)),
            Self::CurvePolygon(p) => Self::CurvePolygon(CurvePolygon {
                has_z: p.has_z,
                has_m: p.has_m,
                rings: p.rings.iter().map(|r| r.map_sequences(f)).collect(),
            }),
            Self::PolyhedralSurface(s) => Self::PolyhedralSurface(map_surface(s, f)),
            Self::Tin(s) => Self::Tin(map_surface(s, f)),
            Self::MultiPoint(mp) => Self::MultiPoint(MultiPoint {
                has_z: mp.has_z,
                has_m: mp.has_m,
                points: mp.points.iter().map(|p| map_single(p, f)).collect(),
            }),
            Self::MultiLineString(ml) => Self::MultiLineString(MultiLineString {
                has_z: ml.has_z,
                has_m: ml.has_m,
                line_strings: ml.line_strings.iter().map(|l| map_line(l, f)).collect(),
            }),
            Self::MultiPolygon(mp) => Self::MultiPolygon(MultiPolygon {
                has_z: mp.has_z,
                has_m: mp.has_m,
                polygons: mp.polygons.iter().map(|p| map_polygon(p, f)).collect(),
            }),
            Self::MultiCurve(c) => Self::MultiCurve(map_collection(c, f)),
            Self::MultiSurface(c) => Self::MultiSurface(map_collection(c, f)),
            Self::GeometryCollection(c) => Self::GeometryCollection(map_collection(c, f)),
        }
    }

    /// Rebuilds the geometry from `f(sequence, role)`, dropping every
    /// sequence for which `f` returns `None`.
    ///
    /// Containers left without content are dropped too: a polygon without
    /// its exterior, a compound curve, surface or collection without
    /// members. Returns `None` when nothing survives.
    #[must_use]
    pub fn retain_sequences(
        &self,
        f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>,
    ) -> Option<Self> {
        match self {
            Self::Point(p) => retain_single(p, f).map(Self::Point),
            Self::LineString(l) => retain_line(l, SequenceRole::Line, f).map(Self::LineString),
            Self::Line(l) => retain_line(l, SequenceRole::Line, f).map(Self::Line),
            Self::CircularString(l) => retain_line(l, SequenceRole::Line, f).map(Self::CircularString),
            Self::LinearRing(l) => retain_line(l, SequenceRole::Ring, f).map(Self::LinearRing),
            Self::CompoundCurve(c) => {
                let line_strings = retain_all(&c.line_strings, |l| retain_line(l, SequenceRole::Line, f))?;
                Some(Self::CompoundCurve(CompoundCurve {
                    has_z: c.has_z,
                    has_m: c.has_m,
                    line_strings,
                }))
            }
            Self::Polygon(p) => retain_polygon(p, f).map(Self::Polygon),
            Self::Triangle(p) => retain_polygon(p, f).map(Self::Triangle),
            Self::CurvePolygon(p) => {
                let (exterior, holes) = p.rings.split_first()?;
                let mut rings = vec![retain_curve_ring(exterior, f)?];
                rings.extend(holes.iter().filter_map(|r| retain_curve_ring(r, f)));
                Some(Self::CurvePolygon(CurvePolygon {
                    has_z: p.has_z,
                    has_m: p.has_m,
                    rings,
                }))
            }
            Self::PolyhedralSurface(s) => retain_surface(s, f).map(Self::PolyhedralSurface),
            Self::Tin(s) => retain_surface(s, f).map(Self::Tin),
            Self::MultiPoint(mp) => {
                let points = retain_all(&mp.points, |p| retain_single(p, f))?;
                Some(Self::MultiPoint(MultiPoint {
                    has_z: mp.has_z,
                    has_m: mp.has_m,
                    points,
                }))
            }
            Self::MultiLineString(ml) => {
                let line_strings = retain_all(&ml.line_strings, |l| retain_line(l, SequenceRole::Line, f))?;
                Some(Self::MultiLineString(MultiLineString {
                    has_z: ml.has_z,
                    has_m: ml.has_m,
                    line_strings,
                }))
            }
            Self::MultiPolygon(mp) => {
                let polygons = retain_all(&mp.polygons, |p| retain_polygon(p, f))?;
                Some(Self::MultiPolygon(MultiPolygon {
                    has_z: mp.has_z,
                    has_m: mp.has_m,
                    polygons,
                }))
            }
            Self::MultiCurve(c) => retain_collection(c, f).map(Self::MultiCurve),
            Self::MultiSurface(c) => retain_collection(c, f).map(Self::MultiSurface),
            Self::GeometryCollection(c) => retain_collection(c, f).map(Self::GeometryCollection),
        }
    }
}

fn polygon_points(polygon: &Polygon, f: &mut impl FnMut(&Point)) {
    for ring in &polygon.rings {
        ring.points.iter().for_each(&mut *f);
    }
}

fn map_single(p: &Point, f: &mut impl FnMut(&[Point]) -> Vec<Point>) -> Point {
    f(std::slice::from_ref(p)).first().copied().unwrap_or(*p)
}

fn map_line(line: &LineString, f: &mut impl FnMut(&[Point]) -> Vec<Point>) -> LineString {
    line.with_points(f(&line.points))
}

fn map_polygon(polygon: &Polygon, f: &mut impl FnMut(&[Point]) -> Vec<Point>) -> Polygon {
    Polygon {
        has_z: polygon.has_z,
        has_m: polygon.has_m,
        rings: polygon.rings.iter().map(|r| map_line(r, f)).collect(),
    }
}

fn map_surface(surface: &PolyhedralSurface, f: &mut impl FnMut(&[Point]) -> Vec<Point>) -> PolyhedralSurface {
    PolyhedralSurface {
        has_z: surface.has_z,
        has_m: surface.has_m,
        polygons: surface.polygons.iter().map(|p| map_polygon(p, f)).collect(),
    }
}

fn map_collection(
    collection: &GeometryCollection,
    f: &mut impl FnMut(&[Point]) -> Vec<Point>,
) -> GeometryCollection {
    GeometryCollection {
        has_z: collection.has_z,
        has_m: collection.has_m,
        geometries: collection.geometries.iter().map(|g| g.map_sequences(f)).collect(),
    }
}

/// `None` when no item survives.
fn retain_all<T, U>(items: &[T], mut keep: impl FnMut(&T) -> Option<U>) -> Option<Vec<U>> {
    let kept: Vec<U> = items.iter().filter_map(&mut keep).collect();
    (!kept.is_empty()).then_some(kept)
}

fn retain_single(p: &Point, f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>) -> Option<Point> {
    f(std::slice::from_ref(p), SequenceRole::Point)?.first().copied()
}

fn retain_line(
    line: &LineString,
    role: SequenceRole,
    f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>,
) -> Option<LineString> {
    f(&line.points, role).map(|points| line.with_points(points))
}

fn retain_polygon(
    polygon: &Polygon,
    f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>,
) -> Option<Polygon> {
    let (exterior, holes) = polygon.rings.split_first()?;
    let mut rings = vec![retain_line(exterior, SequenceRole::Ring, f)?];
    rings.extend(holes.iter().filter_map(|r| retain_line(r, SequenceRole::Ring, f)));
    Some(Polygon {
        has_z: polygon.has_z,
        has_m: polygon.has_m,
        rings,
    })
}

/// Curve polygon rings are whole curves; a compound ring is handled as
/// one joined sequence.
fn retain_curve_ring(
    ring: &Geometry,
    f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>,
) -> Option<Geometry> {
    match ring {
        Geometry::LineString(l) => retain_line(l, SequenceRole::Ring, f).map(Geometry::LineString),
        Geometry::LinearRing(l) => retain_line(l, SequenceRole::Ring, f).map(Geometry::LinearRing),
        Geometry::CircularString(l) => retain_line(l, SequenceRole::Ring, f).map(Geometry::CircularString),
        Geometry::CompoundCurve(c) => {
            let points = f(&c.points(), SequenceRole::Ring)?;
            Some(Geometry::CompoundCurve(CompoundCurve {
                has_z: c.has_z,
                has_m: c.has_m,
                line_strings: vec![LineString {
                    has_z: c.has_z,
                    has_m: c.has_m,
                    points,
                }],
            }))
        }
        other => other.retain_sequences(f),
    }
}

fn retain_surface(
    surface: &PolyhedralSurface,
    f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>,
) -> Option<PolyhedralSurface> {
    let polygons = retain_all(&surface.polygons, |p| retain_polygon(p, f))?;
    Some(PolyhedralSurface {
        has_z: surface.has_z,
        has_m: surface.has_m,
        polygons,
    })
}

fn retain_collection(
    collection: &GeometryCollection,
    f: &mut impl FnMut(&[Point], SequenceRole) -> Option<Vec<Point>>,
) -> Option<GeometryCollection> {
    let geometries = retain_all(&collection.geometries, |g| g.retain_sequences(f))?;
    Some(GeometryCollection {
        has_z: collection.has_z,
        has_m: collection.has_m,
        geometries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_points_preserves_shape() {
        let poly = Geometry::Polygon(Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]));
        let shifted = poly.map_points(&mut |p| p.with_xy(p.x + 10.0, p.y));
        let Geometry::Polygon(shifted) = shifted else {
            panic!("variant changed");
        };
        assert_eq!(shifted.rings[0].points.len(), 4);
        assert_eq!(shifted.rings[0].points[1], Point::new(11.0, 0.0));
    }

    #[test]
    fn map_sequences_sees_each_ring() {
        let poly = Geometry::Polygon(Polygon::new(vec![
            LineString::from_xy(&[(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 0.0)]),
            LineString::from_xy(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]),
        ]));
        let mut lengths = Vec::new();
        let _ = poly.map_sequences(&mut |seq| {
            lengths.push(seq.len());
            seq.to_vec()
        });
        assert_eq!(lengths, vec![4, 4]);
    }

    #[test]
    fn retain_sequences_prunes_empty_containers() {
        let gc = Geometry::GeometryCollection(GeometryCollection::new(vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            Geometry::Polygon(Polygon::new(vec![
                LineString::from_xy(&[(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 0.0)]),
                LineString::from_xy(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]),
            ])),
        ]));
        let mut roles = Vec::new();
        let kept = gc.retain_sequences(&mut |seq, role| {
            roles.push(role);
            (seq[0].x == 0.0).then(|| seq.to_vec())
        });
        assert_eq!(roles, vec![SequenceRole::Point, SequenceRole::Ring, SequenceRole::Ring]);
        let Some(Geometry::GeometryCollection(kept)) = kept else {
            panic!("expected a collection");
        };
        let Geometry::Polygon(polygon) = &kept.geometries[1] else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.rings.len(), 1);

        let dropped = gc.retain_sequences(&mut |seq, _| (seq[0].x > 100.0).then(|| seq.to_vec()));
        assert!(dropped.is_none());
    }

    #[test]
    fn for_each_point_visits_nested_collections() {
        let gc = Geometry::GeometryCollection(GeometryCollection::new(vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            Geometry::MultiPoint(MultiPoint::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)])),
        ]));
        assert_eq!(gc.points().len(), 3);
    }
}
