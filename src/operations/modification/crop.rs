use tracing::{debug, trace};

use super::clip::{clip_polygon, clip_ring, clip_runs, RingClip};
use crate::geometry::{
    CompoundCurve, CurvePolygon, Envelope, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, PolyhedralSurface,
};
use crate::math::Tolerances;
use crate::operations::query::BuildEnvelope;
use crate::projection::Projection;

/// Crops a geometry to an envelope.
///
/// Points outside are dropped and lines are cut at the boundary, possibly
/// into several parts. Polygons are clipped and may split into several
/// polygons. A split widens the result type (a line string becomes a multi
/// line string, a polygon a multi polygon). A linear ring cut by the
/// boundary opens into line strings.
#[derive(Debug, Clone, Copy)]
pub struct Crop {
    envelope: Envelope,
    tolerances: Tolerances,
}

impl Crop {
    /// Creates a new `Crop` operation.
    #[must_use]
    pub fn new(envelope: Envelope) -> Self {
        Self {
            envelope,
            tolerances: Tolerances::default(),
        }
    }

    /// Crops to the full Web Mercator world.
    #[must_use]
    pub fn web_mercator() -> Self {
        Self::new(Projection::WebMercator.envelope())
    }

    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    #[must_use]
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Executes the crop. Returns `None` when nothing is left.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Option<Geometry> {
        let bounds = BuildEnvelope::new().execute(geometry)?;
        if self.envelope.contains_envelope(&bounds, 0.0) {
            trace!("geometry inside crop envelope");
            return Some(geometry.clone());
        }
        if !self.envelope.intersects(&bounds, true) {
            trace!("geometry outside crop envelope");
            return None;
        }
        self.crop(geometry)
    }

    fn crop(&self, geometry: &Geometry) -> Option<Geometry> {
        match geometry {
            Geometry::Point(p) => self.keep(p).then_some(Geometry::Point(*p)),
            Geometry::MultiPoint(mp) => {
                let points: Vec<Point> = mp.points.iter().filter(|p| self.keep(p)).copied().collect();
                (!points.is_empty()).then(|| {
                    Geometry::MultiPoint(MultiPoint {
                        has_z: mp.has_z,
                        has_m: mp.has_m,
                        points,
                    })
                })
            }
            Geometry::LineString(l) => self.crop_line(l, Geometry::LineString),
            Geometry::LinearRing(l) => self.crop_ring(l),
            Geometry::Line(l) => self.crop_line(l, Geometry::Line),
            Geometry::CircularString(l) => self.crop_line(l, Geometry::CircularString),
            Geometry::CompoundCurve(c) => {
                let joined = LineString {
                    has_z: c.has_z,
                    has_m: c.has_m,
                    points: c.points(),
                };
                self.crop_line(&joined, |line| {
                    Geometry::CompoundCurve(CompoundCurve {
                        has_z: line.has_z,
                        has_m: line.has_m,
                        line_strings: vec![line],
                    })
                })
            }
            Geometry::MultiLineString(ml) => {
                let line_strings: Vec<LineString> = ml.line_strings.iter().flat_map(|l| self.line_parts(l)).collect();
                (!line_strings.is_empty()).then(|| {
                    Geometry::MultiLineString(MultiLineString {
                        has_z: ml.has_z,
                        has_m: ml.has_m,
                        line_strings,
                    })
                })
            }
            Geometry::Polygon(p) => widen_polygons(p, self.polygon_parts(p)),
            Geometry::Triangle(p) => {
                let mut pieces = self.polygon_parts(p);
                if pieces.len() == 1 && is_triangle(&pieces[0]) {
                    return pieces.pop().map(Geometry::Triangle);
                }
                widen_polygons(p, pieces)
            }
            Geometry::CurvePolygon(p) => self.crop_curve_polygon(p),
            Geometry::PolyhedralSurface(s) => {
                let patches = self.surface_parts(s);
                (!patches.is_empty()).then(|| Geometry::PolyhedralSurface(surface_like(s, patches)))
            }
            Geometry::Tin(s) => {
                let patches = self.surface_parts(s);
                if patches.is_empty() {
                    return None;
                }
                let surface = surface_like(s, patches);
                if surface.polygons.iter().all(is_triangle) {
                    Some(Geometry::Tin(surface))
                } else {
                    debug!("cropped TIN patch is no longer a triangle, widening to polyhedral surface");
                    Some(Geometry::PolyhedralSurface(surface))
                }
            }
            Geometry::MultiPolygon(mp) => {
                let polygons: Vec<Polygon> = mp.polygons.iter().flat_map(|p| self.polygon_parts(p)).collect();
                (!polygons.is_empty()).then(|| {
                    Geometry::MultiPolygon(MultiPolygon {
                        has_z: mp.has_z,
                        has_m: mp.has_m,
                        polygons,
                    })
                })
            }
            Geometry::MultiCurve(c) => self
                .crop_children(c, flatten_curves)
                .map(Geometry::MultiCurve),
            Geometry::MultiSurface(c) => self
                .crop_children(c, flatten_surfaces)
                .map(Geometry::MultiSurface),
            Geometry::GeometryCollection(c) => self
                .crop_children(c, |g| vec![g])
                .map(Geometry::GeometryCollection),
        }
    }

    fn keep(&self, point: &Point) -> bool {
        self.envelope.contains_point(point, 0.0)
    }

    fn line_parts(&self, line: &LineString) -> Vec<LineString> {
        clip_runs(&self.envelope, &line.points)
            .into_iter()
            .map(|points| LineString {
                has_z: line.has_z,
                has_m: line.has_m,
                points,
            })
            .collect()
    }

    /// One part keeps the variant built by `single`; several parts become
    /// a multi line string.
    fn crop_line(&self, line: &LineString, single: impl FnOnce(LineString) -> Geometry) -> Option<Geometry> {
        widen_lines(line, self.line_parts(line), single)
    }

    /// A ring left whole stays a linear ring. A ring cut by the boundary
    /// opens into line strings, one per connected piece inside.
    fn crop_ring(&self, ring: &LineString) -> Option<Geometry> {
        let like = |points| LineString {
            has_z: ring.has_z,
            has_m: ring.has_m,
            points,
        };
        match clip_ring(&self.envelope, &ring.points) {
            RingClip::Inside(points) => Some(Geometry::LinearRing(like(points))),
            RingClip::Crossing(runs) => widen_lines(ring, runs.into_iter().map(like).collect(), Geometry::LineString),
            RingClip::Apart => None,
        }
    }

    fn polygon_parts(&self, polygon: &Polygon) -> Vec<Polygon> {
        clip_polygon(&self.envelope, polygon, self.tolerances.equal_epsilon)
    }

    /// Curve polygon rings are flattened to line strings before clipping.
    fn crop_curve_polygon(&self, polygon: &CurvePolygon) -> Option<Geometry> {
        let flat = Polygon {
            has_z: polygon.has_z,
            has_m: polygon.has_m,
            rings: polygon
                .ring_points()
                .into_iter()
                .map(|points| LineString {
                    has_z: polygon.has_z,
                    has_m: polygon.has_m,
                    points,
                })
                .collect(),
        };
        let to_curve = |p: Polygon| CurvePolygon {
            has_z: p.has_z,
            has_m: p.has_m,
            rings: p.rings.into_iter().map(Geometry::LineString).collect(),
        };
        let mut pieces = self.polygon_parts(&flat);
        match pieces.len() {
            0 => None,
            1 => pieces.pop().map(|p| Geometry::CurvePolygon(to_curve(p))),
            n => {
                debug!(pieces = n, "cropped curve polygon split, widening to multi surface");
                Some(Geometry::MultiSurface(GeometryCollection {
                    has_z: polygon.has_z,
                    has_m: polygon.has_m,
                    geometries: pieces.into_iter().map(|p| Geometry::CurvePolygon(to_curve(p))).collect(),
                }))
            }
        }
    }

    fn surface_parts(&self, surface: &PolyhedralSurface) -> Vec<Polygon> {
        surface.polygons.iter().flat_map(|p| self.polygon_parts(p)).collect()
    }

    /// Crops each child, splices the results through `flatten` and drops
    /// empties. `None` when no child survives.
    fn crop_children(
        &self,
        collection: &GeometryCollection,
        flatten: impl Fn(Geometry) -> Vec<Geometry>,
    ) -> Option<GeometryCollection> {
        let geometries: Vec<Geometry> = collection
            .geometries
            .iter()
            .filter_map(|g| self.execute(g))
            .flat_map(flatten)
            .collect();
        (!geometries.is_empty()).then(|| GeometryCollection {
            has_z: collection.has_z,
            has_m: collection.has_m,
            geometries,
        })
    }
}

fn widen_lines(
    line: &LineString,
    mut parts: Vec<LineString>,
    single: impl FnOnce(LineString) -> Geometry,
) -> Option<Geometry> {
    match parts.len() {
        0 => None,
        1 => parts.pop().map(single),
        n => {
            trace!(parts = n, "cropped line split");
            Some(Geometry::MultiLineString(MultiLineString {
                has_z: line.has_z,
                has_m: line.has_m,
                line_strings: parts,
            }))
        }
    }
}

/// One piece stays a polygon; several become a multi polygon.
fn widen_polygons(polygon: &Polygon, mut pieces: Vec<Polygon>) -> Option<Geometry> {
    match pieces.len() {
        0 => None,
        1 => pieces.pop().map(Geometry::Polygon),
        n => {
            debug!(pieces = n, "cropped polygon split, widening to multi polygon");
            Some(Geometry::MultiPolygon(MultiPolygon {
                has_z: polygon.has_z,
                has_m: polygon.has_m,
                polygons: pieces,
            }))
        }
    }
}

fn is_triangle(polygon: &Polygon) -> bool {
    polygon.rings.len() == 1 && polygon.rings[0].points.len() == 4
}

fn surface_like(surface: &PolyhedralSurface, polygons: Vec<Polygon>) -> PolyhedralSurface {
    PolyhedralSurface {
        has_z: surface.has_z,
        has_m: surface.has_m,
        polygons,
    }
}

/// Keeps a multi curve homogeneous: split lines become separate members.
fn flatten_curves(geometry: Geometry) -> Vec<Geometry> {
    match geometry {
        Geometry::MultiLineString(ml) => ml.line_strings.into_iter().map(Geometry::LineString).collect(),
        other => vec![other],
    }
}

/// Keeps a multi surface homogeneous: split polygons become separate members.
fn flatten_surfaces(geometry: Geometry) -> Vec<Geometry> {
    match geometry {
        Geometry::MultiPolygon(mp) => mp.polygons.into_iter().map(Geometry::Polygon).collect(),
        Geometry::MultiSurface(c) => c.geometries,
        other => vec![other],
    }
}
