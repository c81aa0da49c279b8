//! Centroid engines.
//!
//! A geometry's centroid is computed from its highest-dimension parts
//! only: points for dimension 0, curves for 1, surfaces for 2. Mixed
//! collections therefore ignore lower-dimension children.

mod curve;
mod degrees;
mod point;
mod surface;

pub use curve::CurveCentroid;
pub use degrees::DegreesCentroid;
pub use point::PointCentroid;
pub use surface::SurfaceCentroid;

use crate::geometry::{Geometry, Point};
use crate::math::Tolerances;

/// Planar centroid of any geometry, dispatched on its dimension.
#[derive(Debug, Default, Clone, Copy)]
pub struct Centroid {
    tolerances: Tolerances,
}

impl Centroid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the query. Returns `None` for a geometry without
    /// coordinates of its own dimension.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Option<Point> {
        match geometry.dimension()? {
            0 => {
                let mut engine = PointCentroid::new();
                engine.add(geometry);
                engine.centroid()
            }
            1 => {
                let mut engine = CurveCentroid::new();
                engine.add(geometry);
                engine.centroid()
            }
            _ => {
                let mut engine = SurfaceCentroid::new().with_tolerances(self.tolerances);
                engine.add(geometry);
                engine.centroid()
            }
        }
    }
}

/// Calls `f` with the point sequence of every dimension-1 part.
fn for_each_curve(geometry: &Geometry, f: &mut impl FnMut(&[Point])) {
    match geometry {
        Geometry::LineString(l) | Geometry::LinearRing(l) | Geometry::Line(l) | Geometry::CircularString(l) => {
            f(&l.points);
        }
        Geometry::CompoundCurve(c) => f(&c.points()),
        Geometry::MultiLineString(ml) => ml.line_strings.iter().for_each(|l| f(&l.points)),
        Geometry::MultiCurve(c) | Geometry::MultiSurface(c) | Geometry::GeometryCollection(c) => {
            c.geometries.iter().for_each(|g| for_each_curve(g, f));
        }
        _ => {}
    }
}

/// Calls `f` with the rings of every dimension-2 part, exterior first.
fn for_each_surface(geometry: &Geometry, f: &mut impl FnMut(&[&[Point]])) {
    fn rings(polygon: &crate::geometry::Polygon) -> Vec<&[Point]> {
        polygon.rings.iter().map(|r| r.points.as_slice()).collect()
    }

    match geometry {
        Geometry::Polygon(p) | Geometry::Triangle(p) => f(&rings(p)),
        Geometry::CurvePolygon(p) => {
            let owned = p.ring_points();
            let borrowed: Vec<&[Point]> = owned.iter().map(Vec::as_slice).collect();
            f(&borrowed);
        }
        Geometry::PolyhedralSurface(s) | Geometry::Tin(s) => s.polygons.iter().for_each(|p| f(&rings(p))),
        Geometry::MultiPolygon(mp) => mp.polygons.iter().for_each(|p| f(&rings(p))),
        Geometry::MultiCurve(c) | Geometry::MultiSurface(c) | Geometry::GeometryCollection(c) => {
            c.geometries.iter().for_each(|g| for_each_surface(g, f));
        }
        _ => {}
    }
}

/// Ring vertices without the closing duplicate.
fn open_ring(ring: &[Point]) -> &[Point] {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first.x == last.x && first.y == last.y => {
            &ring[..ring.len() - 1]
        }
        _ => ring,
    }
}
