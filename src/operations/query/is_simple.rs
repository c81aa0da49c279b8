use crate::geometry::{Geometry, Polygon};
use crate::math::Tolerances;
use crate::sweep::ShamosHoey;

/// Checks surfaces for simplicity with the Shamos–Hoey sweep.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsSimple {
    tolerances: Tolerances,
}

impl IsSimple {
    /// Creates a new `IsSimple` query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the query.
    ///
    /// Polygons, triangles and curve polygons are tested ring by ring; a
    /// linear ring is tested alone; multi-part surfaces are simple when
    /// every part is. Returns `None` for geometries without rings.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Option<bool> {
        let sweep = ShamosHoey::new().with_tolerances(self.tolerances);
        let all_simple = |polygons: &[Polygon]| polygons.iter().all(|p| sweep.simple_polygon(p));
        match geometry {
            Geometry::Polygon(p) | Geometry::Triangle(p) => Some(sweep.simple_polygon(p)),
            Geometry::CurvePolygon(p) => Some(sweep.simple_ring_points(&p.ring_points())),
            Geometry::LinearRing(r) => Some(sweep.simple_points(&r.points)),
            Geometry::PolyhedralSurface(s) | Geometry::Tin(s) => Some(all_simple(&s.polygons)),
            Geometry::MultiPolygon(mp) => Some(all_simple(&mp.polygons)),
            Geometry::MultiSurface(c) => {
                let results: Option<Vec<bool>> = c.geometries.iter().map(|g| self.execute(g)).collect();
                results.map(|r| r.into_iter().all(|simple| simple))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, MultiPolygon, Point};

    #[test]
    fn polygons_and_rings() {
        let square = Polygon::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let bowtie = Polygon::from_xy(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]);
        let query = IsSimple::new();
        assert_eq!(query.execute(&Geometry::Polygon(square.clone())), Some(true));
        assert_eq!(query.execute(&Geometry::Polygon(bowtie.clone())), Some(false));
        assert_eq!(
            query.execute(&Geometry::MultiPolygon(MultiPolygon::new(vec![square, bowtie]))),
            Some(false)
        );
        let ring = LineString::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]);
        assert_eq!(query.execute(&Geometry::LinearRing(ring)), Some(true));
    }

    #[test]
    fn non_surfaces_have_no_answer() {
        assert_eq!(IsSimple::new().execute(&Geometry::Point(Point::new(0.0, 0.0))), None);
    }
}
