use super::{Geometry, LineString, Point};
use crate::error::{GeometryError, Result};

/// A planar surface bounded by one exterior ring and zero or more holes.
///
/// Also backs the `Triangle` variant of [`Geometry`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub has_z: bool,
    pub has_m: bool,
    pub rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon, taking the z/m flags from the rings.
    #[must_use]
    pub fn new(rings: Vec<LineString>) -> Self {
        let has_z = rings.iter().any(|r| r.has_z);
        let has_m = rings.iter().any(|r| r.has_m);
        Self { has_z, has_m, rings }
    }

    /// Creates a single-ring 2D polygon from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(vec![LineString::from_xy(coords)])
    }

    /// Creates a triangle ring, checking it has three points plus closure.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTriangle` if the ring does not have
    /// exactly four points with the last equal to the first.
    pub fn triangle(ring: LineString) -> Result<Self> {
        if ring.num_points() != 4 || !ring.is_closed() {
            return Err(GeometryError::InvalidTriangle(ring.num_points()).into());
        }
        Ok(Self::new(vec![ring]))
    }

    /// Returns the exterior ring, if any.
    #[must_use]
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// Returns the interior rings.
    #[must_use]
    pub fn holes(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Returns `true` if the polygon has no rings or an empty exterior.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exterior().is_none_or(LineString::is_empty)
    }
}

/// A surface whose rings may be any curve (line string, circular string or
/// compound curve).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePolygon {
    pub has_z: bool,
    pub has_m: bool,
    pub rings: Vec<Geometry>,
}

impl CurvePolygon {
    /// Creates a curve polygon, taking the z/m flags from the rings.
    #[must_use]
    pub fn new(rings: Vec<Geometry>) -> Self {
        let has_z = rings.iter().any(Geometry::has_z);
        let has_m = rings.iter().any(Geometry::has_m);
        Self { has_z, has_m, rings }
    }

    /// Returns each ring flattened to its point sequence.
    #[must_use]
    pub fn ring_points(&self) -> Vec<Vec<Point>> {
        self.rings.iter().map(Geometry::curve_points).collect()
    }
}

/// A contiguous collection of polygon patches.
///
/// Also backs the `TIN` variant, whose patches are triangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyhedralSurface {
    pub has_z: bool,
    pub has_m: bool,
    pub polygons: Vec<Polygon>,
}

impl PolyhedralSurface {
    /// Creates a polyhedral surface, taking the z/m flags from the patches.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let has_z = polygons.iter().any(|p| p.has_z);
        let has_m = polygons.iter().any(|p| p.has_m);
        Self {
            has_z,
            has_m,
            polygons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_requires_closed_four_points() {
        let ok = LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
        assert!(Polygon::triangle(ok).is_ok());
        let open = LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert!(Polygon::triangle(open).is_err());
        let square = LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert!(Polygon::triangle(square).is_err());
    }

    #[test]
    fn exterior_and_holes() {
        let poly = Polygon::new(vec![
            LineString::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
            LineString::from_xy(&[(2.0, 1.0), (3.0, 1.0), (3.0, 2.0), (2.0, 1.0)]),
        ]);
        assert_eq!(poly.holes().len(), 1);
        assert!(!poly.is_empty());
        assert!(Polygon::default().is_empty());
    }
}
