use super::{Geometry, GeometryType, LineString, Point, Polygon};
use crate::error::{GeometryError, Result};

/// A collection of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    pub has_z: bool,
    pub has_m: bool,
    pub points: Vec<Point>,
}

impl MultiPoint {
    /// Creates a multi point, taking the z/m flags from the points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let has_z = points.iter().any(Point::has_z);
        let has_m = points.iter().any(Point::has_m);
        Self {
            has_z,
            has_m,
            points,
        }
    }

    /// Builds a multi point from generic geometries.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HeterogeneousCollection` if any child is not a point.
    pub fn try_from_geometries(geometries: Vec<Geometry>) -> Result<Self> {
        let mut points = Vec::with_capacity(geometries.len());
        for geometry in geometries {
            match geometry {
                Geometry::Point(p) => points.push(p),
                other => return Err(heterogeneous("MultiPoint", &other)),
            }
        }
        Ok(Self::new(points))
    }
}

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    pub has_z: bool,
    pub has_m: bool,
    pub line_strings: Vec<LineString>,
}

impl MultiLineString {
    /// Creates a multi line string, taking the z/m flags from the children.
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

    /// Builds a multi line string from generic geometries.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HeterogeneousCollection` if any child is not a
    /// line string (or one of its restrictions).
    pub fn try_from_geometries(geometries: Vec<Geometry>) -> Result<Self> {
        let mut lines = Vec::with_capacity(geometries.len());
        for geometry in geometries {
            match geometry {
                Geometry::LineString(l) | Geometry::LinearRing(l) | Geometry::Line(l) => lines.push(l),
                other => return Err(heterogeneous("MultiLineString", &other)),
            }
        }
        Ok(Self::new(lines))
    }
}

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    pub has_z: bool,
    pub has_m: bool,
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a multi polygon, taking the z/m flags from the children.
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

    /// Builds a multi polygon from generic geometries.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HeterogeneousCollection` if any child is not a
    /// polygon or triangle.
    pub fn try_from_geometries(geometries: Vec<Geometry>) -> Result<Self> {
        let mut polygons = Vec::with_capacity(geometries.len());
        for geometry in geometries {
            match geometry {
                Geometry::Polygon(p) | Geometry::Triangle(p) => polygons.push(p),
                other => return Err(heterogeneous("MultiPolygon", &other)),
            }
        }
        Ok(Self::new(polygons))
    }
}

/// A heterogeneous collection of geometries.
///
/// Also backs the `MultiCurve` and `MultiSurface` variants, whose children
/// are restricted to curves and surfaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    pub has_z: bool,
    pub has_m: bool,
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a collection, taking the z/m flags from the children.
    #[must_use]
    pub fn new(geometries: Vec<Geometry>) -> Self {
        let has_z = geometries.iter().any(Geometry::has_z);
        let has_m = geometries.iter().any(Geometry::has_m);
        Self {
            has_z,
            has_m,
            geometries,
        }
    }

    /// Builds the payload of a `MultiCurve`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HeterogeneousCollection` if any child is not a curve.
    pub fn multi_curve(geometries: Vec<Geometry>) -> Result<Self> {
        Self::restricted("MultiCurve", geometries, GeometryType::is_curve)
    }

    /// Builds the payload of a `MultiSurface`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HeterogeneousCollection` if any child is not a surface.
    pub fn multi_surface(geometries: Vec<Geometry>) -> Result<Self> {
        Self::restricted("MultiSurface", geometries, GeometryType::is_surface)
    }

    fn restricted(
        collection: &'static str,
        geometries: Vec<Geometry>,
        allowed: fn(GeometryType) -> bool,
    ) -> Result<Self> {
        if let Some(bad) = geometries.iter().find(|g| !allowed(g.geometry_type())) {
            return Err(heterogeneous(collection, bad));
        }
        Ok(Self::new(geometries))
    }
}

fn heterogeneous(collection: &'static str, child: &Geometry) -> crate::error::SfError {
    GeometryError::HeterogeneousCollection {
        collection,
        child: child.geometry_type().name(),
    }
    .into()
}
