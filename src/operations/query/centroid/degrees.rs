use super::{for_each_curve, for_each_surface, open_ring};
use crate::geometry::{Geometry, Point};
use crate::math::{degrees_to_radians, radians_to_degrees, Vector3};

/// Vector norm below which the accumulated direction is considered lost.
const VANISHING_NORM: f64 = 1e-12;

/// Centroid of longitude/latitude geometries computed on the unit sphere.
///
/// Vertices are mapped to unit vectors and accumulated by dimension:
/// points are summed, curve segments contribute their arc midpoint
/// weighted by arc length, surface rings are fan-triangulated and each
/// triangle contributes its vertex sum weighted by the triple product.
/// The summed vector is converted back to degrees, which keeps results
/// sane across the antimeridian and near the poles.
#[derive(Debug, Default, Clone, Copy)]
pub struct DegreesCentroid;

impl DegreesCentroid {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query. Returns `None` for an empty geometry or when
    /// the contributions cancel out (e.g. two antipodal points).
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Option<Point> {
        let sum = match geometry.dimension()? {
            0 => point_sum(geometry),
            1 => curve_sum(geometry),
            _ => surface_sum(geometry),
        }?;
        from_unit(&sum)
    }
}

fn point_sum(geometry: &Geometry) -> Option<Vector3> {
    fn walk(geometry: &Geometry, sum: &mut Vector3, count: &mut usize) {
        match geometry {
            Geometry::Point(p) => {
                *sum += to_unit(p);
                *count += 1;
            }
            Geometry::MultiPoint(mp) => {
                for p in &mp.points {
                    *sum += to_unit(p);
                    *count += 1;
                }
            }
            Geometry::MultiCurve(c) | Geometry::MultiSurface(c) | Geometry::GeometryCollection(c) => {
                c.geometries.iter().for_each(|g| walk(g, sum, count));
            }
            _ => {}
        }
    }

    let mut sum = Vector3::zeros();
    let mut count = 0;
    walk(geometry, &mut sum, &mut count);
    (count > 0).then_some(sum)
}

fn curve_sum(geometry: &Geometry) -> Option<Vector3> {
    let mut weighted = Vector3::zeros();
    let mut total = 0.0;
    let mut vertices = Vector3::zeros();
    let mut count = 0;

    for_each_curve(geometry, &mut |points| {
        let units: Vec<Vector3> = points.iter().map(to_unit).collect();
        for u in &units {
            vertices += u;
            count += 1;
        }
        for w in units.windows(2) {
            let arc = w[0].angle(&w[1]);
            let mid = w[0] + w[1];
            if arc > 0.0 && mid.norm() > VANISHING_NORM {
                weighted += mid.normalize() * arc;
                total += arc;
            }
        }
    });

    if count == 0 {
        return None;
    }
    Some(if total > 0.0 { weighted } else { vertices })
}

fn surface_sum(geometry: &Geometry) -> Option<Vector3> {
    let mut weighted = Vector3::zeros();
    let mut total = 0.0;
    let mut vertices = Vector3::zeros();
    let mut count = 0;

    for_each_surface(geometry, &mut |rings| {
        for (i, ring) in rings.iter().enumerate() {
            let units: Vec<Vector3> = open_ring(ring).iter().map(to_unit).collect();
            for u in &units {
                vertices += u;
                count += 1;
            }
            if units.len() < 3 {
                continue;
            }

            let apex = units[0];
            let mut ring_weight = 0.0;
            let mut ring_sum = Vector3::zeros();
            for w in units[1..].windows(2) {
                let weight = apex.dot(&w[0].cross(&w[1]));
                ring_weight += weight;
                ring_sum += (apex + w[0] + w[1]) * weight;
            }

            let sign = if (ring_weight >= 0.0) == (i == 0) { 1.0 } else { -1.0 };
            weighted += ring_sum * sign;
            total += ring_weight * sign;
        }
    });

    if count == 0 {
        return None;
    }
    Some(if total.abs() > 0.0 { weighted } else { vertices })
}

/// Longitude/latitude degrees to a unit vector.
fn to_unit(point: &Point) -> Vector3 {
    let lon = degrees_to_radians(point.x);
    let lat = degrees_to_radians(point.y);
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Direction back to longitude/latitude degrees.
fn from_unit(v: &Vector3) -> Option<Point> {
    if v.norm() < VANISHING_NORM {
        return None;
    }
    let v = v.normalize();
    let lon = v.y.atan2(v.x);
    let lat = v.z.atan2(v.x.hypot(v.y));
    Some(Point::new(radians_to_degrees(lon), radians_to_degrees(lat)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, MultiPoint, Polygon};
    use approx::assert_abs_diff_eq;

    #[test]
    fn points_across_antimeridian() {
        let mp = Geometry::MultiPoint(MultiPoint::new(vec![Point::new(179.0, 0.0), Point::new(-179.0, 0.0)]));
        let c = DegreesCentroid::new().execute(&mp).unwrap();
        assert_abs_diff_eq!(c.x.abs(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn antipodal_points_cancel() {
        let mp = Geometry::MultiPoint(MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(180.0, 0.0)]));
        assert!(DegreesCentroid::new().execute(&mp).is_none());
    }

    #[test]
    fn equator_line_midpoint() {
        let line = Geometry::LineString(LineString::from_xy(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]));
        let c = DegreesCentroid::new().execute(&line).unwrap();
        assert_abs_diff_eq!(c.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn symmetric_polygon_centre() {
        let square = Geometry::Polygon(Polygon::from_xy(&[
            (-10.0, -10.0),
            (10.0, -10.0),
            (10.0, 10.0),
            (-10.0, 10.0),
            (-10.0, -10.0),
        ]));
        let c = DegreesCentroid::new().execute(&square).unwrap();
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn polygon_straddling_antimeridian() {
        let square = Geometry::Polygon(Polygon::from_xy(&[
            (170.0, -5.0),
            (-170.0, -5.0),
            (-170.0, 5.0),
            (170.0, 5.0),
            (170.0, -5.0),
        ]));
        let c = DegreesCentroid::new().execute(&square).unwrap();
        assert_abs_diff_eq!(c.x.abs(), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-6);
    }
}
