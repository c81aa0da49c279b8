use super::{for_each_surface, open_ring};
use crate::geometry::{Geometry, Point};
use crate::math::Tolerances;

/// Area-weighted centroid of the dimension-2 parts of a geometry.
///
/// Uses the shoelace sums per ring. The exterior ring always adds and
/// holes always subtract, whatever their winding. Several polygons are
/// summed before dividing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfaceCentroid {
    tolerances: Tolerances,
    /// Twice the signed area.
    cross_sum: f64,
    moment_x: f64,
    moment_y: f64,
    vertex_x: f64,
    vertex_y: f64,
    vertex_count: usize,
}

impl SurfaceCentroid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Accumulates the surfaces of `geometry`.
    pub fn add(&mut self, geometry: &Geometry) {
        for_each_surface(geometry, &mut |rings| {
            for (i, ring) in rings.iter().enumerate() {
                self.add_ring(ring, i == 0);
            }
        });
    }

    /// Accumulates one ring; `exterior` selects the sign of its
    /// contribution.
    pub fn add_ring(&mut self, ring: &[Point], exterior: bool) {
        let open = open_ring(ring);
        for p in open {
            self.vertex_x += p.x;
            self.vertex_y += p.y;
            self.vertex_count += 1;
        }
        if open.len() < 3 {
            return;
        }

        let (mut cross_sum, mut moment_x, mut moment_y) = (0.0, 0.0, 0.0);
        for (i, a) in open.iter().enumerate() {
            let b = &open[(i + 1) % open.len()];
            let cross = a.x * b.y - b.x * a.y;
            cross_sum += cross;
            moment_x += (a.x + b.x) * cross;
            moment_y += (a.y + b.y) * cross;
        }

        let sign = if (cross_sum >= 0.0) == exterior { 1.0 } else { -1.0 };
        self.cross_sum += sign * cross_sum;
        self.moment_x += sign * moment_x;
        self.moment_y += sign * moment_y;
    }

    /// The centroid, or `None` if no vertex was added.
    ///
    /// A (near) zero accumulated area falls back to the mean of the ring
    /// vertices.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.cross_sum.abs() * 0.5 > self.tolerances.line_epsilon {
            let divisor = 3.0 * self.cross_sum;
            return Some(Point::new(self.moment_x / divisor, self.moment_y / divisor));
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertex_count as f64;
        (self.vertex_count > 0).then(|| Point::new(self.vertex_x / n, self.vertex_y / n))
    }
}
