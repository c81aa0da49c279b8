use crate::geometry::{Envelope, Geometry, Point};

/// Clamps coordinates into an envelope.
///
/// z and m are clamped only when both the envelope and the point carry
/// them.
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    envelope: Envelope,
}

impl Bound {
    /// Creates a new `Bound` transform.
    #[must_use]
    pub fn new(envelope: Envelope) -> Self {
        Self { envelope }
    }

    #[must_use]
    pub fn point(&self, point: &Point) -> Point {
        let e = &self.envelope;
        let clamp = |value: Option<f64>, bounds: Option<(f64, f64)>| match (value, bounds) {
            (Some(v), Some((min, max))) => Some(v.clamp(min, max)),
            (v, _) => v,
        };
        Point {
            x: point.x.clamp(e.min_x(), e.max_x()),
            y: point.y.clamp(e.min_y(), e.max_y()),
            z: clamp(point.z, e.z_bounds()),
            m: clamp(point.m, e.m_bounds()),
        }
    }

    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(&mut |p| self.point(p))
    }
}
