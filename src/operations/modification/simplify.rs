use tracing::trace;

use crate::geometry::{Geometry, Point, SequenceRole};
use crate::math::distance_2d::perpendicular_distance;

/// Douglas–Peucker simplification.
///
/// A point survives when it lies farther than `tolerance` from the chord
/// of the span it splits. The first and last points always survive.
#[derive(Debug, Clone, Copy)]
pub struct Simplify {
    tolerance: f64,
}

impl Simplify {
    /// Creates a new `Simplify` operation. Negative tolerances act as zero.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Simplifies a point sequence. Fewer than three points come back
    /// unchanged.
    #[must_use]
    pub fn points(&self, points: &[Point]) -> Vec<Point> {
        if points.len() < 3 {
            return points.to_vec();
        }
        let last = points.len() - 1;
        let mut keep = vec![false; points.len()];
        keep[0] = true;
        keep[last] = true;

        let mut spans = vec![(0, last)];
        while let Some((start, end)) = spans.pop() {
            if end <= start + 1 {
                continue;
            }
            let mut max_index = start;
            let mut max_distance = 0.0;
            for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
                let d = perpendicular_distance(p, &points[start], &points[end]);
                if d > max_distance {
                    max_index = i;
                    max_distance = d;
                }
            }
            if max_distance > self.tolerance {
                keep[max_index] = true;
                spans.push((start, max_index));
                spans.push((max_index, end));
            }
        }

        let simplified: Vec<Point> = points
            .iter()
            .zip(&keep)
            .filter_map(|(p, &k)| k.then_some(*p))
            .collect();
        trace!(before = points.len(), after = simplified.len(), "simplified point sequence");
        simplified
    }

    /// Simplifies every connected point sequence of a geometry.
    ///
    /// Rings keep their closure and are dropped below four points; lines
    /// are dropped below two. Returns `None` when nothing is left.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Option<Geometry> {
        geometry.retain_sequences(&mut |points, role| match role {
            SequenceRole::Point => Some(points.to_vec()),
            SequenceRole::Line => Some(self.points(points)).filter(|p| p.len() >= 2),
            SequenceRole::Ring => Some(self.points(points)).filter(|p| p.len() >= 4),
        })
    }
}
