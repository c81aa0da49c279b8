use std::cmp::Ordering;

use super::event::Event;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for an active sweep segment.
    pub struct SegmentId;
}

/// A ring edge while it is crossed by the sweep line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub edge: usize,
    pub ring: usize,
    /// Endpoint with the smaller (x, y).
    pub left: Point2,
    pub right: Point2,
}

impl Segment {
    /// Builds the segment of an edge from its two vertices.
    #[must_use]
    pub fn new(edge: usize, ring: usize, a: Point2, b: Point2) -> Self {
        let (left, right) = if Event::is_left_of(&a, &b) { (a, b) } else { (b, a) };
        Self { edge, ring, left, right }
    }

    /// y of the segment's supporting line at `x`.
    ///
    /// A vertical segment reports its lower end.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        let dx = self.right.x - self.left.x;
        if dx == 0.0 {
            return self.left.y;
        }
        self.left.y + (x - self.left.x) * (self.right.y - self.left.y) / dx
    }

    /// dy/dx, infinite for a vertical segment.
    #[must_use]
    pub fn slope(&self) -> f64 {
        let dx = self.right.x - self.left.x;
        if dx == 0.0 {
            return f64::INFINITY;
        }
        (self.right.y - self.left.y) / dx
    }

    /// Vertical order of two segments at the later of their left ends,
    /// tie-broken by slope (steeper is above), then ring and edge.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.ring == other.ring && self.edge == other.edge {
            return Ordering::Equal;
        }
        let x = self.left.x.max(other.left.x);
        self.y_at(x)
            .partial_cmp(&other.y_at(x))
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.slope().partial_cmp(&other.slope()).unwrap_or(Ordering::Equal))
            .then(self.ring.cmp(&other.ring))
            .then(self.edge.cmp(&other.edge))
    }
}

/// Ordering key of an active segment in the sweep structure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SweepKey {
    pub segment: Segment,
    pub id: SegmentId,
}

impl PartialEq for SweepKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SweepKey {}

impl Ord for SweepKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segment.compare(&other.segment)
    }
}

impl PartialOrd for SweepKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(edge: usize, a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment::new(edge, 0, Point2::new(a.0, a.1), Point2::new(b.0, b.1))
    }

    #[test]
    fn endpoints_are_ordered() {
        let s = seg(0, (5.0, 5.0), (0.0, 0.0));
        assert_eq!(s.left, Point2::new(0.0, 0.0));
        assert_eq!(s.right, Point2::new(5.0, 5.0));
    }

    #[test]
    fn y_at_interpolates() {
        let s = seg(0, (0.0, 0.0), (10.0, 5.0));
        assert_relative_eq!(s.y_at(4.0), 2.0);
        let vertical = seg(1, (3.0, 7.0), (3.0, 1.0));
        assert_relative_eq!(vertical.y_at(3.0), 1.0);
        assert!(vertical.slope().is_infinite());
    }

    #[test]
    fn compare_at_later_left_end() {
        let low = seg(0, (0.0, 0.0), (10.0, 0.0));
        let high = seg(1, (5.0, 3.0), (8.0, 3.0));
        assert_eq!(low.compare(&high), Ordering::Less);
        assert_eq!(high.compare(&low), Ordering::Greater);
    }

    #[test]
    fn shared_start_breaks_tie_on_slope() {
        let flat = seg(0, (0.0, 0.0), (10.0, 0.0));
        let rising = seg(1, (0.0, 0.0), (10.0, 10.0));
        assert_eq!(flat.compare(&rising), Ordering::Less);
        assert_eq!(flat.compare(&flat), Ordering::Equal);
    }
}
