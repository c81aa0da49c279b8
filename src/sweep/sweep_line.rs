use std::collections::{BTreeSet, HashMap};
use std::ops::Bound::{Excluded, Unbounded};

use slotmap::SlotMap;

use super::event::Event;
use super::segment::{Segment, SegmentId, SweepKey};
use crate::geometry::Point;
use crate::math::intersect_2d::{collinear_overlap, segment_intersection};
use crate::math::Point2;

/// The set of ring edges currently crossed by the sweep line, kept in
/// vertical order.
///
/// Segments live in an arena; the ordered set holds keys that point back
/// into it, so neighbour queries return ids rather than references.
#[derive(Debug)]
pub struct SweepLine {
    rings: Vec<Vec<Point2>>,
    segments: SlotMap<SegmentId, Segment>,
    order: BTreeSet<SweepKey>,
    by_edge: HashMap<(usize, usize), SegmentId>,
    epsilon: f64,
}

impl SweepLine {
    /// Creates an empty sweep line over `rings` (open vertex sequences).
    ///
    /// `epsilon` is the cross-product slack for detecting collinear
    /// overlaps.
    #[must_use]
    pub fn new(rings: Vec<Vec<Point2>>, epsilon: f64) -> Self {
        Self {
            rings,
            segments: SlotMap::with_key(),
            order: BTreeSet::new(),
            by_edge: HashMap::new(),
            epsilon,
        }
    }

    /// Number of active segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Inserts the edge of a left event.
    pub fn add(&mut self, event: &Event) -> SegmentId {
        let points = &self.rings[event.ring];
        let a = points[event.edge];
        let b = points[(event.edge + 1) % points.len()];
        let segment = Segment::new(event.edge, event.ring, a, b);

        let id = self.segments.insert(segment);
        self.order.insert(SweepKey { segment, id });
        self.by_edge.insert((event.ring, event.edge), id);
        id
    }

    /// Finds the active segment an event belongs to.
    #[must_use]
    pub fn find(&self, event: &Event) -> Option<SegmentId> {
        self.by_edge.get(&(event.ring, event.edge)).copied()
    }

    #[must_use]
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id)
    }

    /// The next segment above `id`.
    #[must_use]
    pub fn above(&self, id: SegmentId) -> Option<SegmentId> {
        let key = self.key(id)?;
        self.order.range((Excluded(key), Unbounded)).next().map(|k| k.id)
    }

    /// The next segment below `id`.
    #[must_use]
    pub fn below(&self, id: SegmentId) -> Option<SegmentId> {
        let key = self.key(id)?;
        self.order.range(..key).next_back().map(|k| k.id)
    }

    /// Removes a segment from the sweep line.
    pub fn remove(&mut self, id: SegmentId) {
        let Some(segment) = self.segments.remove(id) else {
            return;
        };
        self.by_edge.remove(&(segment.ring, segment.edge));
        if !self.order.remove(&SweepKey { segment, id }) {
            // The stored order can drift once segments have crossed.
            self.order.retain(|k| k.id != id);
        }
    }

    /// Tests two active segments for an improper intersection.
    ///
    /// Consecutive edges of the same ring share a vertex by construction;
    /// they only count when the second folds back along the first.
    #[must_use]
    pub fn intersect(&self, a: SegmentId, b: SegmentId) -> bool {
        let (Some(s1), Some(s2)) = (self.segments.get(a), self.segments.get(b)) else {
            return false;
        };
        if s1.ring == s2.ring {
            let n = self.rings[s1.ring].len();
            if (s1.edge + 1) % n == s2.edge {
                return self.folds_back(s1.ring, s1.edge);
            }
            if (s2.edge + 1) % n == s1.edge {
                return self.folds_back(s1.ring, s2.edge);
            }
        }

        let (p1, p2) = (Point::from(s1.left), Point::from(s1.right));
        let (p3, p4) = (Point::from(s2.left), Point::from(s2.right));
        segment_intersection(&p1, &p2, &p3, &p4).is_some() || collinear_overlap(&p1, &p2, &p3, &p4, self.epsilon)
    }

    /// Whether `edge` and the edge after it overlap beyond their shared
    /// vertex, forming a zero-width spike.
    fn folds_back(&self, ring: usize, edge: usize) -> bool {
        let points = &self.rings[ring];
        let n = points.len();
        let (a, b, c) = (points[edge], points[(edge + 1) % n], points[(edge + 2) % n]);
        (b - a).dot(&(c - b)) < 0.0
            && collinear_overlap(&Point::from(a), &Point::from(b), &Point::from(b), &Point::from(c), self.epsilon)
    }

    fn key(&self, id: SegmentId) -> Option<SweepKey> {
        self.segments.get(id).map(|&segment| SweepKey { segment, id })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sweep::event::EventType;

    fn left_event(ring: usize, edge: usize, rings: &[Vec<Point2>]) -> Event {
        let points = &rings[ring];
        let a = points[edge];
        let b = points[(edge + 1) % points.len()];
        Event {
            edge,
            ring,
            point: if Event::is_left_of(&a, &b) { a } else { b },
            kind: EventType::Left,
        }
    }

    fn two_bars() -> Vec<Vec<Point2>> {
        // Two horizontal-ish rings stacked vertically.
        vec![
            vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(5.0, -1.0)],
            vec![Point2::new(0.0, 5.0), Point2::new(10.0, 5.0), Point2::new(5.0, 6.0)],
        ]
    }

    #[test]
    fn neighbours_follow_vertical_order() {
        let rings = two_bars();
        let mut line = SweepLine::new(rings.clone(), 1e-15);
        let low = line.add(&left_event(0, 0, &rings));
        let high = line.add(&left_event(1, 0, &rings));
        assert_eq!(line.len(), 2);
        assert_eq!(line.above(low), Some(high));
        assert_eq!(line.below(high), Some(low));
        assert_eq!(line.above(high), None);
        assert_eq!(line.below(low), None);
    }

    #[test]
    fn remove_relinks_neighbours() {
        let rings = vec![
            vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(5.0, -1.0)],
            vec![Point2::new(0.0, 2.0), Point2::new(10.0, 2.0), Point2::new(5.0, 3.0)],
            vec![Point2::new(0.0, 4.0), Point2::new(10.0, 4.0), Point2::new(5.0, 5.0)],
        ];
        let mut line = SweepLine::new(rings.clone(), 1e-15);
        let a = line.add(&left_event(0, 0, &rings));
        let b = line.add(&left_event(1, 0, &rings));
        let c = line.add(&left_event(2, 0, &rings));
        line.remove(b);
        assert_eq!(line.above(a), Some(c));
        assert!(line.segment(b).is_none());
        assert!(line.find(&left_event(1, 0, &rings)).is_none());
    }

    #[test]
    fn consecutive_edges_do_not_intersect() {
        let rings = vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]];
        let mut line = SweepLine::new(rings.clone(), 1e-15);
        let bottom = line.add(&left_event(0, 0, &rings));
        let left_side = line.add(&left_event(0, 3, &rings));
        assert!(!line.intersect(bottom, left_side));
    }

    #[test]
    fn crossing_edges_intersect() {
        let rings = vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
        ]];
        let mut line = SweepLine::new(rings.clone(), 1e-15);
        let diagonal = line.add(&left_event(0, 0, &rings));
        let anti = line.add(&left_event(0, 2, &rings));
        assert!(line.intersect(diagonal, anti));
    }
}
