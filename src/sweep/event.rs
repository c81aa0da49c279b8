use std::cmp::Ordering;

use crate::math::Point2;

/// Which end of an edge an event marks.
///
/// `Left` sorts before `Right`, so at a shared vertex the next edge is
/// opened before the previous one is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventType {
    Left,
    Right,
}

/// A sweep event at one endpoint of a ring edge.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub edge: usize,
    pub ring: usize,
    pub point: Point2,
    pub kind: EventType,
}

impl Event {
    /// The lexicographically smaller (x, then y) endpoint is the left one.
    #[must_use]
    pub fn is_left_of(a: &Point2, b: &Point2) -> bool {
        compare_xy(a, b) != Ordering::Greater
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_xy(&self.point, &other.point)
            .then(self.kind.cmp(&other.kind))
            .then(self.ring.cmp(&other.ring))
            .then(self.edge.cmp(&other.edge))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) fn compare_xy(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// The sorted events of all ring edges.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Builds two events per edge. Each ring is an open vertex sequence;
    /// its last vertex connects back to the first.
    #[must_use]
    pub fn new(rings: &[Vec<Point2>]) -> Self {
        let mut events = Vec::with_capacity(rings.iter().map(|r| 2 * r.len()).sum());
        for (ring, points) in rings.iter().enumerate() {
            let n = points.len();
            for edge in 0..n {
                let a = points[edge];
                let b = points[(edge + 1) % n];
                let (left, right) = if Event::is_left_of(&a, &b) { (a, b) } else { (b, a) };
                events.push(Event {
                    edge,
                    ring,
                    point: left,
                    kind: EventType::Left,
                });
                events.push(Event {
                    edge,
                    ring,
                    point: right,
                    kind: EventType::Right,
                });
            }
        }
        events.sort_unstable();
        Self { events }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
