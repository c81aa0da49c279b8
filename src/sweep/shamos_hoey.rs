use tracing::debug;

use super::event::{EventQueue, EventType};
use super::segment::SegmentId;
use super::sweep_line::SweepLine;
use crate::geometry::{LineString, Point, Polygon};
use crate::math::polygon_2d::point_in_ring;
use crate::math::{Point2, Tolerances};

/// Shamos–Hoey simple polygon test.
///
/// A polygon is simple when no two non-adjacent edges of any of its rings
/// meet, and every hole lies inside the exterior ring and outside the
/// other holes. Runs in `O(n log n)` for `n` edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShamosHoey {
    tolerances: Tolerances,
}

impl ShamosHoey {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Tests a polygon.
    #[must_use]
    pub fn simple_polygon(&self, polygon: &Polygon) -> bool {
        self.simple_rings(&polygon.rings)
    }

    /// Tests a single ring given as a point sequence.
    #[must_use]
    pub fn simple_points(&self, points: &[Point]) -> bool {
        self.simple_ring_points(&[points.to_vec()])
    }

    /// Tests polygon rings, exterior first.
    #[must_use]
    pub fn simple_rings(&self, rings: &[LineString]) -> bool {
        let rings: Vec<Vec<Point>> = rings.iter().map(|r| r.points.clone()).collect();
        self.simple_ring_points(&rings)
    }

    /// Tests polygon rings given as point sequences, exterior first.
    ///
    /// Rings may be open or closed. Rings with fewer than three distinct
    /// consecutive vertices are not simple.
    #[must_use]
    pub fn simple_ring_points(&self, rings: &[Vec<Point>]) -> bool {
        if rings.is_empty() {
            return false;
        }
        let mut prepared = Vec::with_capacity(rings.len());
        for ring in rings {
            let vertices = open_vertices(ring);
            if vertices.len() < 3 {
                return false;
            }
            prepared.push(vertices);
        }

        if !self.sweep(prepared.clone()) {
            return false;
        }
        self.holes_inside(&prepared)
    }

    fn sweep(&self, rings: Vec<Vec<Point2>>) -> bool {
        let queue = EventQueue::new(&rings);
        let mut line = SweepLine::new(rings, self.tolerances.line_epsilon);

        for event in queue.iter() {
            match event.kind {
                EventType::Left => {
                    let id = line.add(event);
                    for neighbour in [line.above(id), line.below(id)].into_iter().flatten() {
                        if line.intersect(id, neighbour) {
                            log_crossing(&line, id, neighbour);
                            return false;
                        }
                    }
                }
                EventType::Right => {
                    let Some(id) = line.find(event) else {
                        continue;
                    };
                    if let (Some(above), Some(below)) = (line.above(id), line.below(id)) {
                        if line.intersect(above, below) {
                            log_crossing(&line, above, below);
                            return false;
                        }
                    }
                    line.remove(id);
                }
            }
        }
        true
    }

    /// Every hole must start inside the exterior and outside the other
    /// holes. The sweep already ruled out touching rings, so one vertex
    /// per hole decides.
    fn holes_inside(&self, rings: &[Vec<Point2>]) -> bool {
        let rings: Vec<Vec<Point>> = rings
            .iter()
            .map(|r| r.iter().copied().map(Point::from).collect())
            .collect();
        let epsilon = self.tolerances.line_epsilon;
        let Some((exterior, holes)) = rings.split_first() else {
            return false;
        };

        holes.iter().enumerate().all(|(i, hole)| {
            let vertex = &hole[0];
            point_in_ring(vertex, exterior, epsilon)
                && holes
                    .iter()
                    .enumerate()
                    .all(|(j, other)| i == j || !point_in_ring(vertex, other, epsilon))
        })
    }
}

/// Ring vertices with consecutive duplicates and the closing point removed.
fn open_vertices(ring: &[Point]) -> Vec<Point2> {
    let mut vertices: Vec<Point2> = Vec::with_capacity(ring.len());
    for p in ring {
        let v = p.xy();
        if vertices.last() != Some(&v) {
            vertices.push(v);
        }
    }
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    vertices
}

fn log_crossing(line: &SweepLine, a: SegmentId, b: SegmentId) {
    if let (Some(s1), Some(s2)) = (line.segment(a), line.segment(b)) {
        debug!(
            ring_a = s1.ring,
            edge_a = s1.edge,
            ring_b = s2.ring,
            edge_b = s2.edge,
            "ring edges intersect, polygon is not simple"
        );
    }
}
