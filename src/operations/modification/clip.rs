//! Clipping of point sequences and polygon rings against an envelope.
//!
//! Lines are cut with Liang–Barsky into the runs that lie inside. Polygon
//! rings are cut the same way and the boundary-to-boundary runs are then
//! stitched back into closed loops by walking the envelope boundary
//! counter-clockwise from each exit to the next entry.

use crate::geometry::{Envelope, LineString, Point, Polygon};
use crate::math::polygon_2d::{point_in_ring, signed_area};

/// Parameter interval `[t0, t1]` of the segment `a`-`b` inside the
/// envelope, boundary included.
#[must_use]
pub fn liang_barsky(envelope: &Envelope, a: &Point, b: &Point) -> Option<(f64, f64)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, a.x - envelope.min_x()),
        (dx, envelope.max_x() - a.x),
        (-dy, a.y - envelope.min_y()),
        (dy, envelope.max_y() - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

/// Splits a point sequence into the runs that lie inside the envelope.
///
/// Boundary crossings become new points. Runs with fewer than two points
/// are dropped.
#[must_use]
pub fn clip_runs(envelope: &Envelope, points: &[Point]) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for w in points.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        let Some((t0, t1)) = liang_barsky(envelope, a, b) else {
            flush(&mut runs, &mut current);
            continue;
        };
        let start = if t0 > 0.0 { onto_boundary(envelope, &interpolate(envelope, a, b, t0)) } else { *a };
        let end = if t1 < 1.0 { onto_boundary(envelope, &interpolate(envelope, a, b, t1)) } else { *b };

        if t0 > 0.0 || current.last().is_none_or(|last| !same_xy(last, &start)) {
            flush(&mut runs, &mut current);
            current.push(start);
        }
        if current.last().is_some_and(|last| !same_xy(last, &end)) {
            current.push(end);
        }
        if t1 < 1.0 {
            flush(&mut runs, &mut current);
        }
    }
    flush(&mut runs, &mut current);
    runs
}

fn flush(runs: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if current.len() >= 2 {
        runs.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Point at `t` along `a`-`b`, kept inside the envelope. z and m are
/// interpolated when both ends carry them.
fn interpolate(envelope: &Envelope, a: &Point, b: &Point, t: f64) -> Point {
    let lerp = |u: f64, v: f64| u + (v - u) * t;
    Point {
        x: lerp(a.x, b.x).clamp(envelope.min_x(), envelope.max_x()),
        y: lerp(a.y, b.y).clamp(envelope.min_y(), envelope.max_y()),
        z: a.z.zip(b.z).map(|(u, v)| lerp(u, v)).or(a.z),
        m: a.m.zip(b.m).map(|(u, v)| lerp(u, v)).or(a.m),
    }
}

/// Moves a crossing point exactly onto its nearest envelope side.
fn onto_boundary(envelope: &Envelope, p: &Point) -> Point {
    let sides = [
        ((p.y - envelope.min_y()).abs(), p.x, envelope.min_y()),
        ((p.x - envelope.max_x()).abs(), envelope.max_x(), p.y),
        ((p.y - envelope.max_y()).abs(), p.x, envelope.max_y()),
        ((p.x - envelope.min_x()).abs(), envelope.min_x(), p.y),
    ];
    let mut nearest = sides[0];
    for side in &sides[1..] {
        if side.0 < nearest.0 {
            nearest = *side;
        }
    }
    p.with_xy(nearest.1, nearest.2)
}

fn same_xy(a: &Point, b: &Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Arc-length position along the envelope boundary, counter-clockwise
/// from the bottom-left corner: bottom, right, top, left.
#[derive(Debug, Clone, Copy)]
struct Perimeter {
    envelope: Envelope,
    width: f64,
    height: f64,
    epsilon: f64,
}

impl Perimeter {
    fn new(envelope: &Envelope, epsilon: f64) -> Self {
        Self {
            envelope: *envelope,
            width: envelope.x_range(),
            height: envelope.y_range(),
            epsilon,
        }
    }

    fn length(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Position of a boundary point, measured on its nearest side.
    fn position(&self, p: &Point) -> f64 {
        let e = &self.envelope;
        let distances = [
            (p.y - e.min_y()).abs(),
            (p.x - e.max_x()).abs(),
            (p.y - e.max_y()).abs(),
            (p.x - e.min_x()).abs(),
        ];
        let mut side = 0;
        for (i, d) in distances.iter().enumerate() {
            if *d < distances[side] {
                side = i;
            }
        }
        match side {
            0 => (p.x - e.min_x()).clamp(0.0, self.width),
            1 => self.width + (p.y - e.min_y()).clamp(0.0, self.height),
            2 => self.width + self.height + (e.max_x() - p.x).clamp(0.0, self.width),
            _ => 2.0 * self.width + self.height + (e.max_y() - p.y).clamp(0.0, self.height),
        }
    }

    /// Counter-clockwise distance from `from` to `to`; a full turn within
    /// epsilon counts as zero.
    fn distance(&self, from: f64, to: f64) -> f64 {
        let total = self.length();
        let d = (to - from).rem_euclid(total);
        if total - d <= self.epsilon {
            0.0
        } else {
            d
        }
    }

    /// Corners passed when walking `distance` from `from`, in walking order.
    /// Corners take z and m from `template`.
    fn corners_between(&self, from: f64, distance: f64, template: &Point) -> Vec<Point> {
        let e = &self.envelope;
        let mut corners: Vec<(f64, Point)> = [
            (0.0, e.bottom_left()),
            (self.width, e.bottom_right()),
            (self.width + self.height, e.top_right()),
            (2.0 * self.width + self.height, e.top_left()),
        ]
        .into_iter()
        .map(|(s, c)| (self.distance(from, s), template.with_xy(c.x, c.y)))
        .filter(|(d, _)| *d > 0.0 && *d < distance)
        .collect();
        corners.sort_by(|a, b| a.0.total_cmp(&b.0));
        corners.into_iter().map(|(_, c)| c).collect()
    }
}

/// How a closed ring relates to the envelope.
pub(crate) enum RingClip {
    /// No vertex outside.
    Inside(Vec<Point>),
    /// Boundary-to-boundary runs inside the envelope.
    Crossing(Vec<Vec<Point>>),
    /// Vertices outside and nothing inside: the ring is disjoint from the
    /// envelope or surrounds it.
    Apart,
}

fn classify(envelope: &Envelope, ring: &[Point]) -> RingClip {
    let open = &ring[..ring.len() - 1];
    let Some(k) = open.iter().position(|p| !envelope.contains_point(p, 0.0)) else {
        return RingClip::Inside(ring.to_vec());
    };

    // Starting outside makes every run begin and end on the boundary.
    let rotated: Vec<Point> = open[k..]
        .iter()
        .chain(&open[..k])
        .chain(std::iter::once(&open[k]))
        .copied()
        .collect();
    let runs = clip_runs(envelope, &rotated);
    if runs.is_empty() {
        RingClip::Apart
    } else {
        RingClip::Crossing(runs)
    }
}

/// Clips a ring, open or closed, against an envelope.
///
/// Runs of a crossing ring start at the first outside vertex, so each
/// connected piece inside comes back as one run.
pub(crate) fn clip_ring(envelope: &Envelope, ring: &[Point]) -> RingClip {
    let Some(first) = ring.first() else {
        return RingClip::Apart;
    };
    let mut closed = ring.to_vec();
    if ring.last().is_some_and(|last| !same_xy(first, last)) {
        closed.push(*first);
    }
    classify(envelope, &closed)
}

/// Closed copy of a ring wound counter-clockwise (or clockwise).
fn oriented(points: &[Point], ccw: bool) -> Vec<Point> {
    let mut ring = points.to_vec();
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last()) {
        if !same_xy(&first, last) {
            ring.push(first);
        }
    }
    if (signed_area(&ring) > 0.0) != ccw {
        ring.reverse();
    }
    ring
}

/// Stitches boundary-to-boundary runs into closed loops.
fn join_runs(perimeter: &Perimeter, runs: &[Vec<Point>]) -> Vec<Vec<Point>> {
    let entries: Vec<f64> = runs.iter().map(|r| perimeter.position(&r[0])).collect();
    let mut used = vec![false; runs.len()];
    let mut loops = Vec::new();

    for start in 0..runs.len() {
        if used[start] {
            continue;
        }
        let mut ring: Vec<Point> = Vec::new();
        let mut current = start;
        loop {
            used[current] = true;
            for p in &runs[current] {
                if ring.last().is_none_or(|last| !same_xy(last, p)) {
                    ring.push(*p);
                }
            }
            let Some(exit) = ring.last().copied() else {
                break;
            };
            let from = perimeter.position(&exit);
            let next = (0..runs.len())
                .filter(|&j| !used[j] || j == start)
                .min_by(|&a, &b| {
                    perimeter
                        .distance(from, entries[a])
                        .total_cmp(&perimeter.distance(from, entries[b]))
                });
            let Some(next) = next else {
                break;
            };
            let walk = perimeter.distance(from, entries[next]);
            ring.extend(perimeter.corners_between(from, walk, &exit));
            if next == start {
                break;
            }
            current = next;
        }
        if let Some(first) = ring.first().copied() {
            if ring.last().is_some_and(|last| !same_xy(last, &first)) {
                ring.push(first);
            }
        }
        loops.push(ring);
    }
    loops
}

/// Clips a polygon against an envelope.
///
/// Returns one polygon per disjoint piece; an empty vector when nothing
/// is left. Output rings keep the winding of the input rings.
#[must_use]
pub fn clip_polygon(envelope: &Envelope, polygon: &Polygon, epsilon: f64) -> Vec<Polygon> {
    let Some(exterior) = polygon.exterior() else {
        return Vec::new();
    };
    if exterior.points.len() < 3 || envelope.x_range() <= 0.0 || envelope.y_range() <= 0.0 {
        return Vec::new();
    }
    let exterior_ccw = signed_area(&exterior.points) >= 0.0;
    let holes_ccw = polygon
        .holes()
        .first()
        .map_or(!exterior_ccw, |h| signed_area(&h.points) > 0.0);

    let perimeter = Perimeter::new(envelope, epsilon);
    let center = envelope.centroid();
    let mut runs = Vec::new();
    let mut loops: Vec<Vec<Point>> = Vec::new();
    let mut inner_holes: Vec<Vec<Point>> = Vec::new();

    let outer = oriented(&exterior.points, true);
    let mut covers = false;
    match classify(envelope, &outer) {
        RingClip::Inside(ring) => loops.push(ring),
        RingClip::Crossing(r) => runs.extend(r),
        RingClip::Apart => {
            if !point_in_ring(&center, &outer, epsilon) {
                return Vec::new();
            }
            covers = true;
        }
    }

    for hole in polygon.holes() {
        if hole.points.len() < 3 {
            continue;
        }
        let ring = oriented(&hole.points, false);
        match classify(envelope, &ring) {
            RingClip::Inside(ring) => inner_holes.push(ring),
            RingClip::Crossing(r) => runs.extend(r),
            RingClip::Apart => {
                if point_in_ring(&center, &ring, epsilon) {
                    return Vec::new();
                }
            }
        }
    }

    if covers && runs.is_empty() {
        let mut rectangle = envelope.ring().points;
        for corner in &mut rectangle {
            *corner = outer[0].with_xy(corner.x, corner.y);
        }
        loops.push(rectangle);
    }
    loops.extend(join_runs(&perimeter, &runs));
    loops.retain(|ring| ring.len() >= 4 && signed_area(ring) != 0.0);

    let mut pieces: Vec<Vec<Vec<Point>>> = loops.into_iter().map(|ring| vec![ring]).collect();
    for hole in inner_holes {
        if let Some(piece) = pieces
            .iter_mut()
            .find(|rings| hole.iter().any(|v| point_in_ring(v, &rings[0], epsilon)))
        {
            piece.push(hole);
        }
    }

    pieces
        .into_iter()
        .map(|rings| {
            let rings = rings
                .into_iter()
                .enumerate()
                .map(|(i, mut ring)| {
                    let ccw = if i == 0 { exterior_ccw } else { holes_ccw };
                    if (signed_area(&ring) > 0.0) != ccw {
                        ring.reverse();
                    }
                    LineString {
                        has_z: polygon.has_z,
                        has_m: polygon.has_m,
                        points: ring,
                    }
                })
                .collect();
            Polygon {
                has_z: polygon.has_z,
                has_m: polygon.has_m,
                rings,
            }
        })
        .collect()
}
