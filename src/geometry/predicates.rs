//! Orientation and containment tests shared by the model and the engine.
//!
//! Every tolerance in the crate goes through [`EPSILON`]. It is a compile-time
//! constant so both compiled targets classify the same input identically.

use super::Point;

/// Cross products and coordinate differences at or below this magnitude are
/// treated as zero (collinear / coincident).
pub const EPSILON: f64 = 1e-9;

/// Twice the signed area of triangle `abc`.
/// Positive when `a -> b -> c` turns left (counter-clockwise, y up).
#[inline(always)]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Sign of [`cross`] with the epsilon band collapsed to zero.
#[inline(always)]
pub(crate) fn orientation(a: Point, b: Point, c: Point) -> i8 {
    let d = cross(a, b, c);
    if d > EPSILON {
        1
    } else if d < -EPSILON {
        -1
    } else {
        0
    }
}

/// Strict left turn at `b`; collinear and near-collinear triples are not convex.
#[inline(always)]
pub(crate) fn is_convex(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) > EPSILON
}

/// Inclusive containment for a counter-clockwise triangle `abc`.
/// Points on an edge (within epsilon) count as inside.
#[inline(always)]
pub(crate) fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    cross(a, b, p) >= -EPSILON && cross(b, c, p) >= -EPSILON && cross(c, a, p) >= -EPSILON
}

/// `q` lies inside the bounding box of segment `pr`. Only meaningful when the
/// three points are already known to be collinear.
#[inline(always)]
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) + EPSILON
        && q.x >= p.x.min(r.x) - EPSILON
        && q.y <= p.y.max(r.y) + EPSILON
        && q.y >= p.y.min(r.y) - EPSILON
}

/// Segments `p1q1` and `p2q2` share at least one point, including collinear
/// overlaps and touching endpoints.
pub(crate) fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    (o1 != o2 && o3 != o4)
        || (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
}

/// Signed shoelace area where a clockwise ring (y up) is positive.
pub(crate) fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        sum += (points[i].x - points[j].x) * (points[i].y + points[j].y);
        j = i;
    }
    0.5 * sum
}
