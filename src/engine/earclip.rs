//! Ear-clipping sweep over a single (already hole-linked) ring.

use super::list::VertexList;
use crate::geometry::predicates::{cross, is_convex, point_in_triangle, EPSILON};
use crate::geometry::TriangleIndexBuffer;

/// Clip ears from the ring through `start` into `out`.
///
/// Returns the number of vertices left when the sweep got stuck; `0` means the
/// ring was cleared (possibly leaving only zero-area collinear leftovers).
pub(crate) fn clip(list: &mut VertexList, start: usize, out: &mut TriangleIndexBuffer) -> usize {
    let mut remaining = list.ring_len(start);
    let mut cursor = start;
    // Consecutive vertices rejected since the last clip.
    let mut misses = 0usize;

    while remaining > 3 {
        if misses >= remaining {
            // Full pass without an ear.
            return if list.signed_area(cursor).abs() <= EPSILON { 0 } else { remaining };
        }

        let node = *list.node(cursor);
        if is_ear(list, node.prev, cursor, node.next) {
            out.push([list.node(node.prev).source, node.source, list.node(node.next).source]);
            list.unlink(cursor);
            remaining -= 1;
            misses = 0;
        } else {
            misses += 1;
        }
        cursor = node.next;
    }

    let b = list.node(cursor).next;
    let c = list.node(b).next;
    let area = cross(list.point(cursor), list.point(b), list.point(c));
    if area > EPSILON {
        out.push([list.node(cursor).source, list.node(b).source, list.node(c).source]);
        0
    } else if area >= -EPSILON {
        // Collinear leftovers: no area left to cover.
        0
    } else {
        3
    }
}

/// `b` is strictly convex and no other vertex of the ring lies in or on the
/// triangle `abc`. Vertices sitting on a corner (bridge duplicates) are ignored.
fn is_ear(list: &VertexList, a: usize, b: usize, c: usize) -> bool {
    let (pa, pb, pc) = (list.point(a), list.point(b), list.point(c));
    if !is_convex(pa, pb, pc) {
        return false;
    }

    let mut p = list.node(c).next;
    while p != a {
        let pp = list.point(p);
        let on_corner = pp.approx_eq(pa) || pp.approx_eq(pb) || pp.approx_eq(pc);
        if !on_corner && point_in_triangle(pa, pb, pc, pp) {
            return false;
        }
        p = list.node(p).next;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn run(coords: &[[f64; 2]]) -> (Vec<u32>, usize) {
        let points = pts(coords);
        let sources: Vec<u32> = (0..points.len() as u32).collect();
        let mut list = VertexList::with_capacity(points.len());
        let start = list.push_ring(&points, &sources);
        let mut out = TriangleIndexBuffer::with_triangle_capacity(points.len());
        let left = clip(&mut list, start, &mut out);
        (out.into_vec(), left)
    }

    #[test]
    fn single_triangle_keeps_input_order() {
        assert_eq!(run(&[[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]]), (vec![0, 1, 2], 0));
    }

    #[test]
    fn square_takes_first_ear() {
        let (tris, left) = run(&[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);
        assert_eq!(left, 0);
        assert_eq!(tris, vec![3, 0, 1, 1, 2, 3]);
    }

    #[test]
    fn reflex_vertex_is_not_clipped() {
        // Arrow head pointing up with a notch at (2,1).
        let (tris, left) = run(&[[0.0, 0.0], [2.0, 1.0], [4.0, 0.0], [2.0, 4.0]]);
        assert_eq!(left, 0);
        assert_eq!(tris.len(), 6);
        assert!(tris.chunks(3).all(|t| t[1] != 1));
    }

    #[test]
    fn collinear_vertex_is_never_an_ear_center() {
        let (tris, left) = run(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, 1.0]]);
        assert_eq!(left, 0);
        assert_eq!(tris, vec![3, 0, 1, 1, 2, 3]);
    }

    #[test]
    fn bowtie_reports_leftovers() {
        // Self-intersecting figure eight.
        let (_, left) = run(&[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]);
        assert!(left > 0);
    }
}
