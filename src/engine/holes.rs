//! Hole elimination: bridge each hole into the outer ring so one single-ring
//! sweep covers the whole polygon.
//!
//! Holes are handled left to right by their leftmost vertex. The bridge runs
//! from that vertex to the nearest vertex of the merged ring it can see; the
//! search order is fixed (distance, x, y, node id) so output is deterministic.

use super::list::VertexList;
use crate::geometry::predicates::{cross, orientation, segments_intersect, EPSILON};
use crate::geometry::Point;

/// A hole ring inside the shared vertex list.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HoleRing {
    /// Position of the hole in the caller's input (0-based).
    pub ordinal: usize,
    pub start: usize,
}

/// Merge `holes` into the ring through `outer`. Returns the ordinals of holes
/// that could not be bridged.
pub(crate) fn link_holes(list: &mut VertexList, outer: usize, holes: &[HoleRing]) -> Vec<usize> {
    let mut queue: Vec<(usize, usize)> = holes
        .iter()
        .map(|h| (h.ordinal, leftmost(list, h.start)))
        .collect();
    queue.sort_by(|&(oa, a), &(ob, b)| {
        let (pa, pb) = (list.point(a), list.point(b));
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y)).then(oa.cmp(&ob))
    });

    let mut unbridged = Vec::new();
    for (i, &(ordinal, hole)) in queue.iter().enumerate() {
        let pending: Vec<usize> = queue[i + 1..].iter().map(|&(_, start)| start).collect();
        match find_bridge(list, outer, hole, &pending) {
            Some(target) => {
                list.bridge(target, hole);
            }
            None => {
                log::warn!("hole {} has no visible vertex on the outer ring; left unbridged", ordinal);
                unbridged.push(ordinal);
            }
        }
    }
    unbridged.sort_unstable();
    unbridged
}

/// Leftmost vertex of a ring, lowest y on ties.
fn leftmost(list: &VertexList, start: usize) -> usize {
    let mut best = start;
    for i in list.ring(start) {
        let (p, b) = (list.point(i), list.point(best));
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    best
}

fn find_bridge(list: &VertexList, outer: usize, hole: usize, pending: &[usize]) -> Option<usize> {
    let h = list.point(hole);
    let mut candidates: Vec<usize> = list.ring(outer).collect();
    candidates.sort_by(|&a, &b| {
        let (pa, pb) = (list.point(a), list.point(b));
        pa.distance_sq(h)
            .total_cmp(&pb.distance_sq(h))
            .then(pa.x.total_cmp(&pb.x))
            .then(pa.y.total_cmp(&pb.y))
            .then(a.cmp(&b))
    });

    candidates.into_iter().find(|&m| {
        let p = list.point(m);
        locally_inside(list, m, h)
            && locally_inside(list, hole, p)
            && !crosses_ring(list, outer, p, h)
            && !crosses_ring(list, hole, p, h)
            && pending.iter().all(|&other| !crosses_ring(list, other, p, h))
    })
}

/// `target` lies strictly inside the interior sector at node `i`. Interior is
/// on the left of each edge: inside the outer ring, outside a clockwise hole.
fn locally_inside(list: &VertexList, i: usize, target: Point) -> bool {
    let node = list.node(i);
    let (a, m, b) = (list.point(node.prev), node.point, list.point(node.next));
    let left_of_incoming = orientation(a, m, target) > 0;
    let left_of_outgoing = orientation(m, b, target) > 0;
    if cross(a, m, b) >= -EPSILON {
        left_of_incoming && left_of_outgoing
    } else {
        left_of_incoming || left_of_outgoing
    }
}

/// Segment `pq` touches an edge of the ring through `start`. Edges sharing an
/// endpoint position with `p` or `q` are skipped; the sector tests cover them.
fn crosses_ring(list: &VertexList, start: usize, p: Point, q: Point) -> bool {
    list.ring(start).any(|i| {
        let a = list.point(i);
        let b = list.point(list.node(i).next);
        let shares_endpoint = a.approx_eq(p) || a.approx_eq(q) || b.approx_eq(p) || b.approx_eq(q);
        !shares_endpoint && segments_intersect(a, b, p, q)
    })
}
