//! Index-linked circular vertex lists backing hole linking and the sweep.
//!
//! Nodes live in one `Vec` and are never freed; unlinking only rewires
//! `prev`/`next`. Several independent rings can share one list until holes are
//! bridged into the outer ring.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub point: Point,
    pub source: u32,
    pub prev: usize,
    pub next: usize,
}

#[derive(Debug, Default)]
pub(crate) struct VertexList {
    nodes: Vec<Node>,
}

impl VertexList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Append a closed ring and return its first node.
    /// `points` and `sources` must have the same, non-zero length.
    pub(crate) fn push_ring(&mut self, points: &[Point], sources: &[u32]) -> usize {
        let first = self.nodes.len();
        let n = points.len();
        for (i, (&point, &source)) in points.iter().zip(sources).enumerate() {
            self.nodes.push(Node {
                point,
                source,
                prev: first + (i + n - 1) % n,
                next: first + (i + 1) % n,
            });
        }
        first
    }

    #[inline(always)]
    pub(crate) fn node(&self, i: usize) -> &Node {
        &self.nodes[i]
    }

    #[inline(always)]
    pub(crate) fn point(&self, i: usize) -> Point {
        self.nodes[i].point
    }

    /// Node ids of the ring containing `start`, in traversal order.
    pub(crate) fn ring(&self, start: usize) -> RingIter<'_> {
        RingIter { list: self, start, cur: Some(start) }
    }

    pub(crate) fn ring_len(&self, start: usize) -> usize {
        self.ring(start).count()
    }

    /// Detach `i` from its ring; neighbours are joined.
    pub(crate) fn unlink(&mut self, i: usize) {
        let Node { prev, next, .. } = self.nodes[i];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Join the ring through `b` into the ring through `a` with a two-way bridge
    /// `a -> b ... b' -> a'`. Both endpoints are duplicated; returns `b'`.
    pub(crate) fn bridge(&mut self, a: usize, b: usize) -> usize {
        let a2 = self.nodes.len();
        let b2 = a2 + 1;
        let a_next = self.nodes[a].next;
        let b_prev = self.nodes[b].prev;

        self.nodes.push(Node { point: self.nodes[a].point, source: self.nodes[a].source, prev: b2, next: a_next });
        self.nodes.push(Node { point: self.nodes[b].point, source: self.nodes[b].source, prev: b_prev, next: a2 });

        self.nodes[a].next = b;
        self.nodes[b].prev = a;
        self.nodes[a_next].prev = a2;
        self.nodes[b_prev].next = b2;
        b2
    }

    /// Shoelace area of the ring through `start`, positive when clockwise.
    pub(crate) fn signed_area(&self, start: usize) -> f64 {
        let mut sum = 0.0;
        for i in self.ring(start) {
            let p = self.point(i);
            let q = self.point(self.nodes[i].prev);
            sum += (p.x - q.x) * (p.y + q.y);
        }
        0.5 * sum
    }
}

pub(crate) struct RingIter<'a> {
    list: &'a VertexList,
    start: usize,
    cur: Option<usize>,
}

impl Iterator for RingIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cur = self.cur?;
        let next = self.list.nodes[cur].next;
        self.cur = if next == self.start { None } else { Some(next) };
        Some(cur)
    }
}
