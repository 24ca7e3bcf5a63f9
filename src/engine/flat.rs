//! Working copy of a polygon: every ring concatenated into one coordinate run,
//! with winding normalized for the sweep.

use crate::geometry::{Point, Polygon, Ring};

/// All rings back to back; `hole_starts[i]` is the offset of hole `i`.
/// Outer ring is counter-clockwise, holes clockwise.
#[derive(Debug)]
pub(crate) struct FlatVertexBuffer {
    points: Vec<Point>,
    sources: Vec<u32>,
    hole_starts: Vec<usize>,
}

impl FlatVertexBuffer {
    pub(crate) fn normalized(polygon: &Polygon) -> Self {
        let total = polygon.outer().len() + polygon.holes().iter().map(Ring::len).sum::<usize>();
        let mut flat = Self {
            points: Vec::with_capacity(total),
            sources: Vec::with_capacity(total),
            hole_starts: Vec::with_capacity(polygon.holes().len()),
        };

        flat.append(polygon.outer(), false);
        for hole in polygon.holes() {
            flat.hole_starts.push(flat.points.len());
            flat.append(hole, true);
        }
        flat
    }

    fn append(&mut self, ring: &Ring, clockwise: bool) {
        let start = self.points.len();
        self.points.extend_from_slice(ring.points());
        self.sources.extend_from_slice(ring.sources());
        if ring.is_clockwise() != clockwise {
            self.points[start..].reverse();
            self.sources[start..].reverse();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn hole_count(&self) -> usize {
        self.hole_starts.len()
    }

    /// Ring `0` is the outer ring, `1..` the holes.
    pub(crate) fn ring(&self, index: usize) -> (&[Point], &[u32]) {
        let start = if index == 0 { 0 } else { self.hole_starts[index - 1] };
        let end = self.hole_starts.get(index).copied().unwrap_or(self.points.len());
        (&self.points[start..end], &self.sources[start..end])
    }
}
