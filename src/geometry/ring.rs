use super::predicates::{orientation, signed_area};
use super::Point;
use crate::error::{MeshError, RingDefect};

/// One closed boundary loop.
///
/// Consecutive duplicates (and a repeated closing point) are collapsed on
/// construction. Each kept point remembers its index in the caller's flattened
/// vertex sequence, so triangles always refer to caller positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
    sources: Vec<u32>,
}

impl Ring {
    /// Build a standalone ring whose source indices start at 0.
    pub fn new(points: &[Point]) -> Result<Self, MeshError> {
        Self::build(points, 0, 0)
    }

    /// `ring` is the position used in error reports, `first_index` the offset of
    /// `points[0]` in the flattened input.
    pub(crate) fn build(points: &[Point], ring: usize, first_index: u32) -> Result<Self, MeshError> {
        let invalid = |defect| MeshError::InvalidRing { ring, defect };

        if let Some(vertex) = points.iter().position(|p| !p.is_finite()) {
            return Err(invalid(RingDefect::NonFiniteCoordinate { vertex }));
        }

        let mut kept: Vec<Point> = Vec::with_capacity(points.len());
        let mut sources: Vec<u32> = Vec::with_capacity(points.len());
        for (offset, &p) in (0u32..).zip(points.iter()) {
            if kept.last().map(|&q| q.approx_eq(p)).unwrap_or(false) {
                continue;
            }
            kept.push(p);
            sources.push(first_index + offset);
        }
        // Explicitly closed rings repeat the first point at the end.
        while kept.len() >= 2 && kept[0].approx_eq(kept[kept.len() - 1]) {
            kept.pop();
            sources.pop();
        }

        if kept.len() < 3 {
            return Err(invalid(RingDefect::TooFewDistinctPoints { distinct: kept.len() }));
        }

        let n = kept.len();
        let all_collinear =
            (0..n).all(|i| orientation(kept[(i + n - 1) % n], kept[i], kept[(i + 1) % n]) == 0);
        if all_collinear {
            return Err(invalid(RingDefect::Collinear));
        }

        Ok(Self { points: kept, sources })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Flattened-input index of each kept point.
    pub fn sources(&self) -> &[u32] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive for clockwise rings (y up).
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }
}

/// One outer ring plus holes, sharing one coordinate space.
///
/// Hole nesting is not checked geometrically; winding is not assumed (the engine
/// normalizes it).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    outer: Ring,
    holes: Vec<Ring>,
    vertex_count: usize,
}

impl Polygon {
    /// Flattened order: `outer` first, then each hole in the given order.
    pub fn new<H: AsRef<[Point]>>(outer: &[Point], holes: &[H]) -> Result<Self, MeshError> {
        if outer.is_empty() {
            return Err(MeshError::EmptyPolygon);
        }

        let vertex_count = outer.len() + holes.iter().map(|h| h.as_ref().len()).sum::<usize>();
        if u32::try_from(vertex_count).is_err() {
            return Err(MeshError::RingTooLarge {
                ring: 0,
                len: vertex_count,
                max: u32::MAX as usize,
            });
        }

        let outer_ring = Ring::build(outer, 0, 0)?;
        let mut offset = outer.len() as u32;
        let mut hole_rings = Vec::with_capacity(holes.len());
        for (i, hole) in holes.iter().enumerate() {
            let hole = hole.as_ref();
            hole_rings.push(Ring::build(hole, i + 1, offset)?);
            offset += hole.len() as u32;
        }

        Ok(Self { outer: outer_ring, holes: hole_rings, vertex_count })
    }

    /// Build from an unordered ring list plus the position of the outer ring.
    /// The remaining rings become holes in their original order.
    pub fn from_rings<R: AsRef<[Point]>>(rings: &[R], outer: Option<usize>) -> Result<Self, MeshError> {
        let outer_idx = match outer {
            Some(i) if i < rings.len() => i,
            _ => return Err(MeshError::EmptyPolygon),
        };
        let holes: Vec<&[Point]> = rings
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != outer_idx)
            .map(|(_, r)| r.as_ref())
            .collect();
        Self::new(rings[outer_idx].as_ref(), &holes)
    }

    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Number of vertices in the caller's flattened input, duplicates included.
    /// Every emitted index is below this value.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}
