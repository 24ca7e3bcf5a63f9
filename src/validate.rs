//! Pre-flight checks on raw coordinates before any triangulation work.
//!
//! Checks run in a fixed order and stop at the first failure:
//! payload non-empty → ring point counts → finite coordinates → size ceilings
//! (hole count, each ring, then all rings together).
//! Only then is the typed [`Polygon`] built (which collapses duplicates).

use crate::error::{MeshError, RingDefect};
use crate::geometry::{Point, Polygon};
use crate::util::config::Limits;

/// Untyped coordinates as a binding decoded them. Ring 0 is the outer ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPayload {
    pub outer: Vec<[f64; 2]>,
    pub holes: Vec<Vec<[f64; 2]>>,
}

impl RawPayload {
    pub fn outer_only(outer: Vec<[f64; 2]>) -> Self {
        Self { outer, holes: Vec::new() }
    }

    /// Decode an interleaved `[x0, y0, x1, y1, ...]` buffer. `hole_starts` are
    /// vertex offsets where each hole begins, as in earcut-style APIs.
    pub fn from_flat(coords: &[f64], hole_starts: &[u32]) -> Result<Self, MeshError> {
        if coords.len() % 2 != 0 {
            return Err(MeshError::MalformedPayload(format!(
                "coordinate buffer has odd length {}",
                coords.len()
            )));
        }
        let vertices = coords.len() / 2;

        let mut prev = 0usize;
        for &start in hole_starts {
            let start = start as usize;
            if start <= prev || start >= vertices {
                return Err(MeshError::MalformedPayload(format!(
                    "hole offset {} out of order or out of range (vertices: {})",
                    start, vertices
                )));
            }
            prev = start;
        }

        let pairs: Vec<[f64; 2]> = coords.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
        let mut bounds: Vec<usize> = hole_starts.iter().map(|&s| s as usize).collect();
        bounds.push(vertices);

        let outer = pairs[..bounds[0]].to_vec();
        let holes = bounds.windows(2).map(|w| pairs[w[0]..w[1]].to_vec()).collect();
        Ok(Self { outer, holes })
    }

    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(Vec::len).sum::<usize>()
    }

    fn rings(&self) -> impl Iterator<Item = (usize, &[[f64; 2]])> + '_ {
        std::iter::once(self.outer.as_slice())
            .chain(self.holes.iter().map(Vec::as_slice))
            .enumerate()
    }
}

/// Check `payload` against the structural rules and `limits`, then build the
/// typed polygon. Never mutates the payload.
pub fn validate(payload: &RawPayload, limits: &Limits) -> Result<Polygon, MeshError> {
    check(payload, limits).map_err(|err| {
        log::debug!("rejected payload ({} vertices): {}", payload.vertex_count(), err);
        err
    })
}

fn check(payload: &RawPayload, limits: &Limits) -> Result<Polygon, MeshError> {
    if payload.outer.is_empty() {
        return Err(MeshError::EmptyPolygon);
    }

    for (ring, points) in payload.rings() {
        if points.len() < 3 {
            return Err(MeshError::InvalidRing {
                ring,
                defect: RingDefect::TooFewPoints { points: points.len() },
            });
        }
    }

    for (ring, points) in payload.rings() {
        if let Some(vertex) = points.iter().position(|[x, y]| !x.is_finite() || !y.is_finite()) {
            return Err(MeshError::InvalidRing {
                ring,
                defect: RingDefect::NonFiniteCoordinate { vertex },
            });
        }
    }

    if payload.holes.len() > limits.max_holes {
        return Err(MeshError::TooManyHoles { holes: payload.holes.len(), max: limits.max_holes });
    }
    for (ring, points) in payload.rings() {
        if points.len() > limits.max_ring_vertices {
            return Err(MeshError::RingTooLarge {
                ring,
                len: points.len(),
                max: limits.max_ring_vertices,
            });
        }
    }
    let vertices = payload.vertex_count();
    if vertices > limits.max_total_vertices {
        return Err(MeshError::PolygonTooLarge { vertices, max: limits.max_total_vertices });
    }

    let outer: Vec<Point> = payload.outer.iter().copied().map(Point::from).collect();
    let holes: Vec<Vec<Point>> = payload
        .holes
        .iter()
        .map(|h| h.iter().copied().map(Point::from).collect())
        .collect();
    Polygon::new(&outer, &holes)
}
