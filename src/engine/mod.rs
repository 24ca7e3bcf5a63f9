//! Triangulation engine: polygon-with-holes → triangle index buffer.
//!
//! Design rule: the engine is a pure function. It allocates its working
//! buffers per call, holds nothing between calls and contains no
//! target-specific code, so every compiled target produces the same indices.
//!
//! Pipeline: normalize winding (outer CCW, holes CW) → bridge holes into the
//! outer ring → ear-clip the merged ring.

mod earclip;
pub(crate) mod flat;
mod holes;
mod list;

use crate::error::MeshError;
use crate::geometry::{Polygon, TriangleIndexBuffer};
use flat::FlatVertexBuffer;
use holes::HoleRing;
use list::VertexList;

/// Signal that the engine stopped before the whole area was covered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangulationIncomplete {
    /// Vertices still in the ring when no further ear could be found.
    pub remaining_vertices: usize,
    /// Input positions (0-based) of holes that could not be bridged.
    pub unbridged_holes: Vec<usize>,
}

impl std::fmt::Display for TriangulationIncomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vertices left unclipped, {} holes not bridged",
            self.remaining_vertices,
            self.unbridged_holes.len()
        )
    }
}

/// Result of one engine run: the triangles plus an optional incomplete signal.
/// Callers must check [`Triangulation::incomplete`] before treating the buffer
/// as a full mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    indices: TriangleIndexBuffer,
    incomplete: Option<TriangulationIncomplete>,
}

impl Triangulation {
    pub fn indices(&self) -> &TriangleIndexBuffer {
        &self.indices
    }

    pub fn incomplete(&self) -> Option<&TriangulationIncomplete> {
        self.incomplete.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.incomplete.is_none()
    }

    /// Complete runs yield the buffer; incomplete runs become
    /// [`MeshError::Incomplete`] carrying the partial buffer.
    pub fn into_result(self) -> Result<TriangleIndexBuffer, MeshError> {
        match self.incomplete {
            None => Ok(self.indices),
            Some(signal) => Err(MeshError::Incomplete { signal, partial: self.indices }),
        }
    }
}

/// Triangulate `polygon` by ear clipping.
///
/// Indices refer to the polygon's flattened input (outer ring first, then
/// holes, each in input order). Never panics on bad geometry: self-intersecting
/// or otherwise untriangulable input yields a partial buffer plus
/// [`TriangulationIncomplete`].
pub fn triangulate(polygon: &Polygon) -> Triangulation {
    let flat = FlatVertexBuffer::normalized(polygon);

    let mut list = VertexList::with_capacity(flat.len() + 2 * flat.hole_count());
    let (outer_points, outer_sources) = flat.ring(0);
    let outer = list.push_ring(outer_points, outer_sources);

    let holes: Vec<HoleRing> = (0..flat.hole_count())
        .map(|ordinal| {
            let (points, sources) = flat.ring(ordinal + 1);
            HoleRing { ordinal, start: list.push_ring(points, sources) }
        })
        .collect();
    let unbridged_holes = holes::link_holes(&mut list, outer, &holes);

    let merged = list.ring_len(outer);
    let mut indices = TriangleIndexBuffer::with_triangle_capacity(merged.saturating_sub(2));
    let remaining_vertices = earclip::clip(&mut list, outer, &mut indices);

    let incomplete = if remaining_vertices == 0 && unbridged_holes.is_empty() {
        None
    } else {
        log::warn!(
            "triangulation incomplete: {} of {} vertices left, {} holes unbridged",
            remaining_vertices,
            merged,
            unbridged_holes.len()
        );
        Some(TriangulationIncomplete { remaining_vertices, unbridged_holes })
    };

    log::debug!(
        "triangulated {} vertices ({} holes) into {} triangles",
        polygon.vertex_count(),
        flat.hole_count(),
        indices.triangle_count()
    );

    Triangulation { indices, incomplete }
}
