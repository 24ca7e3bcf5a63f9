//! Error taxonomy shared by the model, validation and every binding.
//!
//! Each error maps to a stable `code()` (the taxonomy class the caller acts on)
//! and a `reason()` (the specific check that failed). Bindings translate these
//! into their own transport representation; nothing here knows about HTTP or JS.

use thiserror::Error;

use crate::engine::TriangulationIncomplete;
use crate::geometry::TriangleIndexBuffer;

/// What exactly is wrong with a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RingDefect {
    #[error("ring has {points} points, at least 3 are required")]
    TooFewPoints { points: usize },
    #[error("ring has {distinct} distinct points after collapsing duplicates, at least 3 are required")]
    TooFewDistinctPoints { distinct: usize },
    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate { vertex: usize },
    #[error("all points of the ring are collinear")]
    Collinear,
}

impl RingDefect {
    pub fn reason(&self) -> &'static str {
        match self {
            RingDefect::TooFewPoints { .. } => "too_few_points",
            RingDefect::TooFewDistinctPoints { .. } => "too_few_distinct_points",
            RingDefect::NonFiniteCoordinate { .. } => "non_finite_coordinate",
            RingDefect::Collinear => "collinear_ring",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum MeshError {
    /// Structural violation in one ring. `ring` is 0 for the outer ring and
    /// `1 + n` for the n-th hole.
    #[error("ring {ring} is invalid: {defect}")]
    InvalidRing { ring: usize, defect: RingDefect },

    #[error("polygon has no outer ring")]
    EmptyPolygon,

    /// Resource limit: ring exceeds the configured vertex ceiling.
    #[error("ring {ring} has {len} vertices, the limit is {max}")]
    RingTooLarge { ring: usize, len: usize, max: usize },

    /// Resource limit: all rings together exceed the configured vertex ceiling.
    #[error("polygon has {vertices} vertices in total, the limit is {max}")]
    PolygonTooLarge { vertices: usize, max: usize },

    /// Resource limit: more holes than the configured ceiling.
    #[error("polygon has {holes} holes, the limit is {max}")]
    TooManyHoles { holes: usize, max: usize },

    /// The transport representation could not be decoded into coordinates.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The engine ran but could not clear the whole ring. `partial` holds every
    /// triangle emitted before it stopped.
    #[error("triangulation incomplete: {signal}")]
    Incomplete {
        signal: TriangulationIncomplete,
        partial: TriangleIndexBuffer,
    },
}

impl MeshError {
    pub const INVALID_RING: &'static str = "INVALID_RING";
    pub const EMPTY_POLYGON: &'static str = "EMPTY_POLYGON";
    pub const MALFORMED_PAYLOAD: &'static str = "MALFORMED_PAYLOAD";
    pub const TRIANGULATION_INCOMPLETE: &'static str = "TRIANGULATION_INCOMPLETE";

    /// Taxonomy class. Resource limits share the invalid-ring class.
    pub fn code(&self) -> &'static str {
        match self {
            MeshError::InvalidRing { .. }
            | MeshError::RingTooLarge { .. }
            | MeshError::PolygonTooLarge { .. }
            | MeshError::TooManyHoles { .. } => Self::INVALID_RING,
            MeshError::EmptyPolygon => Self::EMPTY_POLYGON,
            MeshError::MalformedPayload(_) => Self::MALFORMED_PAYLOAD,
            MeshError::Incomplete { .. } => Self::TRIANGULATION_INCOMPLETE,
        }
    }

    /// The specific check that rejected the input.
    pub fn reason(&self) -> &'static str {
        match self {
            MeshError::InvalidRing { defect, .. } => defect.reason(),
            MeshError::EmptyPolygon => "empty_polygon",
            MeshError::RingTooLarge { .. } => "ring_too_large",
            MeshError::PolygonTooLarge { .. } => "polygon_too_large",
            MeshError::TooManyHoles { .. } => "too_many_holes",
            MeshError::MalformedPayload(_) => "malformed_payload",
            MeshError::Incomplete { signal, .. } if !signal.unbridged_holes.is_empty() => "unbridged_holes",
            MeshError::Incomplete { .. } => "unclipped_vertices",
        }
    }

    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            MeshError::RingTooLarge { .. } | MeshError::PolygonTooLarge { .. } | MeshError::TooManyHoles { .. }
        )
    }

    /// Triangles produced before an incomplete run stopped.
    pub fn partial(&self) -> Option<&TriangleIndexBuffer> {
        match self {
            MeshError::Incomplete { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
