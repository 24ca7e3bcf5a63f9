//! ringmesh (rlib + staticlib + cdylib)
//!
//! Ear-clipping triangulation for simple polygons with holes, exposed through
//! a JSON service binding, a browser (wasm) binding and a small C ABI. All of
//! them run the same pipeline in [`contract`].
//!
//! Design rule: keep this file thin.

pub mod browser;
pub mod contract;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod service;
pub mod util;
pub mod validate;

mod ffi;

pub use engine::{triangulate, Triangulation, TriangulationIncomplete};
pub use error::{MeshError, RingDefect};
pub use geometry::{Point, Polygon, Ring, TriangleIndexBuffer, EPSILON};
pub use util::config::Limits;
pub use validate::{validate, RawPayload};

// Export C ABI symbols.
pub use ffi::exports::*;
pub use ffi::types::{
    RINGMESH_BUFFER_TOO_SMALL, RINGMESH_EMPTY_POLYGON, RINGMESH_INCOMPLETE, RINGMESH_INVALID_RING,
    RINGMESH_MALFORMED_PAYLOAD, RINGMESH_NULL_POINTER, RINGMESH_OK,
};
