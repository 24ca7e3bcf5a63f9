//! In-browser binding: numeric buffers in, numeric buffer out, no JSON.
//!
//! [`BrowserBinding`] holds the translation logic and builds on every target so
//! the parity corpus can run natively; the `wasm` feature adds the
//! `wasm-bindgen` exports in [`wasm`] on top of it.

use crate::contract::Binding;
use crate::error::MeshError;
use crate::geometry::TriangleIndexBuffer;
use crate::util::config::{self, Limits};
use crate::validate::RawPayload;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Interleaved coordinates plus hole start offsets (in vertices).
#[derive(Clone, Copy, Debug)]
pub struct FlatInput<'a> {
    pub coords: &'a [f64],
    pub hole_starts: &'a [u32],
}

impl<'a> FlatInput<'a> {
    pub fn outer(coords: &'a [f64]) -> Self {
        Self { coords, hole_starts: &[] }
    }
}

/// Error value handed back to JavaScript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserError {
    pub code: &'static str,
    pub reason: &'static str,
    pub message: String,
    /// Indices emitted before an incomplete run stopped.
    pub partial: Option<Vec<u32>>,
}

impl From<MeshError> for BrowserError {
    fn from(err: MeshError) -> Self {
        Self {
            code: err.code(),
            reason: err.reason(),
            message: err.to_string(),
            partial: err.partial().map(|p| p.as_slice().to_vec()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BrowserBinding {
    limits: Limits,
}

impl BrowserBinding {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn from_config() -> Self {
        Self::new(*config::limits())
    }
}

impl Binding for BrowserBinding {
    type Input<'a> = FlatInput<'a>;
    type Output = Result<Vec<u32>, BrowserError>;

    fn limits(&self) -> &Limits {
        &self.limits
    }

    fn decode(&self, input: Self::Input<'_>) -> Result<RawPayload, MeshError> {
        RawPayload::from_flat(input.coords, input.hole_starts)
    }

    fn encode(&self, result: Result<TriangleIndexBuffer, MeshError>) -> Self::Output {
        result.map(TriangleIndexBuffer::into_vec).map_err(BrowserError::from)
    }
}
