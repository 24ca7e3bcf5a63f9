//! The contract every binding honours.
//!
//! Design rule: bindings only translate. A binding decodes its transport input
//! into a [`RawPayload`] and encodes the result back; validation and
//! triangulation always run through [`triangulate_payload`], so two bindings
//! fed the same coordinates return the same indices in the same order.

use crate::engine::triangulate;
use crate::error::MeshError;
use crate::geometry::TriangleIndexBuffer;
use crate::util::config::Limits;
use crate::validate::{validate, RawPayload};

/// Shared pipeline: validate → build polygon → triangulate.
/// An incomplete run surfaces as [`MeshError::Incomplete`] with the partial buffer.
pub fn triangulate_payload(payload: &RawPayload, limits: &Limits) -> Result<TriangleIndexBuffer, MeshError> {
    let polygon = validate(payload, limits)?;
    triangulate(&polygon).into_result()
}

/// One execution surface.
///
/// Implementors provide `decode` and `encode` only; [`Binding::call`] is the
/// single code path all of them share.
pub trait Binding {
    type Input<'a>;
    type Output;

    fn limits(&self) -> &Limits;

    /// Transport input → raw coordinates. No geometric logic belongs here.
    fn decode(&self, input: Self::Input<'_>) -> Result<RawPayload, MeshError>;

    /// Outcome → transport output.
    fn encode(&self, result: Result<TriangleIndexBuffer, MeshError>) -> Self::Output;

    fn call(&self, input: Self::Input<'_>) -> Self::Output {
        let result = self
            .decode(input)
            .and_then(|payload| triangulate_payload(&payload, self.limits()));
        self.encode(result)
    }
}
