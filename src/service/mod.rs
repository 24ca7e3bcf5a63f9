//! Network-service binding: JSON request body in, status + JSON body out.
//!
//! Transport (listening, routing, framing) belongs to the host server; it hands
//! the raw request body to [`ServiceBinding::handle`] and writes the returned
//! [`ServiceResponse`] back.
//!
//! Request shapes:
//! - `[[x, y], ...]`: outer ring only.
//! - `{"outer": [[x, y], ...], "holes": [[[x, y], ...], ...]}`
//!
//! Success is `200` with a flat JSON array of indices. Failures carry
//! `{"error": {"code", "reason", "message"}}`, plus `"partial"` indices when
//! the engine stopped early.

use serde::{Deserialize, Serialize};

use crate::contract::Binding;
use crate::error::MeshError;
use crate::geometry::TriangleIndexBuffer;
use crate::util::config::{self, Limits};
use crate::validate::RawPayload;

pub const CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestBody {
    Outer(Vec<[f64; 2]>),
    WithHoles {
        outer: Vec<[f64; 2]>,
        #[serde(default)]
        holes: Vec<Vec<[f64; 2]>>,
    },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'static str,
    reason: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    partial: Option<&'a [u32]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// HTTP status for each error class. Resource limits answer like invalid rings.
pub fn status_for(err: &MeshError) -> u16 {
    match err {
        MeshError::MalformedPayload(_) => 400,
        MeshError::InvalidRing { .. }
        | MeshError::EmptyPolygon
        | MeshError::RingTooLarge { .. }
        | MeshError::PolygonTooLarge { .. }
        | MeshError::TooManyHoles { .. }
        | MeshError::Incomplete { .. } => 422,
    }
}

/// Stateless request handler; share one instance across worker threads.
#[derive(Clone, Debug)]
pub struct ServiceBinding {
    limits: Limits,
}

impl ServiceBinding {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Uses the process-wide limits from the config file and installs the
    /// console logger unless the host already has one.
    pub fn from_config() -> Self {
        crate::util::logging::init_logger();
        Self::new(*config::limits())
    }

    pub fn handle(&self, body: &[u8]) -> ServiceResponse {
        self.call(body)
    }
}

impl Binding for ServiceBinding {
    type Input<'a> = &'a [u8];
    type Output = ServiceResponse;

    fn limits(&self) -> &Limits {
        &self.limits
    }

    fn decode(&self, input: Self::Input<'_>) -> Result<RawPayload, MeshError> {
        let body: RequestBody = serde_json::from_slice(input).map_err(|e| {
            MeshError::MalformedPayload(format!("expected an array of [x, y] pairs: {}", e))
        })?;
        Ok(match body {
            RequestBody::Outer(outer) => RawPayload::outer_only(outer),
            RequestBody::WithHoles { outer, holes } => RawPayload { outer, holes },
        })
    }

    fn encode(&self, result: Result<TriangleIndexBuffer, MeshError>) -> ServiceResponse {
        let encoded = match &result {
            Ok(indices) => serde_json::to_vec(indices.as_slice()),
            Err(err) => serde_json::to_vec(&ErrorBody {
                error: ErrorDetail {
                    code: err.code(),
                    reason: err.reason(),
                    message: err.to_string(),
                    partial: err.partial().map(TriangleIndexBuffer::as_slice),
                },
            }),
        };
        let status = match &result {
            Ok(_) => 200,
            Err(err) => status_for(err),
        };

        match encoded {
            Ok(body) => ServiceResponse { status, body },
            Err(e) => {
                log::error!("failed to encode response: {}", e);
                ServiceResponse {
                    status: 500,
                    body: br#"{"error":{"code":"INTERNAL","reason":"encode_failed","message":"response encoding failed"}}"#
                        .to_vec(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn handle(body: &str) -> (u16, Value) {
        let resp = ServiceBinding::new(Limits::default()).handle(body.as_bytes());
        (resp.status, serde_json::from_slice(&resp.body).unwrap())
    }

    #[test]
    fn triangle_round_trip() {
        let (status, body) = handle("[[0,0],[1,0],[0.5,1]]");
        assert_eq!(status, 200);
        assert_eq!(body, serde_json::json!([0, 1, 2]));
    }

    #[test]
    fn object_shape_carries_holes() {
        let (status, body) = handle(
            r#"{"outer": [[0,0],[10,0],[10,10],[0,10]],
                "holes": [[[3,3],[7,3],[7,7],[3,7]]]}"#,
        );
        assert_eq!(status, 200);
        assert_eq!(body.as_array().unwrap().len(), 8 * 3);
    }

    #[test]
    fn bad_json_is_a_400() {
        let (status, body) = handle("[[0,0],[1,0]");
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "MALFORMED_PAYLOAD");

        let (status, _) = handle("[[0,0,0],[1,0,0],[1,1,1]]");
        assert_eq!(status, 400);
    }

    #[test]
    fn rejections_are_422_with_reason() {
        let (status, body) = handle("[]");
        assert_eq!(status, 422);
        assert_eq!(body["error"]["code"], "EMPTY_POLYGON");

        let (status, body) = handle("[[0,0],[1,1],[1,1],[0,0]]");
        assert_eq!(status, 422);
        assert_eq!(body["error"]["code"], "INVALID_RING");
        assert_eq!(body["error"]["reason"], "too_few_distinct_points");
        assert!(body["error"].get("partial").is_none());
    }

    #[test]
    fn size_limit_answers_like_an_invalid_ring() {
        let binding = ServiceBinding::new(Limits { max_ring_vertices: 3, max_holes: 0, ..Limits::default() });
        let resp = binding.handle(b"[[0,0],[1,0],[1,1],[0,1]]");
        assert_eq!(resp.status, 422);
        let body: Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_RING");
        assert_eq!(body["error"]["reason"], "ring_too_large");
    }

    #[test]
    fn incomplete_returns_partial_indices() {
        let (status, body) = handle("[[0,0],[2,2],[2,0],[0,2]]");
        assert_eq!(status, 422);
        assert_eq!(body["error"]["code"], "TRIANGULATION_INCOMPLETE");
        assert!(body["error"]["partial"].is_array());
    }
}
