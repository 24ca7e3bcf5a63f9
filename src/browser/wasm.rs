//! `wasm-bindgen` exports for the browser module.
//!
//! JavaScript passes a `Float64Array` of interleaved coordinates and receives a
//! `Uint32Array` of triangle indices. Failures throw an `Error` whose `code`
//! and `reason` properties match the service binding's error body.

use wasm_bindgen::prelude::*;

use super::{BrowserBinding, BrowserError, FlatInput};
use crate::contract::Binding;

/// Triangulate an outer ring given as `[x0, y0, x1, y1, ...]`.
#[wasm_bindgen(js_name = triangulate)]
pub fn triangulate_js(coords: &[f64]) -> Result<Vec<u32>, JsValue> {
    run(FlatInput::outer(coords))
}

/// Triangulate an outer ring plus holes. `hole_starts` are vertex offsets
/// where each hole begins inside `coords`.
#[wasm_bindgen(js_name = triangulateWithHoles)]
pub fn triangulate_with_holes_js(coords: &[f64], hole_starts: &[u32]) -> Result<Vec<u32>, JsValue> {
    run(FlatInput { coords, hole_starts })
}

/// Largest ring the module accepts.
#[wasm_bindgen(js_name = maxRingVertices)]
pub fn max_ring_vertices_js() -> u32 {
    u32::try_from(crate::util::config::limits().max_ring_vertices).unwrap_or(u32::MAX)
}

fn run(input: FlatInput<'_>) -> Result<Vec<u32>, JsValue> {
    crate::util::logging::init_logger();
    BrowserBinding::from_config().call(input).map_err(to_js_error)
}

fn to_js_error(err: BrowserError) -> JsValue {
    let js_err = js_sys::Error::new(&err.message);
    js_err.set_name(err.code);
    let obj: &JsValue = js_err.as_ref();
    // Reflect::set only fails on frozen objects; a fresh Error is not one.
    let _ = js_sys::Reflect::set(obj, &"code".into(), &err.code.into());
    let _ = js_sys::Reflect::set(obj, &"reason".into(), &err.reason.into());
    if let Some(partial) = err.partial {
        let array = js_sys::Uint32Array::from(partial.as_slice());
        let _ = js_sys::Reflect::set(obj, &"partial".into(), &array.into());
    }
    js_err.into()
}
