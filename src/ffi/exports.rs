use core::ffi::c_char;
use std::cell::RefCell;

use crate::browser::FlatInput;
use crate::contract::Binding;
use crate::error::MeshError;
use crate::ffi::types::*;
use crate::geometry::TriangleIndexBuffer;
use crate::util::config::{self, Limits};
use crate::validate::RawPayload;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_last_error(msg: String) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(msg));
}

fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow_mut().take())
}

/// Native binding: same flat layout as the browser one, typed result out.
struct FfiBinding {
    limits: Limits,
}

impl Binding for FfiBinding {
    type Input<'a> = FlatInput<'a>;
    type Output = Result<TriangleIndexBuffer, MeshError>;

    fn limits(&self) -> &Limits {
        &self.limits
    }

    fn decode(&self, input: Self::Input<'_>) -> Result<RawPayload, MeshError> {
        RawPayload::from_flat(input.coords, input.hole_starts)
    }

    fn encode(&self, result: Result<TriangleIndexBuffer, MeshError>) -> Self::Output {
        result
    }
}

fn status_for(err: &MeshError) -> i32 {
    match err {
        MeshError::MalformedPayload(_) => RINGMESH_MALFORMED_PAYLOAD,
        MeshError::EmptyPolygon => RINGMESH_EMPTY_POLYGON,
        MeshError::Incomplete { .. } => RINGMESH_INCOMPLETE,
        MeshError::InvalidRing { .. }
        | MeshError::RingTooLarge { .. }
        | MeshError::PolygonTooLarge { .. }
        | MeshError::TooManyHoles { .. } => RINGMESH_INVALID_RING,
    }
}

/// Copy `indices` into `out`, or report the size the caller must provide.
fn write_indices(indices: &[u32], out: *mut u32, out_cap: usize, out_len: *mut usize) -> bool {
    // Safety: `out_len` checked non-null by the caller.
    unsafe { *out_len = indices.len() };
    if indices.len() > out_cap {
        return false;
    }
    if !indices.is_empty() {
        // Safety: caller provided writable memory for `out_cap` u32s.
        unsafe { core::ptr::copy_nonoverlapping(indices.as_ptr(), out, indices.len()) };
    }
    true
}

/// Triangulate `coord_len` interleaved doubles with `hole_count` hole start
/// offsets. On `RINGMESH_OK` (and `RINGMESH_INCOMPLETE`, with the partial
/// result) `*out_len` indices are written to `out`. On
/// `RINGMESH_BUFFER_TOO_SMALL` nothing is written and `*out_len` is the
/// length needed. Any other status leaves a message for
/// [`ringmesh_last_error`] on the calling thread.
#[no_mangle]
pub extern "C" fn ringmesh_triangulate(
    coords: *const f64,
    coord_len: usize,
    hole_starts: *const u32,
    hole_count: usize,
    out: *mut u32,
    out_cap: usize,
    out_len: *mut usize,
) -> i32 {
    crate::util::logging::init_logger();

    if out_len.is_null() || (out.is_null() && out_cap > 0) {
        set_last_error("null output pointer".to_string());
        return RINGMESH_NULL_POINTER;
    }
    // Safety: caller promises the pointer/length pairs describe readable memory.
    let coords = unsafe { slice_from_raw(coords, coord_len) };
    // Safety: as above.
    let hole_starts = unsafe { slice_from_raw(hole_starts, hole_count) };
    let (coords, hole_starts) = match (coords, hole_starts) {
        (Some(c), Some(h)) => (c, h),
        _ => {
            set_last_error("null input pointer".to_string());
            return RINGMESH_NULL_POINTER;
        }
    };

    let binding = FfiBinding { limits: *config::limits() };
    match binding.call(FlatInput { coords, hole_starts }) {
        Ok(indices) => {
            if write_indices(indices.as_slice(), out, out_cap, out_len) {
                RINGMESH_OK
            } else {
                RINGMESH_BUFFER_TOO_SMALL
            }
        }
        Err(err) => {
            let status = status_for(&err);
            let partial = err.partial().map(TriangleIndexBuffer::as_slice).unwrap_or(&[]);
            if !write_indices(partial, out, out_cap, out_len) {
                return RINGMESH_BUFFER_TOO_SMALL;
            }
            set_last_error(format!("{} ({}): {}", err.code(), err.reason(), err));
            status
        }
    }
}

/// Copy the calling thread's last error message into `out` and clear it.
#[no_mangle]
pub extern "C" fn ringmesh_last_error(out: *mut c_char, out_cap: usize) -> usize {
    let msg = take_last_error().unwrap_or_default();
    write_c_string(out, out_cap, &msg)
}

#[no_mangle]
pub extern "C" fn ringmesh_max_ring_vertices() -> usize {
    config::limits().max_ring_vertices
}
