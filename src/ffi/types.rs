use core::ffi::c_char;

/// Status codes returned by the C entry points.
pub const RINGMESH_OK: i32 = 0;
pub const RINGMESH_INVALID_RING: i32 = 1;
pub const RINGMESH_EMPTY_POLYGON: i32 = 2;
pub const RINGMESH_MALFORMED_PAYLOAD: i32 = 3;
/// Partial indices were written; treat them as incomplete.
pub const RINGMESH_INCOMPLETE: i32 = 4;
/// `out_cap` too small; `*out_len` holds the required length.
pub const RINGMESH_BUFFER_TOO_SMALL: i32 = 5;
pub const RINGMESH_NULL_POINTER: i32 = -1;

/// Build a slice from a C pointer/length pair. A null pointer is only
/// accepted for an empty slice.
///
/// # Safety
/// `ptr` must point to `len` readable, initialised `T`s when `len > 0`.
pub unsafe fn slice_from_raw<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(core::slice::from_raw_parts(ptr, len))
}

/// Write a Rust string into a C buffer (NUL-terminated).
/// Returns the number of bytes written (excluding the final NUL).
pub fn write_c_string(out: *mut c_char, cap: usize, s: &str) -> usize {
    if out.is_null() || cap == 0 {
        return 0;
    }

    let bytes = s.as_bytes();
    let n = bytes.len().min(cap - 1);

    // Safety: caller provided writable memory for `cap` bytes.
    unsafe {
        core::ptr::copy_nonoverlapping(bytes.as_ptr(), out as *mut u8, n);
        *out.add(n) = 0;
    }

    n
}
