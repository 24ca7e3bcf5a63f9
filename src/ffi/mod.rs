//! C ABI for native hosts linking the static library.

pub mod exports;
pub mod types;
