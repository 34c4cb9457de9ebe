//! C FFI bindings for the Hadal aligned-buffer and kernel runtime.
//!
//! Exposes a C-compatible API for managed-runtime bindings: aligned
//! buffer allocation behind slot+generation handles, explicit
//! copy-in/copy-out, and named kernel dispatch. This crate is one of
//! two that may contain `unsafe` code (along with `hadal-buffer`);
//! every `unsafe` block sits at a pointer-crossing boundary with a
//! `SAFETY:` comment.
//!
//! # Handle discipline
//!
//! Handles are `u64` values with a generation counter baked in. A freed
//! handle goes stale rather than dangling: double-free and
//! use-after-free return [`HadalStatus::InvalidHandle`] instead of
//! corrupting memory. Handle value 0 is never issued and is always
//! invalid, so callers can use it as a null sentinel.
//!
//! # Status codes
//!
//! Every entry point returns an `i32` status: `0` for success, negative
//! for errors (see [`HadalStatus`]). Panics are caught at the boundary
//! and reported as [`HadalStatus::Panicked`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Catch panics at the FFI boundary, converting them to a status code.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $crate::status::HadalStatus::Panicked as i32,
        }
    };
}

/// Lock a mutex, bailing out with `InternalError` if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::HadalStatus::InternalError as i32,
        }
    };
}

pub mod buffer;
mod handle;
pub mod kernel;
pub mod status;

pub use buffer::{
    hadal_buffer_alignment, hadal_buffer_alloc, hadal_buffer_fill, hadal_buffer_free,
    hadal_buffer_len, hadal_buffer_read, hadal_buffer_write,
};
pub use kernel::{hadal_dispatch, hadal_multiply, hadal_scale};
pub use status::HadalStatus;
