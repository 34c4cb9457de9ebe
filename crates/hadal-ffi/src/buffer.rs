//! Buffer lifecycle FFI: alloc, free, introspection, copy-in/copy-out.
//!
//! Buffers live behind per-buffer `Arc<Mutex<AlignedBuffer>>` so the
//! global `BUFFERS` table lock is only held briefly (for handle
//! lookup). Different buffers can be operated on concurrently.

use std::slice;
use std::sync::{Arc, Mutex};

use hadal_buffer::AlignedBuffer;
use hadal_core::Alignment;

use crate::handle::HandleTable;
use crate::status::HadalStatus;

type BufferArc = Arc<Mutex<AlignedBuffer>>;

static BUFFERS: Mutex<HandleTable<BufferArc>> = Mutex::new(HandleTable::new());

/// Clone the Arc for a buffer handle, briefly locking the global table.
///
/// Returns `None` if the handle is invalid or the table mutex is
/// poisoned.
pub(crate) fn get_buffer(handle: u64) -> Option<BufferArc> {
    BUFFERS.lock().ok()?.get(handle).cloned()
}

/// Allocate a zero-initialized buffer of `len` f64 elements on the
/// given byte boundary.
///
/// On success, writes the buffer handle to `out_handle` and returns
/// `HADAL_OK`. Alignment must be a power of two and at least 8.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_alloc(len: u64, alignment: u64, out_handle: *mut u64) -> i32 {
    ffi_guard!({
        if out_handle.is_null() {
            return HadalStatus::InvalidArgument as i32;
        }
        let Ok(len) = usize::try_from(len) else {
            return HadalStatus::SizeOverflow as i32;
        };
        let Ok(alignment_bytes) = usize::try_from(alignment) else {
            return HadalStatus::InvalidAlignment as i32;
        };
        let alignment = match Alignment::new(alignment_bytes) {
            Ok(a) => a,
            Err(ref e) => return HadalStatus::from(e) as i32,
        };
        let buffer = match AlignedBuffer::new(len, alignment) {
            Ok(b) => b,
            Err(ref e) => return HadalStatus::from(e) as i32,
        };
        let handle = ffi_lock!(BUFFERS).insert(Arc::new(Mutex::new(buffer)));
        // SAFETY: out_handle was null-checked; caller guarantees it is
        // valid and aligned for a u64 write.
        unsafe { *out_handle = handle };
        HadalStatus::Ok as i32
    })
}

/// Free a buffer previously returned by [`hadal_buffer_alloc`].
///
/// Freeing an invalid or already-freed handle returns
/// `HADAL_INVALID_HANDLE`; it never corrupts memory.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_free(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(BUFFERS).remove(handle) {
            Some(_) => HadalStatus::Ok as i32,
            None => HadalStatus::InvalidHandle as i32,
        }
    })
}

/// Write the buffer's element count to `out_len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_len(handle: u64, out_len: *mut u64) -> i32 {
    ffi_guard!({
        if out_len.is_null() {
            return HadalStatus::InvalidArgument as i32;
        }
        let Some(arc) = get_buffer(handle) else {
            return HadalStatus::InvalidHandle as i32;
        };
        let buffer = ffi_lock!(arc);
        // SAFETY: out_len was null-checked; caller guarantees validity.
        unsafe { *out_len = buffer.len() as u64 };
        HadalStatus::Ok as i32
    })
}

/// Write the buffer's alignment in bytes to `out_alignment`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_alignment(handle: u64, out_alignment: *mut u64) -> i32 {
    ffi_guard!({
        if out_alignment.is_null() {
            return HadalStatus::InvalidArgument as i32;
        }
        let Some(arc) = get_buffer(handle) else {
            return HadalStatus::InvalidHandle as i32;
        };
        let buffer = ffi_lock!(arc);
        // SAFETY: out_alignment was null-checked; caller guarantees
        // validity.
        unsafe { *out_alignment = buffer.alignment().bytes() as u64 };
        HadalStatus::Ok as i32
    })
}

/// Copy the whole buffer out into `dst` (explicit copy-out).
///
/// `dst_len` is the capacity of `dst` in elements; it must be at least
/// the buffer length or `HADAL_BUFFER_TOO_SMALL` is returned.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_read(handle: u64, dst: *mut f64, dst_len: u64) -> i32 {
    ffi_guard!({
        if dst.is_null() {
            return HadalStatus::InvalidArgument as i32;
        }
        let Some(arc) = get_buffer(handle) else {
            return HadalStatus::InvalidHandle as i32;
        };
        let buffer = ffi_lock!(arc);
        if dst_len < buffer.len() as u64 {
            return HadalStatus::BufferTooSmall as i32;
        }
        // SAFETY: dst was null-checked and the caller guarantees it is
        // valid for dst_len >= buffer.len() f64 writes.
        let dst = unsafe { slice::from_raw_parts_mut(dst, buffer.len()) };
        dst.copy_from_slice(buffer.as_slice());
        HadalStatus::Ok as i32
    })
}

/// Copy `src` into the buffer (explicit copy-in).
///
/// `src_len` must equal the buffer length exactly.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_write(handle: u64, src: *const f64, src_len: u64) -> i32 {
    ffi_guard!({
        if src.is_null() {
            return HadalStatus::InvalidArgument as i32;
        }
        let Some(arc) = get_buffer(handle) else {
            return HadalStatus::InvalidHandle as i32;
        };
        let mut buffer = ffi_lock!(arc);
        if src_len != buffer.len() as u64 {
            return HadalStatus::LengthMismatch as i32;
        }
        // SAFETY: src was null-checked and the caller guarantees it is
        // valid for src_len f64 reads; src_len == buffer.len().
        let src = unsafe { slice::from_raw_parts(src, buffer.len()) };
        buffer.as_mut_slice().copy_from_slice(src);
        HadalStatus::Ok as i32
    })
}

/// Set every element of the buffer to `value`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_buffer_fill(handle: u64, value: f64) -> i32 {
    ffi_guard!({
        let Some(arc) = get_buffer(handle) else {
            return HadalStatus::InvalidHandle as i32;
        };
        ffi_lock!(arc).fill(value);
        HadalStatus::Ok as i32
    })
}
