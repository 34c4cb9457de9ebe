//! C-compatible status codes.
//!
//! [`HadalStatus`] is a `repr(i32)` enum covering every error condition
//! the FFI surface can report. Conversions from the Rust error types
//! (`AlignmentError`, `AllocError`, `DispatchError`) are provided.

use hadal_buffer::AllocError;
use hadal_core::{AlignmentError, DispatchError};

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HadalStatus {
    /// Success.
    Ok = 0,
    /// Handle is invalid or was already freed.
    InvalidHandle = -1,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -2,
    /// Alignment is zero, not a power of two, or below 8.
    InvalidAlignment = -3,
    /// The allocator could not satisfy the request.
    AllocationFailed = -4,
    /// The requested byte size overflows.
    SizeOverflow = -5,
    /// An input vector's length differs from the output length.
    LengthMismatch = -6,
    /// The number of inputs does not match the kernel's arity.
    InputArity = -7,
    /// No kernel is registered under the given name.
    UnknownKernel = -8,
    /// A kernel invocation returned an error.
    KernelFailed = -9,
    /// A non-finite value was produced with sentinel checking enabled.
    NonFinite = -10,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -11,
    /// A worker thread panicked mid-dispatch.
    WorkerPanicked = -12,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -13,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&AlignmentError> for HadalStatus {
    fn from(_e: &AlignmentError) -> Self {
        HadalStatus::InvalidAlignment
    }
}

impl From<&AllocError> for HadalStatus {
    fn from(e: &AllocError) -> Self {
        match e {
            AllocError::SizeOverflow { .. } => HadalStatus::SizeOverflow,
            AllocError::OutOfMemory { .. } => HadalStatus::AllocationFailed,
        }
    }
}

impl From<&DispatchError> for HadalStatus {
    fn from(e: &DispatchError) -> Self {
        match e {
            DispatchError::KernelFailed { .. } => HadalStatus::KernelFailed,
            DispatchError::InputArity { .. } => HadalStatus::InputArity,
            DispatchError::LengthMismatch { .. } => HadalStatus::LengthMismatch,
            DispatchError::NonFinite { .. } => HadalStatus::NonFinite,
            DispatchError::WorkerPanicked => HadalStatus::WorkerPanicked,
        }
    }
}
