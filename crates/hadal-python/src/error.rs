//! HadalStatus -> Python exception mapping with recovery hints.

use pyo3::exceptions::{PyMemoryError, PyRuntimeError, PyValueError};
use pyo3::PyResult;

/// Check an FFI status code. Returns `Ok(())` on success, raises a
/// typed Python exception with a recovery hint on error.
pub(crate) fn check_status(code: i32) -> PyResult<()> {
    if code == 0 {
        return Ok(());
    }
    let (msg, hint) = error_detail(code);
    let full = format!("hadal error {code}: {msg}\n  Hint: {hint}");
    match code {
        // Argument / alignment / shape problems (caller's fault) → ValueError
        -2 | -3 | -5 | -6 | -7 | -8 => Err(PyValueError::new_err(full)),

        // Allocation failure → MemoryError
        -4 => Err(PyMemoryError::new_err(full)),

        // Everything else (stale handles, kernel failures, panics) → RuntimeError
        _ => Err(PyRuntimeError::new_err(full)),
    }
}

/// Returns `(message, recovery_hint)` for each FFI status code.
fn error_detail(code: i32) -> (&'static str, &'static str) {
    match code {
        -1 => (
            "invalid buffer handle (already freed?)",
            "The Buffer was destroyed. Don't call .destroy() and then keep \
             using the object; inside a `with` block, access is only valid \
             until the block exits.",
        ),
        -2 => (
            "invalid argument",
            "An argument was null or out of range. Check the call site \
             against the function signature.",
        ),
        -3 => (
            "invalid alignment",
            "Alignment must be a power of two and at least 8 bytes \
             (e.g. 8, 64, 4096).",
        ),
        -4 => (
            "allocation failed (out of memory)",
            "The allocator could not provide the requested region. Reduce \
             the buffer length or free unused buffers first.",
        ),
        -5 => (
            "buffer size overflows",
            "length * 8 bytes exceeds what the platform can address. \
             Request a smaller buffer.",
        ),
        -6 => (
            "input/output length mismatch",
            "All input buffers must have exactly the output buffer's \
             length. Check the lengths of every buffer you passed.",
        ),
        -7 => (
            "wrong number of inputs for this kernel",
            "Check the kernel's arity: hadamard/add/sub take two inputs, \
             scale takes one.",
        ),
        -8 => (
            "unknown kernel name",
            "No kernel is registered under that name. Valid names: \
             'hadamard', 'add', 'sub'.",
        ),
        -9 => (
            "kernel execution failed",
            "The kernel reported an error for one of its chunks. This \
             does not happen with the built-in kernels; check any custom \
             kernel's apply() logic.",
        ),
        -10 => (
            "non-finite value in kernel output",
            "Sentinel checking found NaN or infinity in the result. Check \
             the input data for non-finite values or overflow-prone \
             magnitudes.",
        ),
        -11 => (
            "destination buffer too small",
            "Pass a destination with capacity for the whole buffer.",
        ),
        -12 => (
            "worker thread panicked",
            "A dispatch worker crashed. This indicates a bug in a custom \
             kernel; the built-in kernels do not panic.",
        ),
        -13 => (
            "internal error (poisoned lock)",
            "A previous panic left internal state locked. Restart the \
             process.",
        ),
        -128 => (
            "panic caught at the FFI boundary",
            "This is a bug in hadal itself — please report it.",
        ),
        _ => ("unrecognized status code", "Update the hadal package."),
    }
}
