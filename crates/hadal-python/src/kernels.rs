//! Kernel dispatch functions exposed to Python.

use std::ffi::CString;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use hadal_ffi::{
    hadal_buffer_alignment, hadal_buffer_alloc, hadal_buffer_free, hadal_buffer_len,
    hadal_dispatch, hadal_multiply, hadal_scale,
};

use crate::buffer::Buffer;
use crate::error::check_status;

/// Allocate an output buffer shaped like the buffer behind `handle`
/// (same length, same boundary). Returns `(status, out_handle)`.
fn alloc_like(handle: u64) -> (i32, u64) {
    let mut len = 0u64;
    let status = hadal_buffer_len(handle, &mut len);
    if status != 0 {
        return (status, 0);
    }
    let mut alignment = 0u64;
    let status = hadal_buffer_alignment(handle, &mut alignment);
    if status != 0 {
        return (status, 0);
    }
    let mut out = 0u64;
    let status = hadal_buffer_alloc(len, alignment, &mut out);
    (status, out)
}

/// Elementwise multiply: returns a new Buffer with `a[i] * b[i]`.
#[pyfunction]
pub(crate) fn multiply(py: Python<'_>, a: PyRef<'_, Buffer>, b: PyRef<'_, Buffer>) -> PyResult<Buffer> {
    let ha = a.require_handle()?;
    let hb = b.require_handle()?;
    // Release GIL: dispatch locks the buffer table and buffer mutexes.
    let (status, out) = py.detach(|| {
        let (status, out) = alloc_like(ha);
        if status != 0 {
            return (status, 0);
        }
        let status = hadal_multiply(ha, hb, out);
        if status != 0 {
            hadal_buffer_free(out);
            return (status, 0);
        }
        (0, out)
    });
    check_status(status)?;
    Ok(Buffer::from_handle(out))
}

/// Scalar multiply: returns a new Buffer with `factor * input[i]`.
#[pyfunction]
pub(crate) fn scale(py: Python<'_>, input: PyRef<'_, Buffer>, factor: f64) -> PyResult<Buffer> {
    let h = input.require_handle()?;
    let (status, out) = py.detach(|| {
        let (status, out) = alloc_like(h);
        if status != 0 {
            return (status, 0);
        }
        let status = hadal_scale(h, factor, out);
        if status != 0 {
            hadal_buffer_free(out);
            return (status, 0);
        }
        (0, out)
    });
    check_status(status)?;
    Ok(Buffer::from_handle(out))
}

/// Dispatch a named kernel ('hadamard', 'add', 'sub') over the inputs,
/// returning a new Buffer.
///
/// Args:
///     name: Registered kernel name.
///     inputs: Input buffers; count must match the kernel's arity.
///     workers: Worker threads; 1 runs serially.
#[pyfunction]
#[pyo3(signature = (name, inputs, workers=1))]
pub(crate) fn dispatch(
    py: Python<'_>,
    name: &str,
    inputs: Vec<PyRef<'_, Buffer>>,
    workers: u32,
) -> PyResult<Buffer> {
    if inputs.is_empty() {
        return Err(PyValueError::new_err(
            "dispatch needs at least one input buffer to shape the output",
        ));
    }
    let c_name = CString::new(name)
        .map_err(|_| PyValueError::new_err("kernel name must not contain NUL bytes"))?;
    let handles: Vec<u64> = inputs
        .iter()
        .map(|b| b.require_handle())
        .collect::<PyResult<_>>()?;

    let (status, out) = py.detach(move || {
        let (status, out) = alloc_like(handles[0]);
        if status != 0 {
            return (status, 0);
        }
        let status = hadal_dispatch(
            c_name.as_ptr(),
            handles.as_ptr(),
            handles.len(),
            out,
            workers,
        );
        if status != 0 {
            hadal_buffer_free(out);
            return (status, 0);
        }
        (0, out)
    });
    check_status(status)?;
    Ok(Buffer::from_handle(out))
}
